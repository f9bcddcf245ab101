//! JSON: массив контрактов на входе, массив записей дашборда на выходе.

use crate::{
    error::Result,
    formats::document::{ContractDoc, ContractOut},
    model::{Contract, ContractView},
};
use std::io::{BufRead, Write};

pub struct Json;

impl crate::traits::ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<Contract>> {
        let docs: Vec<ContractDoc> = serde_json::from_reader(r)?;
        Ok(docs.into_iter().map(ContractDoc::into_contract).collect())
    }
}

impl crate::traits::WriteFormat for Json {
    fn write<W: Write>(mut w: W, views: &[ContractView]) -> Result<()> {
        let out: Vec<ContractOut> = views.iter().map(ContractOut::from).collect();
        serde_json::to_writer_pretty(&mut w, &out)?;
        writeln!(w)?;
        Ok(())
    }
}
