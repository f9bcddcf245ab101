//! YAML: та же форма документа, что и у JSON.

use crate::{
    error::Result,
    formats::document::{ContractDoc, ContractOut},
    model::{Contract, ContractView},
};
use std::io::{BufRead, Write};

pub struct Yaml;

impl crate::traits::ReadFormat for Yaml {
    fn read<R: BufRead>(r: R) -> Result<Vec<Contract>> {
        let docs: Vec<ContractDoc> = serde_yaml::from_reader(r)?;
        Ok(docs.into_iter().map(ContractDoc::into_contract).collect())
    }
}

impl crate::traits::WriteFormat for Yaml {
    fn write<W: Write>(w: W, views: &[ContractView]) -> Result<()> {
        let out: Vec<ContractOut> = views.iter().map(ContractOut::from).collect();
        serde_yaml::to_writer(w, &out)?;
        Ok(())
    }
}
