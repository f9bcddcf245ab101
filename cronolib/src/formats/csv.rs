//! Плоская таблица измерений, только запись. Заголовки:
//! contract_id,contract_name,measurement,start,end,label,amount,accumulated,percent_executed
//!
//! Одна строка на измерение; контракты без измерений строк не дают.

use crate::{
    error::{CronoError, Result},
    model::{Contract, ContractView},
};
use csv::WriterBuilder;
use std::io::{BufRead, Write};

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    contract_id: &'a str,
    contract_name: &'a str,
    measurement: u32,
    start: &'a str,
    end: &'a str,
    label: &'a str,
    amount: Option<String>,
    accumulated: Option<String>,
    percent_executed: String,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(_r: R) -> Result<Vec<Contract>> {
        Err(CronoError::Unsupported("csv input"))
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, views: &[ContractView]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for v in views {
            let percent = v.chart.summary.percent_executed.to_string();
            for m in &v.measurements {
                let out = CsvOutRow {
                    contract_id: &v.id,
                    contract_name: &v.name,
                    measurement: m.id,
                    start: &m.start,
                    end: &m.end,
                    label: &m.label,
                    amount: m.amount.map(|a| a.to_string()),
                    accumulated: m.accumulated.map(|a| a.to_string()),
                    percent_executed: percent.clone(),
                };
                wrt.serialize(out)?;
            }
        }
        wrt.flush()?;
        Ok(())
    }
}
