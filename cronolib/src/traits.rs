//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.
//!
//! Читаются контракты (сырые данные), пишутся уже сверенные записи
//! дашборда.

use crate::{
    error::Result,
    model::{Contract, ContractView},
};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<Contract>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, views: &[ContractView]) -> Result<()>;
}

pub trait Format: ReadFormat + WriteFormat {}
impl<T: ReadFormat + WriteFormat> Format for T {}
