//! cronolib — сверка фактического исполнения строительных контрактов
//! с прогнозными графиками и подготовка данных для графиков дашборда.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod label;
pub mod model;
pub mod parse;
pub mod provider;
pub mod reconcile;
pub mod traits;

pub mod formats {
    pub(crate) mod document;

    pub mod csv;
    pub mod json;
    pub mod xml;
    pub mod yaml;
}
