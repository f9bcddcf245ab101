//! Единый тип ошибок публичного API.
//!
//! Аномалии данных (нет даты, нет суммы, разная длина рядов) сюда не
//! попадают: они обрабатываются политиками сверки. Ошибка — это либо
//! I/O, либо структурно неверный документ, либо неверная ссылка.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CronoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Contract not found: {0}")]
    NotFound(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, CronoError>;
