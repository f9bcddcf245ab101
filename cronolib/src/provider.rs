//! Источники контрактов. Сверка ничего не знает о том, откуда пришли
//! данные: вызывающий получает их через `ContractProvider`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    error::{CronoError, Result},
    formats::{json::Json, yaml::Yaml},
    model::Contract,
    traits::ReadFormat,
};

pub trait ContractProvider {
    fn contracts(&self) -> Result<Vec<Contract>>;
}

/// Контракты, уже собранные в памяти (тесты, встраивание).
#[derive(Debug, Clone, Default)]
pub struct InMemory(pub Vec<Contract>);

impl ContractProvider for InMemory {
    fn contracts(&self) -> Result<Vec<Contract>> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// По расширению файла: `.json`, `.yaml`, `.yml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
            _ => Err(CronoError::Unsupported("input file extension")),
        }
    }

    pub fn read<R: BufRead>(self, r: R) -> Result<Vec<Contract>> {
        match self {
            InputFormat::Json => Json::read(r),
            InputFormat::Yaml => Yaml::read(r),
        }
    }
}

/// Файл с массивом контрактов в JSON или YAML.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
    format: InputFormat,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>, format: InputFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn detect(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = InputFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContractProvider for FileProvider {
    fn contracts(&self) -> Result<Vec<Contract>> {
        debug!(path = %self.path.display(), format = ?self.format, "loading contracts");
        self.format.read(BufReader::new(File::open(&self.path)?))
    }
}
