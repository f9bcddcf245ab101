//! Настройки сверки. Загружаются из YAML, все поля необязательны.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CronoError, Result};

/// Число периодов общей оси, если у контракта нет ни одного измерения.
pub const DEFAULT_GENERIC_PERIODS: usize = 12;

/// Верхняя граница общей оси: сто лет помесячно.
pub const MAX_GENERIC_PERIODS: usize = 1200;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR", alias = "pt_BR", alias = "pt")]
    PtBr,
    #[serde(rename = "en-US", alias = "en_US", alias = "en")]
    EnUs,
}

impl FromStr for Locale {
    type Err = CronoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(CronoError::Parse(format!("unknown locale: {other}"))),
        }
    }
}

/// Какая дата измерения даёт подпись периода.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabelSource {
    #[default]
    Start,
    End,
}

impl FromStr for LabelSource {
    type Err = CronoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(LabelSource::Start),
            "end" => Ok(LabelSource::End),
            other => Err(CronoError::Parse(format!("unknown label source: {other}"))),
        }
    }
}

/// Как подписывается период, сумма которого ещё не реализована.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PendingLabels {
    /// Подпись по дате измерения, как у реализованных.
    #[default]
    Advance,
    /// Ось дат не продвигается по нереализованным измерениям: на их
    /// позициях стоят порядковые подписи ("9º Mês", "10º Mês", ...).
    Freeze,
}

impl FromStr for PendingLabels {
    type Err = CronoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advance" => Ok(PendingLabels::Advance),
            "freeze" => Ok(PendingLabels::Freeze),
            other => Err(CronoError::Parse(format!("unknown pending labels policy: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReconcilerConfig {
    pub label_source: LabelSource,
    pub pending_labels: PendingLabels,
    pub generic_periods: usize,
    pub locale: Locale,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            label_source: LabelSource::default(),
            pending_labels: PendingLabels::default(),
            generic_periods: DEFAULT_GENERIC_PERIODS,
            locale: Locale::default(),
        }
    }
}

impl ReconcilerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ReconcilerConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.generic_periods == 0 {
            return Err(CronoError::Config(
                "generic_periods must be at least 1".into(),
            ));
        }
        if self.generic_periods > MAX_GENERIC_PERIODS {
            return Err(CronoError::Config(format!(
                "generic_periods must be at most {MAX_GENERIC_PERIODS}, got {}",
                self.generic_periods
            )));
        }
        Ok(())
    }
}
