//! Доменные модели: контракт, измерения, прогнозные графики и
//! производное представление для графиков.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::Locale;

/// Одно измерение (медиция) выполненных работ за период.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Measurement {
    pub id: u32,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// `None` — сумма ещё не реализована.
    pub amount: Option<Decimal>,
}

/// Прогнозный накопительный график (исходный или после продления).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastSeries {
    pub name: String,
    pub values: Vec<Option<Decimal>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub id: String,
    pub name: String,
    pub contractor: String,
    pub total_value: Decimal,
    pub notes: Option<String>,
    pub predicted_start: Option<NaiveDate>,
    pub predicted_end: Option<NaiveDate>,
    pub location: Option<GeoPoint>,
    /// Локаль подписей; `None` — берётся из конфигурации.
    pub locale: Option<Locale>,
    pub measurements: Vec<Measurement>,
    pub forecasts: Vec<ForecastSeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub executed_total: Decimal,
    pub percent_executed: Decimal,
}

/// Результат сверки: общая ось, накопленный факт, выровненные прогнозы.
///
/// Инвариант: `executed.len() == labels.len()` если измерения есть
/// (иначе `executed` пуст), и каждый прогноз имеет длину `labels.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReconciledView {
    pub labels: Vec<String>,
    pub executed: Vec<Option<Decimal>>,
    pub forecasts: Vec<ForecastSeries>,
    pub summary: Summary,
}

impl ReconciledView {
    /// Первый прогноз (уже выровненный) или пустой ряд.
    pub fn primary_forecast(&self) -> &[Option<Decimal>] {
        self.forecasts
            .first()
            .map(|f| f.values.as_slice())
            .unwrap_or(&[])
    }
}

/// Строка таблицы измерений для дашборда.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeasurementRow {
    pub id: u32,
    pub start: String,
    pub end: String,
    pub label: String,
    pub amount: Option<Decimal>,
    pub accumulated: Option<Decimal>,
}

/// Запись контракта в том виде, в каком её рисует дашборд.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractView {
    pub id: String,
    pub name: String,
    pub contractor: String,
    pub total_value: Decimal,
    pub notes: Option<String>,
    pub predicted_start: String,
    pub predicted_end: String,
    pub location: Option<GeoPoint>,
    pub measurements: Vec<MeasurementRow>,
    pub chart: ReconciledView,
}
