//! Общая форма документа для JSON и YAML.
//!
//! Вход: массив контрактов. Имена полей английские, плюс псевдонимы
//! старых португальских имён (`objeto`, `medicoes`, `dataInicio`, ...).
//! Суммы — число или строка; всё, что не разобралось, считается
//! отсутствующим. Даты — строка; неразобранная дата = нет даты.
//!
//! Выход: записи дашборда, деньги числами, `null` для неизвестных.

use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{de::IgnoredAny, Deserialize, Serialize};
use tracing::warn;

use crate::{
    config::Locale,
    model::{Contract, ContractView, ForecastSeries, GeoPoint, Measurement, MeasurementRow},
    parse::{parse_amount, parse_date},
};

/* ------------------------------- READ ----------------------------------- */

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawValue {
    Number(serde_json::Number),
    Text(String),
    Other(IgnoredAny),
}

impl RawValue {
    fn amount(&self) -> Option<Decimal> {
        match self {
            RawValue::Number(n) => parse_amount(&n.to_string()),
            RawValue::Text(s) => parse_amount(s),
            RawValue::Other(_) => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        match self {
            RawValue::Text(s) => parse_date(s),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContractDoc {
    id: String,
    #[serde(alias = "objeto")]
    name: String,
    #[serde(alias = "empresa")]
    contractor: String,
    #[serde(default, alias = "valorTotal")]
    total_value: Option<RawValue>,
    #[serde(default, alias = "observacoes")]
    notes: Option<String>,
    #[serde(default, alias = "previsaoInicio")]
    predicted_start: Option<RawValue>,
    #[serde(default, alias = "previsaoFim")]
    predicted_end: Option<RawValue>,
    #[serde(default, alias = "localizacao")]
    location: Option<GeoPoint>,
    #[serde(default)]
    locale: Option<Locale>,
    #[serde(default, alias = "medicoes")]
    measurements: Vec<MeasurementDoc>,
    #[serde(default, alias = "cronogramas")]
    forecasts: Vec<ForecastDoc>,
}

#[derive(Debug, Deserialize)]
struct MeasurementDoc {
    id: u32,
    #[serde(default, alias = "dataInicio")]
    start: Option<RawValue>,
    #[serde(default, alias = "dataFim")]
    end: Option<RawValue>,
    #[serde(default, alias = "valor")]
    amount: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct ForecastDoc {
    #[serde(alias = "nome")]
    name: String,
    #[serde(default, alias = "valoresAcumulados")]
    values: Vec<Option<RawValue>>,
}

fn amount_field(raw: Option<&RawValue>, contract: &str, field: &str) -> Option<Decimal> {
    let raw = raw?;
    let amount = raw.amount();
    if amount.is_none() {
        warn!(contract, field, value = ?raw, "unparseable amount, treating as absent");
    }
    amount
}

fn date_field(raw: Option<&RawValue>, contract: &str, field: &str) -> Option<NaiveDate> {
    let raw = raw?;
    let date = raw.date();
    if date.is_none() {
        warn!(contract, field, value = ?raw, "unparseable date, treating as undated");
    }
    date
}

impl ContractDoc {
    pub(crate) fn into_contract(self) -> Contract {
        let id = self.id;
        let total_value =
            amount_field(self.total_value.as_ref(), &id, "total_value").unwrap_or(Decimal::ZERO);

        let measurements = self
            .measurements
            .into_iter()
            .map(|m| Measurement {
                id: m.id,
                start: date_field(m.start.as_ref(), &id, "start"),
                end: date_field(m.end.as_ref(), &id, "end"),
                amount: amount_field(m.amount.as_ref(), &id, "amount"),
            })
            .collect();

        let forecasts = self
            .forecasts
            .into_iter()
            .map(|f| ForecastSeries {
                values: f
                    .values
                    .iter()
                    .map(|v| amount_field(v.as_ref(), &id, "forecast"))
                    .collect(),
                name: f.name,
            })
            .collect();

        Contract {
            predicted_start: date_field(self.predicted_start.as_ref(), &id, "predicted_start"),
            predicted_end: date_field(self.predicted_end.as_ref(), &id, "predicted_end"),
            name: self.name,
            contractor: self.contractor,
            total_value,
            notes: self.notes,
            location: self.location,
            locale: self.locale,
            measurements,
            forecasts,
            id,
        }
    }
}

/* ------------------------------- WRITE ---------------------------------- */

fn num(d: Decimal) -> f64 {
    d.to_f64().unwrap_or_default()
}

fn nums(values: &[Option<Decimal>]) -> Vec<Option<f64>> {
    values.iter().map(|v| v.map(num)).collect()
}

#[derive(Debug, Serialize)]
pub(crate) struct ContractOut<'a> {
    id: &'a str,
    name: &'a str,
    contractor: &'a str,
    total_value: f64,
    notes: Option<&'a str>,
    predicted_start: &'a str,
    predicted_end: &'a str,
    location: Option<GeoPoint>,
    measurements: Vec<MeasurementOut<'a>>,
    chart: ChartOut<'a>,
}

#[derive(Debug, Serialize)]
struct MeasurementOut<'a> {
    id: u32,
    start: &'a str,
    end: &'a str,
    label: &'a str,
    amount: Option<f64>,
    accumulated: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ChartOut<'a> {
    labels: &'a [String],
    executed: Vec<Option<f64>>,
    /// первый прогноз отдельно, для простых графиков
    forecast: Vec<Option<f64>>,
    forecasts: Vec<DatasetOut<'a>>,
    executed_total: f64,
    percent_executed: f64,
}

#[derive(Debug, Serialize)]
struct DatasetOut<'a> {
    label: &'a str,
    data: Vec<Option<f64>>,
}

impl<'a> From<&'a MeasurementRow> for MeasurementOut<'a> {
    fn from(r: &'a MeasurementRow) -> Self {
        MeasurementOut {
            id: r.id,
            start: &r.start,
            end: &r.end,
            label: &r.label,
            amount: r.amount.map(num),
            accumulated: r.accumulated.map(num),
        }
    }
}

impl<'a> From<&'a ContractView> for ContractOut<'a> {
    fn from(v: &'a ContractView) -> Self {
        let chart = &v.chart;
        ContractOut {
            id: &v.id,
            name: &v.name,
            contractor: &v.contractor,
            total_value: num(v.total_value),
            notes: v.notes.as_deref(),
            predicted_start: &v.predicted_start,
            predicted_end: &v.predicted_end,
            location: v.location,
            measurements: v.measurements.iter().map(MeasurementOut::from).collect(),
            chart: ChartOut {
                labels: &chart.labels,
                executed: nums(&chart.executed),
                forecast: nums(chart.primary_forecast()),
                forecasts: chart
                    .forecasts
                    .iter()
                    .map(|f| DatasetOut {
                        label: &f.name,
                        data: nums(&f.values),
                    })
                    .collect(),
                executed_total: num(chart.summary.executed_total),
                percent_executed: num(chart.summary.percent_executed),
            },
        }
    }
}
