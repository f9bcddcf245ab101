//! Проекция контракта в запись дашборда: шапка, таблица измерений
//! с накоплением и данные графика.

use tracing::info;

use crate::{
    config::ReconcilerConfig,
    error::{CronoError, Result},
    label::{LabelFormatter, LocaleFormatter},
    model::{Contract, ContractView, MeasurementRow},
    provider::ContractProvider,
    reconcile::{order_measurements, reconcile_with},
};

pub fn find_contract<'a>(contracts: &'a [Contract], id: &str) -> Result<&'a Contract> {
    contracts
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| CronoError::NotFound(id.to_string()))
}

pub fn build_view(contract: &Contract, config: &ReconcilerConfig) -> ContractView {
    let formatter = LocaleFormatter::new(contract.locale.unwrap_or(config.locale));
    let chart = reconcile_with(contract, config, &formatter);

    // строки таблицы идут в том же порядке, что и позиции оси
    let measurements = order_measurements(&contract.measurements)
        .into_iter()
        .zip(chart.labels.iter().zip(&chart.executed))
        .map(|(m, (label, accumulated))| MeasurementRow {
            id: m.id,
            start: formatter.display_date_opt(m.start),
            end: formatter.display_date_opt(m.end),
            label: label.clone(),
            amount: m.amount,
            accumulated: *accumulated,
        })
        .collect();

    ContractView {
        id: contract.id.clone(),
        name: contract.name.clone(),
        contractor: contract.contractor.clone(),
        total_value: contract.total_value,
        notes: contract.notes.clone(),
        predicted_start: formatter.display_date_opt(contract.predicted_start),
        predicted_end: formatter.display_date_opt(contract.predicted_end),
        location: contract.location,
        measurements,
        chart,
    }
}

/// Все контракты источника в виде записей дашборда.
pub fn build_views<P>(provider: &P, config: &ReconcilerConfig) -> Result<Vec<ContractView>>
where
    P: ContractProvider + ?Sized,
{
    let contracts = provider.contracts()?;
    info!(count = contracts.len(), "building dashboard views");
    Ok(contracts.iter().map(|c| build_view(c, config)).collect())
}
