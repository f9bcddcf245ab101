//! Сверка: упорядочить измерения, построить ось, накопить факт,
//! выровнять прогнозы по оси и посчитать сводку.
//!
//! Все функции чистые. Политики для неполных данных:
//!
//! * измерение без даты начала не имеет места во времени и ставится
//!   после всех датированных, в исходном порядке;
//! * измерение без суммы даёт `None` в накопленном ряду и не двигает
//!   сумму; следующие суммы продолжают накапливаться;
//! * прогноз короче оси дополняется `None`, длиннее — обрезается;
//! * процент при `total_value <= 0` равен нулю.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::{
    config::{LabelSource, PendingLabels, ReconcilerConfig, MAX_GENERIC_PERIODS},
    label::{LabelFormatter, LocaleFormatter},
    model::{Contract, ForecastSeries, Measurement, ReconciledView, Summary},
};

/// Денежное округление: 2 знака, половина — от нуля.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Сверка с форматированием подписей в локали контракта
/// (или в локали из конфигурации, если у контракта её нет).
pub fn reconcile(contract: &Contract, config: &ReconcilerConfig) -> ReconciledView {
    let formatter = LocaleFormatter::new(contract.locale.unwrap_or(config.locale));
    reconcile_with(contract, config, &formatter)
}

pub fn reconcile_with<F>(
    contract: &Contract,
    config: &ReconcilerConfig,
    formatter: &F,
) -> ReconciledView
where
    F: LabelFormatter + ?Sized,
{
    for m in &contract.measurements {
        if let (Some(start), Some(end)) = (m.start, m.end) {
            if start > end {
                warn!(
                    contract = %contract.id,
                    measurement = m.id,
                    %start,
                    %end,
                    "measurement period ends before it starts"
                );
            }
        }
    }

    let ordered = order_measurements(&contract.measurements);
    let labels = if ordered.is_empty() {
        generic_axis(config.generic_periods, formatter)
    } else {
        axis_labels(&ordered, config, formatter)
    };
    let executed = executed_series(&ordered);

    let forecasts: Vec<ForecastSeries> = contract
        .forecasts
        .iter()
        .map(|f| align_forecast(f, labels.len()))
        .collect();

    let executed_total = executed_total(&contract.measurements);
    let summary = Summary {
        executed_total,
        percent_executed: percent_executed(executed_total, contract.total_value),
    };

    debug!(
        contract = %contract.id,
        periods = labels.len(),
        forecasts = forecasts.len(),
        %executed_total,
        percent = %summary.percent_executed,
        "contract reconciled"
    );

    ReconciledView {
        labels,
        executed,
        forecasts,
        summary,
    }
}

/// Датированные по возрастанию начала, затем недатированные.
/// Сортировка стабильна: равные даты сохраняют исходный порядок.
pub fn order_measurements(measurements: &[Measurement]) -> Vec<&Measurement> {
    let mut ordered: Vec<&Measurement> = measurements.iter().collect();
    ordered.sort_by_key(|m| (m.start.is_none(), m.start));
    ordered
}

/// Одна подпись на измерение. Если выбранной даты нет, берётся другая;
/// если нет обеих — `N/A`.
pub fn axis_labels<F>(
    ordered: &[&Measurement],
    config: &ReconcilerConfig,
    formatter: &F,
) -> Vec<String>
where
    F: LabelFormatter + ?Sized,
{
    ordered
        .iter()
        .enumerate()
        .map(|(i, m)| {
            if m.amount.is_none() && config.pending_labels == PendingLabels::Freeze {
                return formatter.generic_label(i);
            }
            let date = match config.label_source {
                LabelSource::Start => m.start.or(m.end),
                LabelSource::End => m.end.or(m.start),
            };
            formatter.period_label_opt(date)
        })
        .collect()
}

/// Порядковая ось; длина ограничена `MAX_GENERIC_PERIODS` даже для
/// конфигурации, не прошедшей `validate`.
pub fn generic_axis<F>(periods: usize, formatter: &F) -> Vec<String>
where
    F: LabelFormatter + ?Sized,
{
    if periods > MAX_GENERIC_PERIODS {
        warn!(periods, max = MAX_GENERIC_PERIODS, "generic axis too long, clamping");
    }
    (0..periods.min(MAX_GENERIC_PERIODS))
        .map(|i| formatter.generic_label(i))
        .collect()
}

/// Накопленный итог по позициям оси; `None` там, где сумма не известна.
pub fn executed_series(ordered: &[&Measurement]) -> Vec<Option<Decimal>> {
    let mut sum = Decimal::ZERO;
    ordered
        .iter()
        .map(|m| {
            m.amount.map(|amount| {
                sum = sum.saturating_add(amount);
                round_currency(sum)
            })
        })
        .collect()
}

/// Сумма реализованных измерений; порядок не важен.
pub fn executed_total(measurements: &[Measurement]) -> Decimal {
    let sum = measurements
        .iter()
        .filter_map(|m| m.amount)
        .fold(Decimal::ZERO, |acc, a| acc.saturating_add(a));
    round_currency(sum)
}

/// Процент исполнения, 2 знака, не меньше нуля.
pub fn percent_executed(executed: Decimal, total_value: Decimal) -> Decimal {
    if total_value <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let pct = executed
        .checked_div(total_value)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
    match pct {
        Some(pct) => round_currency(pct).max(Decimal::ZERO),
        None => {
            warn!(%executed, %total_value, "percent executed overflows, reporting zero");
            Decimal::ZERO
        }
    }
}

/// Позиционное выравнивание прогноза по оси длины `len`.
pub fn align_forecast(series: &ForecastSeries, len: usize) -> ForecastSeries {
    if series.values.len() > len {
        debug!(
            forecast = %series.name,
            dropped = series.values.len() - len,
            "forecast longer than axis, truncating"
        );
    }
    let mut values: Vec<Option<Decimal>> = series.values.iter().copied().take(len).collect();
    values.resize(len, None);
    ForecastSeries {
        name: series.name.clone(),
        values,
    }
}
