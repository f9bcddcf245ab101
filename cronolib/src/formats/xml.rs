//! XML-отчёт по сверке, только запись:
//! <Contracts><Contract id=".."><Summary/><Periods/><Forecasts/><Measurements/></Contract></Contracts>

use crate::{
    error::{CronoError, Result},
    model::{Contract, ContractView, ForecastSeries, MeasurementRow},
};
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

pub struct SimpleXml;

impl crate::traits::ReadFormat for SimpleXml {
    fn read<R: BufRead>(_r: R) -> Result<Vec<Contract>> {
        Err(CronoError::Unsupported("xml input"))
    }
}

/* ------------------------------- WRITE ---------------------------------- */

impl crate::traits::WriteFormat for SimpleXml {
    fn write<W: Write>(mut w: W, views: &[ContractView]) -> Result<()> {
        let mut wr = Writer::new_with_indent(&mut w, b' ', 2);

        emit(&mut wr, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        emit(&mut wr, Event::Start(BytesStart::new("Contracts")))?;
        for v in views {
            write_contract(&mut wr, v)?;
        }
        emit(&mut wr, Event::End(BytesEnd::new("Contracts")))?;
        drop(wr);

        writeln!(w)?;
        Ok(())
    }
}

fn write_contract<W: Write>(wr: &mut Writer<W>, v: &ContractView) -> Result<()> {
    let mut start = BytesStart::new("Contract");
    start.push_attribute(("id", v.id.as_str()));
    emit(wr, Event::Start(start))?;

    text_elem(wr, "Name", &v.name)?;
    text_elem(wr, "Contractor", &v.contractor)?;
    text_elem(wr, "TotalValue", &v.total_value.to_string())?;
    if let Some(notes) = &v.notes {
        text_elem(wr, "Notes", notes)?;
    }
    text_elem(wr, "PredictedStart", &v.predicted_start)?;
    text_elem(wr, "PredictedEnd", &v.predicted_end)?;

    let summary = &v.chart.summary;
    let mut s = BytesStart::new("Summary");
    s.push_attribute(("executed", summary.executed_total.to_string().as_str()));
    s.push_attribute(("percent", summary.percent_executed.to_string().as_str()));
    emit(wr, Event::Empty(s))?;

    // <Periods>: ось и накопленный факт
    emit(wr, Event::Start(BytesStart::new("Periods")))?;
    for (i, label) in v.chart.labels.iter().enumerate() {
        let mut p = BytesStart::new("Period");
        p.push_attribute(("label", label.as_str()));
        if let Some(Some(executed)) = v.chart.executed.get(i) {
            p.push_attribute(("executed", executed.to_string().as_str()));
        }
        emit(wr, Event::Empty(p))?;
    }
    emit(wr, Event::End(BytesEnd::new("Periods")))?;

    emit(wr, Event::Start(BytesStart::new("Forecasts")))?;
    for f in &v.chart.forecasts {
        write_forecast(wr, f, &v.chart.labels)?;
    }
    emit(wr, Event::End(BytesEnd::new("Forecasts")))?;

    emit(wr, Event::Start(BytesStart::new("Measurements")))?;
    for m in &v.measurements {
        write_measurement(wr, m)?;
    }
    emit(wr, Event::End(BytesEnd::new("Measurements")))?;

    emit(wr, Event::End(BytesEnd::new("Contract")))
}

fn write_forecast<W: Write>(wr: &mut Writer<W>, f: &ForecastSeries, labels: &[String]) -> Result<()> {
    let mut start = BytesStart::new("Forecast");
    start.push_attribute(("name", f.name.as_str()));
    emit(wr, Event::Start(start))?;
    for (label, value) in labels.iter().zip(&f.values) {
        let mut el = BytesStart::new("Value");
        el.push_attribute(("period", label.as_str()));
        match value {
            Some(v) => {
                emit(wr, Event::Start(el))?;
                emit(wr, Event::Text(BytesText::new(&v.to_string())))?;
                emit(wr, Event::End(BytesEnd::new("Value")))?;
            }
            None => emit(wr, Event::Empty(el))?,
        }
    }
    emit(wr, Event::End(BytesEnd::new("Forecast")))
}

fn write_measurement<W: Write>(wr: &mut Writer<W>, m: &MeasurementRow) -> Result<()> {
    let mut start = BytesStart::new("Measurement");
    start.push_attribute(("id", m.id.to_string().as_str()));
    start.push_attribute(("start", m.start.as_str()));
    start.push_attribute(("end", m.end.as_str()));
    start.push_attribute(("label", m.label.as_str()));
    emit(wr, Event::Start(start))?;
    opt_elem(wr, "Amount", m.amount)?;
    opt_elem(wr, "Accumulated", m.accumulated)?;
    emit(wr, Event::End(BytesEnd::new("Measurement")))
}

fn text_elem<W: Write>(wr: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    emit(wr, Event::Start(BytesStart::new(tag)))?;
    emit(wr, Event::Text(BytesText::new(text)))?;
    emit(wr, Event::End(BytesEnd::new(tag)))
}

/// `None` пишется пустым элементом: сумма ещё не известна.
fn opt_elem<W: Write>(wr: &mut Writer<W>, tag: &str, value: Option<Decimal>) -> Result<()> {
    match value {
        Some(v) => text_elem(wr, tag, &v.to_string()),
        None => emit(wr, Event::Empty(BytesStart::new(tag))),
    }
}

fn emit<W: Write>(wr: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    wr.write_event(event).map_err(xml)
}

fn xml<E: std::fmt::Display>(e: E) -> CronoError {
    CronoError::Xml(e.to_string())
}
