use chrono::NaiveDate;
use cronolib::{
    config::ReconcilerConfig,
    dashboard::build_view,
    formats::xml::SimpleXml,
    model::{Contract, ForecastSeries, Measurement},
    traits::{ReadFormat, WriteFormat},
};
use rust_decimal::Decimal;
use std::io::Cursor;

#[test]
fn xml_report() {
    let c = Contract {
        id: "CT 127/24".into(),
        name: "UBS Rio Branco".into(),
        contractor: "CJM Construtora & Cia".into(),
        total_value: Decimal::new(1000, 0),
        notes: Some("Aditivo extendendo término para novembro.".into()),
        predicted_start: NaiveDate::from_ymd_opt(2024, 10, 7),
        predicted_end: None,
        location: None,
        locale: None,
        measurements: vec![
            Measurement {
                id: 1,
                start: NaiveDate::from_ymd_opt(2024, 10, 7),
                end: NaiveDate::from_ymd_opt(2024, 11, 5),
                amount: Some(Decimal::new(25050, 2)),
            },
            Measurement {
                id: 2,
                start: NaiveDate::from_ymd_opt(2024, 11, 6),
                end: NaiveDate::from_ymd_opt(2024, 12, 5),
                amount: None,
            },
        ],
        forecasts: vec![ForecastSeries {
            name: "Cronograma Inicial".into(),
            values: vec![Some(Decimal::new(300, 0))],
        }],
    };
    let view = build_view(&c, &ReconcilerConfig::default());

    let mut out = Vec::new();
    SimpleXml::write(&mut out, &[view]).expect("write xml");
    let xml = String::from_utf8(out).expect("utf8");

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<Contract id=\"CT 127/24\">"));
    assert!(xml.contains("<Contractor>CJM Construtora &amp; Cia</Contractor>"));
    assert!(xml.contains("<Summary executed=\"250.50\" percent=\"25.05\"/>"));
    assert!(xml.contains("<Period label=\"Out/24\" executed=\"250.50\"/>"));
    assert!(xml.contains("<Period label=\"Nov/24\"/>"));
    assert!(xml.contains("<Value period=\"Out/24\">300</Value>"));
    assert!(xml.contains("<Value period=\"Nov/24\"/>"));
    assert!(xml.contains("<PredictedEnd>N/A</PredictedEnd>"));
    assert!(xml.contains("<Accumulated/>"));
    assert!(xml.trim_end().ends_with("</Contracts>"));
}

#[test]
fn xml_input_is_unsupported() {
    assert!(SimpleXml::read(Cursor::new("<Contracts/>")).is_err());
}
