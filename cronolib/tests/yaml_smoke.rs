use cronolib::{
    config::ReconcilerConfig,
    dashboard::build_view,
    formats::yaml::Yaml,
    traits::{ReadFormat, WriteFormat},
};
use rust_decimal::Decimal;
use std::io::Cursor;

const INPUT: &str = r#"
- id: CT 048/25
  name: CECE Romão
  contractor: Adriana Rodrigues Belles
  total_value: 1480000.00
  notes: OS Emitida em 07/07/2025
  predicted_start: "2025-07-07"
  predicted_end: "2026-02-06"
  location: { lat: -23.184126, lng: -46.853513 }
  forecasts:
    - name: Previsto Inicial
      values: [149571.75, 318610.50, ~, 866856.13]
  measurements:
    - { id: 1, start: "2025-07-07", end: "2025-08-06", amount: 149571.75 }
    - { id: 2, start: "2025-08-07", end: "2025-09-06", amount: "57580.00" }
    - { id: 3, start: "2025-09-07", end: "2025-10-06" }
"#;

#[test]
fn yaml_read_minimal() {
    let contracts = Yaml::read(Cursor::new(INPUT)).expect("yaml read");
    assert_eq!(contracts.len(), 1);
    let c = &contracts[0];
    assert_eq!(c.id, "CT 048/25");
    assert_eq!(c.total_value, Decimal::new(1480000, 0));
    assert_eq!(c.measurements[1].amount, Some(Decimal::new(5758000, 2)));
    assert_eq!(c.measurements[2].amount, None);
    assert_eq!(c.forecasts[0].values[2], None);
}

#[test]
fn yaml_write_then_parse() {
    let contracts = Yaml::read(Cursor::new(INPUT)).expect("yaml read");
    let view = build_view(&contracts[0], &ReconcilerConfig::default());
    assert_eq!(view.chart.labels, ["Jul/25", "Ago/25", "Set/25"]);

    let mut out = Vec::new();
    Yaml::write(&mut out, &[view]).expect("yaml write");
    let v: serde_yaml::Value = serde_yaml::from_slice(&out).expect("valid yaml");
    let chart = &v[0]["chart"];
    assert_eq!(chart["executed"][1].as_f64(), Some(207151.75));
    assert!(chart["executed"][2].is_null());
    assert_eq!(chart["forecast"].as_sequence().map(|s| s.len()), Some(3));
}
