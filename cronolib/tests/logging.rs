use chrono::NaiveDate;
use cronolib::{
    config::ReconcilerConfig,
    model::{Contract, Measurement},
    reconcile::reconcile,
};
use rust_decimal::Decimal;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured(sink: &SharedBuffer) -> String {
    let bytes = sink.0.lock().expect("lock output").clone();
    String::from_utf8(bytes).expect("utf8 log output")
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn contract(measurements: Vec<Measurement>) -> Contract {
    Contract {
        id: "CT 054/25".into(),
        name: "UBS Maringá".into(),
        contractor: "Studio Sabino".into(),
        total_value: Decimal::new(362961336, 2),
        notes: None,
        predicted_start: None,
        predicted_end: None,
        location: None,
        locale: None,
        measurements,
        forecasts: vec![],
    }
}

#[test]
fn inverted_period_warns_and_still_reconciles() {
    let c = contract(vec![
        Measurement {
            id: 1,
            start: date(2025, 5, 16),
            end: date(2025, 6, 15),
            amount: Some(Decimal::new(10000, 2)),
        },
        Measurement {
            id: 2,
            start: date(2025, 6, 10),
            end: date(2025, 6, 1),
            amount: Some(Decimal::new(5000, 2)),
        },
    ]);

    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();

    let v = tracing::subscriber::with_default(subscriber, || {
        reconcile(&c, &ReconcilerConfig::default())
    });

    // измерение остаётся на оси по дате начала
    assert_eq!(v.labels, ["Mai/25", "Jun/25"]);
    assert_eq!(
        v.executed,
        vec![Some(Decimal::new(10000, 2)), Some(Decimal::new(15000, 2))]
    );

    let text = captured(&sink);
    let line = text
        .lines()
        .find(|l| l.contains("measurement period ends before it starts"))
        .expect("warning line");
    assert!(line.contains("WARN"));
    assert!(line.contains("measurement=2"));
    assert!(line.contains("CT 054/25"));
}

#[test]
fn ordered_periods_do_not_warn() {
    let c = contract(vec![Measurement {
        id: 1,
        start: date(2025, 5, 16),
        end: date(2025, 6, 15),
        amount: Some(Decimal::new(10000, 2)),
    }]);

    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        reconcile(&c, &ReconcilerConfig::default());
    });

    assert!(!captured(&sink).contains("ends before it starts"));
}
