//! Подписи оси и отображение дат. Ядро сверки от локали не зависит:
//! всё, что касается представления, проходит через `LabelFormatter`.

use chrono::{Datelike, NaiveDate};

use crate::config::Locale;

/// Подпись для отсутствующей даты.
pub const MISSING: &str = "N/A";

pub trait LabelFormatter {
    /// Подпись периода: "Mai/25", "May/25".
    fn period_label(&self, date: NaiveDate) -> String;

    /// Порядковая подпись периода, `index` с нуля.
    fn generic_label(&self, index: usize) -> String;

    /// Полная дата для таблицы измерений.
    fn display_date(&self, date: NaiveDate) -> String;

    fn period_label_opt(&self, date: Option<NaiveDate>) -> String {
        date.map(|d| self.period_label(d))
            .unwrap_or_else(|| MISSING.to_string())
    }

    fn display_date_opt(&self, date: Option<NaiveDate>) -> String {
        date.map(|d| self.display_date(d))
            .unwrap_or_else(|| MISSING.to_string())
    }
}

const MONTHS_PT: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleFormatter {
    pub locale: Locale,
}

impl LocaleFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl LabelFormatter for LocaleFormatter {
    fn period_label(&self, date: NaiveDate) -> String {
        let months = match self.locale {
            Locale::PtBr => &MONTHS_PT,
            Locale::EnUs => &MONTHS_EN,
        };
        // month0() всегда в 0..12
        let month = months[date.month0() as usize];
        format!("{}/{}", month, date.format("%y"))
    }

    fn generic_label(&self, index: usize) -> String {
        let n = index + 1;
        match self.locale {
            Locale::PtBr => format!("{n}º Mês"),
            Locale::EnUs => format!("{n}{} period", ordinal_suffix(n)),
        }
    }

    fn display_date(&self, date: NaiveDate) -> String {
        match self.locale {
            Locale::PtBr => date.format("%d/%m/%Y").to_string(),
            Locale::EnUs => date.format("%m/%d/%Y").to_string(),
        }
    }
}

fn ordinal_suffix(n: usize) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
