//! Мягкий разбор входных значений. Ничего не падает: неразобранная дата
//! или сумма превращается в `None`, а вызывающий решает, что это значит.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// ISO-дата (`2025-05-01`, допускается хвост `T12:00:00`) или `dd/mm/yyyy`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let s = s.split_once('T').map(|(d, _)| d).unwrap_or(s);
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// Бразильская запись: точки только как разделители тысяч, одна
/// десятичная запятая и не больше двух знаков после неё.
const BR_AMOUNT: &str = r"^[+-]?(\d{1,3}(\.\d{3})+|\d+),\d{1,2}$";

fn br_amount() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BR_AMOUNT).ok()).as_ref()
}

/// Сумма: `124644.24`, `1.5e3`, или бразильская запись `124.644,24`.
/// Неоднозначные записи (`124,644.24`, `1,234`) не угадываются: `None`.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = Decimal::from_str(s) {
        return Some(d);
    }
    if let Ok(d) = Decimal::from_scientific(s) {
        return Some(d);
    }
    if br_amount()?.is_match(s) {
        let normalized = s.replace('.', "").replace(',', ".");
        return Decimal::from_str(&normalized).ok();
    }
    None
}
