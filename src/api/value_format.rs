use std::fmt::Write;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host-supplied label formatter; replaces the built-in [`ValueFormat`] rules.
pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Locale preset for digit grouping and decimal separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberLocale {
    #[default]
    EnUs,
    EsEs,
}

impl NumberLocale {
    fn separators(self) -> (char, char) {
        match self {
            Self::EnUs => (',', '.'),
            Self::EsEs => ('.', ','),
        }
    }
}

/// Built-in label style applied to grid labels and tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum ValueFormat {
    /// Grouped number. `None` precision prints integers bare and trims
    /// trailing zeros of up to two decimals.
    Number { precision: Option<u8> },
    Currency { symbol: String, precision: u8 },
    /// Value is already expressed in percent points.
    Percent { precision: u8 },
    /// `1.2K`, `3.4M`, `1.1B`.
    Compact,
    /// Value is a unix timestamp in seconds, rendered in UTC with a
    /// `chrono` format pattern.
    Date { pattern: String },
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::Number { precision: None }
    }
}

pub fn format_value(value: f64, format: &ValueFormat, locale: NumberLocale) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    match format {
        ValueFormat::Number { precision } => match precision {
            Some(precision) => group_digits(value, usize::from(*precision), locale),
            None => format_adaptive(value, locale),
        },
        ValueFormat::Currency { symbol, precision } => {
            let grouped = group_digits(value.abs(), usize::from(*precision), locale);
            if is_negative_after_rounding(value, usize::from(*precision)) {
                format!("-{symbol}{grouped}")
            } else {
                format!("{symbol}{grouped}")
            }
        }
        ValueFormat::Percent { precision } => {
            format!("{}%", group_digits(value, usize::from(*precision), locale))
        }
        ValueFormat::Compact => format_compact(value, locale),
        ValueFormat::Date { pattern } => {
            let seconds = value.round() as i64;
            match DateTime::<Utc>::from_timestamp(seconds, 0) {
                Some(dt) => {
                    let mut out = String::new();
                    if write!(out, "{}", dt.format(pattern)).is_ok() {
                        out
                    } else {
                        format_adaptive(value, locale)
                    }
                }
                None => format_adaptive(value, locale),
            }
        }
    }
}

fn format_adaptive(value: f64, locale: NumberLocale) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return group_digits(value, 0, locale);
    }
    let text = group_digits(value, 2, locale);
    let (_, decimal) = locale.separators();
    trim_fraction(text, decimal)
}

fn format_compact(value: f64, locale: NumberLocale) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000_000.0 {
        (value / 1_000_000_000.0, "B")
    } else if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        return format_adaptive(value, locale);
    };
    let (_, decimal) = locale.separators();
    let text = trim_fraction(group_digits(scaled, 1, locale), decimal);
    format!("{text}{suffix}")
}

fn trim_fraction(text: String, decimal: char) -> String {
    if !text.contains(decimal) {
        return text;
    }
    text.trim_end_matches('0')
        .trim_end_matches(decimal)
        .to_owned()
}

fn is_negative_after_rounding(value: f64, precision: usize) -> bool {
    value.is_sign_negative()
        && format!("{:.precision$}", value.abs())
            .chars()
            .any(|ch| ch.is_ascii_digit() && ch != '0')
}

fn group_digits(value: f64, precision: usize, locale: NumberLocale) -> String {
    let (group, decimal) = locale.separators();
    let text = format!("{:.precision$}", value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 2);
    if is_negative_after_rounding(value, precision) {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(group);
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push(decimal);
        out.push_str(frac_part);
    }
    out
}
