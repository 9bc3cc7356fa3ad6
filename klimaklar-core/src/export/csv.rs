//! Tabular export
//!
//! One row per category in canonical order under the header
//! `Kategori,CO2e (kg)`. There is no total row.

use crate::calculator::EmissionResult;
use std::borrow::Cow;

/// Header row of the tabular export
pub const CSV_HEADER: [&str; 2] = ["Kategori", "CO2e (kg)"];

const DELIMITER: char = ',';

/// CSV exporter for emission results
pub struct CsvExporter;

impl CsvExporter {
    /// Encode a result as UTF-8 CSV
    ///
    /// Values are written in shortest round-trip form with at least one
    /// decimal (`233.0`, `0.0`).
    pub fn export(result: &EmissionResult) -> Vec<u8> {
        let mut out = String::new();
        write_record(&mut out, &CSV_HEADER);

        for (category, value) in result.entries() {
            let value = format_value(value);
            write_record(&mut out, &[category.label(), value.as_str()]);
        }

        log::debug!("Exported {} CSV rows ({} bytes)", result.entries().count(), out.len());
        out.into_bytes()
    }
}

fn write_record(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

/// Quote a field if it contains a delimiter, quote or line break
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Shortest round-trip form; scientific notation with a signed two-digit
/// exponent below 1e-4 and from 1e16 up (`2.33e+19`, `1e-05`)
fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value != 0.0 {
        let sci = format!("{:e}", value);
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            if !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
    }

    let s = value.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}
