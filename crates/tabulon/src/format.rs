//! Value formatting: format templates and CSV quoting.
//!
//! Format templates follow composite-format conventions: single-letter
//! numeric specifiers with an optional precision (`N0`, `F2`, `D4`, `X8`,
//! `P1`) and date patterns assembled from `yyyy`/`MM`/`dd`/`HH`/`mm`/`ss`
//! style tokens. A template that does not fit the field's runtime value is
//! an error, never a silent fallback.

use std::fmt::Write as _;

use chrono::NaiveTime;

use crate::error::RenderError;
use crate::types::Appearance;
use crate::value::Value;

/// Formats a field value for output.
///
/// `Null` becomes the empty string before anything else happens, so a
/// missing value is never formatted and never quoted. Quoting applies only
/// in CSV context: the global `encapsulate_text` flag quotes text values
/// and suppresses the per-field flag for them; every other type is quoted
/// solely through the per-field flag.
pub(crate) fn format_value(
    value: &Value,
    appearance: &Appearance,
    csv: bool,
    encapsulate_text: bool,
) -> Result<String, RenderError> {
    if value.is_null() {
        return Ok(String::new());
    }

    let formatted = match appearance.format.as_deref().filter(|f| !f.is_empty()) {
        Some(template) => apply_format(value, template)?,
        None => value.render_plain(),
    };

    if !csv {
        return Ok(formatted);
    }

    if encapsulate_text && value.is_text() {
        return Ok(format!("\"{formatted}\""));
    }

    if appearance.encapsulate {
        return Ok(format!("\"{formatted}\""));
    }

    Ok(formatted)
}

/// Applies a format template to a non-null value.
pub(crate) fn apply_format(value: &Value, template: &str) -> Result<String, RenderError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Date(_) | Value::DateTime(_) => format_date(value, template),
        Value::Int(_) | Value::UInt(_) | Value::Float(_) => format_numeric(value, template),
        Value::Text(_) | Value::Bool(_) => Err(format_error(value, template)),
    }
}

fn format_error(value: &Value, template: &str) -> RenderError {
    RenderError::Format {
        template: template.to_string(),
        kind: value.kind(),
    }
}

/// Numeric specifier: one letter plus an optional precision.
fn format_numeric(value: &Value, template: &str) -> Result<String, RenderError> {
    let mut chars = template.chars();
    let letter = chars.next().ok_or_else(|| format_error(value, template))?;
    let rest = chars.as_str();
    let precision: Option<usize> = if rest.is_empty() {
        None
    } else {
        Some(
            rest.parse()
                .map_err(|_| format_error(value, template))?,
        )
    };

    match letter.to_ascii_uppercase() {
        // Thousands-grouped, with decimals (default 2).
        'N' => {
            let precision = precision.unwrap_or(2);
            Ok(group_thousands(&fixed_point(value, precision)))
        }
        // Fixed-point without grouping (default 2 decimals).
        'F' => {
            let precision = precision.unwrap_or(2);
            Ok(fixed_point(value, precision))
        }
        // Zero-padded decimal, integers only.
        'D' => match value {
            Value::Int(i) => Ok(format!("{:0width$}", i, width = precision.unwrap_or(0))),
            Value::UInt(u) => Ok(format!("{:0width$}", u, width = precision.unwrap_or(0))),
            _ => Err(format_error(value, template)),
        },
        // Hexadecimal, integers only; the letter's case picks the digit case.
        'X' => {
            let width = precision.unwrap_or(0);
            match (value, letter.is_ascii_uppercase()) {
                (Value::Int(i), true) => Ok(format!("{:0width$X}", i)),
                (Value::Int(i), false) => Ok(format!("{:0width$x}", i)),
                (Value::UInt(u), true) => Ok(format!("{:0width$X}", u)),
                (Value::UInt(u), false) => Ok(format!("{:0width$x}", u)),
                _ => Err(format_error(value, template)),
            }
        }
        // Percentage: value scaled by 100 (default 2 decimals).
        'P' => {
            let precision = precision.unwrap_or(2);
            let scaled = match value {
                Value::Int(i) => *i as f64 * 100.0,
                Value::UInt(u) => *u as f64 * 100.0,
                Value::Float(f) => f * 100.0,
                _ => return Err(format_error(value, template)),
            };
            Ok(format!("{:.*}%", precision, scaled))
        }
        _ => Err(format_error(value, template)),
    }
}

/// Renders a numeric value with exactly `precision` decimals, no grouping.
fn fixed_point(value: &Value, precision: usize) -> String {
    match value {
        Value::Int(i) => {
            if precision == 0 {
                i.to_string()
            } else {
                format!("{}.{}", i, "0".repeat(precision))
            }
        }
        Value::UInt(u) => {
            if precision == 0 {
                u.to_string()
            } else {
                format!("{}.{}", u, "0".repeat(precision))
            }
        }
        Value::Float(f) => format!("{:.*}", precision, f),
        _ => value.render_plain(),
    }
}

/// Inserts `,` separators into the integer-digit run of a rendered number.
fn group_thousands(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Date pattern: token runs translated to chrono specifiers, everything
/// else passed through literally.
fn format_date(value: &Value, template: &str) -> Result<String, RenderError> {
    let datetime = match value {
        Value::Date(d) => d.and_time(NaiveTime::MIN),
        Value::DateTime(dt) => *dt,
        _ => return Err(format_error(value, template)),
    };

    let chrono_format = translate_date_tokens(template);
    let mut out = String::new();
    write!(&mut out, "{}", datetime.format(&chrono_format))
        .map_err(|_| format_error(value, template))?;
    Ok(out)
}

/// Maps runs of pattern letters to chrono format specifiers.
fn translate_date_tokens(template: &str) -> String {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }

        let spec: Option<&str> = match (c, run) {
            ('y', 4..) => Some("%Y"),
            ('y', _) => Some("%y"),
            ('M', 4..) => Some("%B"),
            ('M', 3) => Some("%b"),
            ('M', 2) => Some("%m"),
            ('M', 1) => Some("%-m"),
            ('d', 4..) => Some("%A"),
            ('d', 3) => Some("%a"),
            ('d', 2) => Some("%d"),
            ('d', 1) => Some("%-d"),
            ('H', 2..) => Some("%H"),
            ('H', 1) => Some("%-H"),
            ('h', 2..) => Some("%I"),
            ('h', 1) => Some("%-I"),
            ('m', 2..) => Some("%M"),
            ('m', 1) => Some("%-M"),
            ('s', 2..) => Some("%S"),
            ('s', 1) => Some("%-S"),
            ('t', _) => Some("%p"),
            ('f', _) => Some("%3f"),
            _ => None,
        };

        match spec {
            Some(spec) => out.push_str(spec),
            None => {
                for _ in 0..run {
                    if c == '%' {
                        out.push_str("%%");
                    } else {
                        out.push(c);
                    }
                }
            }
        }

        i += run;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn appearance_with(format: &str) -> Appearance {
        Appearance::new().format(format)
    }

    #[test]
    fn null_formats_empty_even_with_template() {
        let result = format_value(&Value::Null, &appearance_with("N0"), true, true).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn plain_value_without_template() {
        let result =
            format_value(&Value::Int(1234), &Appearance::new(), false, false).unwrap();
        assert_eq!(result, "1234");
    }

    #[test]
    fn numeric_grouping() {
        assert_eq!(apply_format(&Value::Int(1234567), "N0").unwrap(), "1,234,567");
        assert_eq!(apply_format(&Value::Int(-1234), "N0").unwrap(), "-1,234");
        assert_eq!(apply_format(&Value::Int(999), "N0").unwrap(), "999");
        assert_eq!(apply_format(&Value::UInt(1000), "N0").unwrap(), "1,000");
    }

    #[test]
    fn numeric_grouping_default_precision() {
        assert_eq!(apply_format(&Value::Int(1234), "N").unwrap(), "1,234.00");
        assert_eq!(
            apply_format(&Value::Float(1234.5), "N1").unwrap(),
            "1,234.5"
        );
    }

    #[test]
    fn fixed_point_formatting() {
        assert_eq!(apply_format(&Value::Float(3.14159), "F2").unwrap(), "3.14");
        assert_eq!(apply_format(&Value::Int(7), "F3").unwrap(), "7.000");
        assert_eq!(apply_format(&Value::Float(2.5), "F0").unwrap(), "2");
    }

    #[test]
    fn decimal_padding() {
        assert_eq!(apply_format(&Value::Int(42), "D5").unwrap(), "00042");
        assert_eq!(apply_format(&Value::Int(-42), "D5").unwrap(), "-0042");
        assert_eq!(apply_format(&Value::UInt(7), "D").unwrap(), "7");
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(apply_format(&Value::Int(255), "X").unwrap(), "FF");
        assert_eq!(apply_format(&Value::Int(255), "x4").unwrap(), "00ff");
        assert_eq!(apply_format(&Value::UInt(48879), "X").unwrap(), "BEEF");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(apply_format(&Value::Float(0.125), "P1").unwrap(), "12.5%");
        assert_eq!(apply_format(&Value::Float(0.5), "P0").unwrap(), "50%");
    }

    #[test]
    fn date_patterns() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        assert_eq!(
            apply_format(&Value::Date(date), "yyyy-MM-dd").unwrap(),
            "2023-12-15"
        );

        let datetime = date.and_hms_opt(20, 15, 0).unwrap();
        assert_eq!(
            apply_format(&Value::DateTime(datetime), "yyyy-MM-dd HH:mm:ss").unwrap(),
            "2023-12-15 20:15:00"
        );
        assert_eq!(
            apply_format(&Value::DateTime(datetime), "dd.MM.yyyy").unwrap(),
            "15.12.2023"
        );
    }

    #[test]
    fn date_month_names() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        assert_eq!(apply_format(&Value::Date(date), "MMM yyyy").unwrap(), "Dec 2023");
        assert_eq!(
            apply_format(&Value::Date(date), "MMMM d, yyyy").unwrap(),
            "December 15, 2023"
        );
    }

    #[test]
    fn date_pattern_on_date_only_value_uses_midnight() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        assert_eq!(
            apply_format(&Value::Date(date), "HH:mm").unwrap(),
            "00:00"
        );
    }

    #[test]
    fn date_pattern_on_integer_fails() {
        let err = apply_format(&Value::Int(5), "yyyy-MM-dd").unwrap_err();
        assert!(matches!(err, RenderError::Format { .. }));
    }

    #[test]
    fn numeric_spec_on_text_fails() {
        let err = apply_format(&Value::Text("Fry".to_string()), "N0").unwrap_err();
        assert!(matches!(err, RenderError::Format { .. }));
    }

    #[test]
    fn unknown_numeric_spec_fails() {
        let err = apply_format(&Value::Int(5), "Q7").unwrap_err();
        assert!(matches!(err, RenderError::Format { .. }));
    }

    #[test]
    fn csv_quoting_precedence() {
        let text = Value::Text("Fry".to_string());
        let number = Value::Int(3);
        let plain = Appearance::new();
        let quoted = Appearance::new().encapsulate();

        // Global flag quotes text even when the per-field flag is off.
        assert_eq!(format_value(&text, &plain, true, true).unwrap(), "\"Fry\"");
        // Per-field flag still applies to non-text values.
        assert_eq!(format_value(&number, &quoted, true, true).unwrap(), "\"3\"");
        // Non-text without the per-field flag stays unquoted.
        assert_eq!(format_value(&number, &plain, true, true).unwrap(), "3");
        // Outside CSV context nothing is ever quoted.
        assert_eq!(format_value(&text, &quoted, false, true).unwrap(), "Fry");
    }
}
