//! Fixed-precision number formatting.

use crate::error::CleanError;

/// Format a numeric attribute value at the given precision.
///
/// Fails with [`CleanError::Format`] when the value does not parse as a
/// finite number; callers propagate rather than defaulting.
pub fn format_value(value: &str, precision: u8) -> Result<String, CleanError> {
    let n: f64 = value
        .trim()
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
        .ok_or_else(|| CleanError::Format {
            value: value.to_string(),
        })?;
    Ok(format_f64(n, precision))
}

/// Round to `precision` decimal places and strip insignificant trailing
/// zeros (and a dangling decimal point). Precision 0 rounds to an integer.
pub fn format_f64(n: f64, precision: u8) -> String {
    let mut s = format!("{:.prec$}", n, prec = precision as usize);

    if s.contains('.') {
        s = s.trim_end_matches('0').to_string();
        s = s.trim_end_matches('.').to_string();
    }

    // Rounding can leave a bare negative zero
    if s == "-0" {
        s = "0".to_string();
    }

    s
}
