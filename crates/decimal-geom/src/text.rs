//! Comma-separated decimal text, as produced by the `Display` impls.
//!
//! Values are written with `Decimal`'s canonical formatting: optional `-`,
//! ASCII digits, `.` as the separator, no grouping and no exponent. The
//! output never depends on the process locale.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{GeomError, Result};

/// Parse exactly `N` comma-separated decimals, trimming whitespace around each.
pub(crate) fn parse_fields<const N: usize>(s: &str) -> Result<[Decimal; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(GeomError::Parse(format!(
            "expected {N} comma-separated values, found {} in '{s}'",
            parts.len()
        )));
    }

    let mut fields = [Decimal::ZERO; N];
    for (slot, part) in fields.iter_mut().zip(parts) {
        *slot = Decimal::from_str(part)
            .map_err(|e| GeomError::Parse(format!("invalid number '{part}': {e}")))?;
    }
    Ok(fields)
}
