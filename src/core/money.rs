//! Rupee amount helpers.
//!
//! Payroll columns arrive either as integers or as free-form strings (the
//! extra-income table stores arrears as `VARCHAR`). Everything is folded into
//! [`Decimal`] here so the tax arithmetic never sees a parse failure: anything
//! that is not a number counts as zero.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Coerce a raw column value to an amount, defaulting to zero.
///
/// Blank, missing and non-numeric values are all zero. Scientific notation
/// (`"1e3"`) is accepted.
pub fn coerce(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Nullable integer column to amount
pub fn from_int(value: Option<i32>) -> Decimal {
    value.map(Decimal::from).unwrap_or(Decimal::ZERO)
}

/// Round half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(amount: Decimal) -> Decimal {
    (amount + Decimal::new(5, 1)).floor().normalize()
}

/// Round up to the next whole rupee
pub fn ceil(amount: Decimal) -> Decimal {
    amount.ceil().normalize()
}

/// Round to the nearest multiple of ten.
///
/// The remainder keeps the sign of `amount`, so a negative value with a
/// remainder below five moves toward zero.
pub fn round_to_nearest_ten(amount: Decimal) -> Decimal {
    let ten = Decimal::TEN;
    let remainder = amount % ten;
    let rounded = if remainder < Decimal::new(5, 0) {
        amount - remainder
    } else {
        amount + (ten - remainder)
    };
    rounded.normalize()
}

/// Smaller of two amounts
pub fn min(a: Decimal, b: Decimal) -> Decimal {
    if a < b {
        a
    } else {
        b
    }
}

/// Display an amount without trailing zeros (`12500.00 -> "12500"`)
pub fn display(amount: Decimal) -> String {
    amount.normalize().to_string()
}
