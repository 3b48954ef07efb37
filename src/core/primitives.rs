use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Float equality within a fixed absolute tolerance used for baseline checks.
#[must_use]
pub fn approx_zero(value: f64) -> bool {
    value.abs() <= 1e-9
}
