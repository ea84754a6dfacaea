// src/domain/range.rs

use crate::coerce::{coerce_float, coerce_int};
use crate::errors::Result;
use crate::tags::{UnitTag, ValueRangeTag};
use serde::Serialize;

/// A closed interval exactly as the source states it. `min > max` is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> NumericRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// True when the source listed the bounds the wrong way round.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// A deposit is either one figure or a span of figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DepositAmount {
    Exact(f64),
    Range(NumericRange<f64>),
}

/// `Exact` wins whenever it is present. Otherwise the amount is the
/// `Min`..`Max` span, and a missing bound reads as `0.0`.
pub fn deposit_amount(tag: &ValueRangeTag) -> Result<DepositAmount> {
    if let Some(exact) = coerce_float("Exact", tag.exact.as_deref())? {
        return Ok(DepositAmount::Exact(exact));
    }

    let min = coerce_float("Min", tag.min.as_deref())?.unwrap_or(0.0);
    let max = coerce_float("Max", tag.max.as_deref())?.unwrap_or(0.0);
    Ok(DepositAmount::Range(NumericRange::new(min, max)))
}

/// Square footage is always a span. A missing bound reads as `0`.
pub fn unit_sqft(tag: &UnitTag) -> Result<NumericRange<i64>> {
    let min = coerce_int("MinSquareFeet", tag.min_square_feet.as_deref())?.unwrap_or(0);
    let max = coerce_int("MaxSquareFeet", tag.max_square_feet.as_deref())?.unwrap_or(0);
    Ok(NumericRange::new(min, max))
}
