use super::range::{deposit_amount, DepositAmount};
use crate::coerce::coerce_float;
use crate::errors::{MappingError, Result};
use crate::tags::DepositTag;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deposit {
    pub amount: DepositAmount,
    pub description: Option<String>,
    pub percent_refundable: Option<f64>,
    pub portion_refundable: Option<f64>,
    pub deposit_type: Option<String>,
}

impl Deposit {
    /// `Amount.ValueRange` must be present; everything else is optional.
    pub fn from_tag(tag: &DepositTag) -> Result<Self> {
        let value_range = tag
            .amount
            .as_ref()
            .ok_or_else(|| MappingError::missing("Deposit", "Amount"))?
            .value_range
            .as_ref()
            .ok_or_else(|| MappingError::missing("Deposit", "Amount.ValueRange"))?;

        Ok(Deposit {
            amount: deposit_amount(value_range)?,
            description: tag.description.clone(),
            percent_refundable: coerce_float(
                "PercentRefundable",
                tag.percent_refundable.as_deref(),
            )?,
            portion_refundable: coerce_float(
                "PortionRefundable",
                tag.portion_refundable.as_deref(),
            )?,
            deposit_type: tag.deposit_type.clone(),
        })
    }
}
