use crate::coerce::coerce_float;
use crate::errors::Result;
use crate::tags::FeeTag;
use serde::Serialize;

/// Leasing fees. Each figure is independent; any subset may be listed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Fees {
    pub admin_fee: Option<f64>,
    pub application_fee: Option<f64>,
    pub broker_fee: Option<f64>,
    pub late_fee_per_day: Option<f64>,
    pub late_min_fee: Option<f64>,
    pub late_percent: Option<f64>,
    pub late_type: Option<String>,
    pub non_refundable_hold_fee: Option<f64>,
    pub prorate_type: Option<String>,
}

impl Fees {
    pub fn from_tag(tag: &FeeTag) -> Result<Self> {
        Ok(Fees {
            admin_fee: coerce_float("AdminFee", tag.admin_fee.as_deref())?,
            application_fee: coerce_float("ApplicationFee", tag.application_fee.as_deref())?,
            broker_fee: coerce_float("BrokerFee", tag.broker_fee.as_deref())?,
            late_fee_per_day: coerce_float("LateFeePerDay", tag.late_fee_per_day.as_deref())?,
            late_min_fee: coerce_float("LateMinFee", tag.late_min_fee.as_deref())?,
            late_percent: coerce_float("LatePercent", tag.late_percent.as_deref())?,
            late_type: tag.late_type.clone(),
            non_refundable_hold_fee: coerce_float(
                "NonRefundableHoldFee",
                tag.non_refundable_hold_fee.as_deref(),
            )?,
            prorate_type: tag.prorate_type.clone(),
        })
    }
}
