use super::range::{unit_sqft, NumericRange};
use crate::coerce::coerce_float;
use crate::errors::Result;
use crate::tags::{OneOrMany, UnitTag};
use serde::Serialize;
use tracing::trace;

/// A floor plan or individual unit offered by the property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    pub bathrooms: Option<f64>,
    pub bedrooms: Option<f64>,
    pub name: Option<String>,
    pub rent: Option<f64>,
    pub sqft: NumericRange<i64>,
}

impl Unit {
    pub fn from_tag(tag: &UnitTag) -> Result<Self> {
        Ok(Unit {
            bathrooms: coerce_float("UnitBathrooms", tag.unit_bathrooms.as_deref())?,
            bedrooms: coerce_float("UnitBedrooms", tag.unit_bedrooms.as_deref())?,
            name: tag.marketing_name.clone(),
            rent: coerce_float("UnitRent", tag.unit_rent.as_deref())?,
            sqft: unit_sqft(tag)?,
        })
    }

    pub fn from_tags(tags: &OneOrMany<UnitTag>) -> Result<Vec<Self>> {
        if tags.is_single() {
            trace!("single Unit tag normalized into a list");
        }
        tags.as_slice().iter().map(Unit::from_tag).collect()
    }
}
