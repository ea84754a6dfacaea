use crate::coerce::{coerce_bool, coerce_float, pet_count};
use crate::errors::Result;
use crate::tags::{OneOrMany, PetPolicyTag, PetTag};
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pet {
    /// Zero when the tag is absent or not a number.
    pub count: i64,
    pub description: Option<String>,
    pub size: Option<String>,
    pub weight: Option<String>,
    pub pet_type: Option<String>,
}

impl Pet {
    pub fn from_tag(tag: &PetTag) -> Self {
        Pet {
            count: pet_count(tag.count.as_deref()),
            description: tag.description.clone(),
            size: tag.size.clone(),
            weight: tag.weight.clone(),
            pet_type: tag.pet_type.clone(),
        }
    }

    pub fn from_tags(tags: &OneOrMany<PetTag>) -> Vec<Self> {
        if tags.is_single() {
            trace!("single Pet tag normalized into a list");
        }
        tags.as_slice().iter().map(Pet::from_tag).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetPolicy {
    pub allowed: bool,
    pub care: bool,
    pub deposit: Option<f64>,
    pub fee: Option<f64>,
    pub pets: Vec<Pet>,
    pub rent: Option<f64>,
    pub restrictions: Option<String>,
}

impl PetPolicy {
    /// A policy without a `Pets` tag lists no pets.
    pub fn from_tag(tag: &PetPolicyTag) -> Result<Self> {
        Ok(PetPolicy {
            allowed: coerce_bool(tag.allowed.as_deref()),
            care: coerce_bool(tag.pet_care.as_deref()),
            deposit: coerce_float("Deposit", tag.deposit.as_deref())?,
            fee: coerce_float("Fee", tag.fee.as_deref())?,
            pets: tag.pets.as_ref().map(Pet::from_tags).unwrap_or_default(),
            rent: coerce_float("Rent", tag.rent.as_deref())?,
            restrictions: tag.restrictions.clone(),
        })
    }
}
