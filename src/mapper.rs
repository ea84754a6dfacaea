// src/mapper.rs

//! Entry points over raw tag nodes.
//!
//! Each function decodes a `serde_json::Value` node into its tag record and
//! hands it to the matching domain constructor. They hold no state and may be
//! called from any thread.

use crate::domain::{Address, Amenity, Company, Deposit, Fees, Pet, PetPolicy, Property, Unit};
use crate::errors::Result;
use crate::tags::{self, as_sequence, OneOrMany};
use serde_json::Value;

pub fn address(node: &Value) -> Result<Address> {
    let tag = tags::decode("Address", node)?;
    Ok(Address::from_tag(&tag))
}

/// `None` for an absent (or null) node, otherwise one amenity per tag.
pub fn amenities(node: Option<&Value>) -> Result<Option<Vec<Amenity>>> {
    let Some(node) = node.filter(|n| !n.is_null()) else {
        return Ok(None);
    };
    let tags: OneOrMany<_> = tags::decode("Amenity", node)?;
    Ok(Amenity::from_tags(Some(&tags)))
}

pub fn company(node: &Value) -> Result<Company> {
    let tag = tags::decode("Company", node)?;
    Company::from_tag(&tag)
}

pub fn deposit(node: &Value) -> Result<Deposit> {
    let tag = tags::decode("Deposit", node)?;
    Deposit::from_tag(&tag)
}

pub fn fees(node: &Value) -> Result<Fees> {
    let tag = tags::decode("Fee", node)?;
    Fees::from_tag(&tag)
}

pub fn pets(node: &Value) -> Result<Vec<Pet>> {
    let tags = tags::decode("Pet", node)?;
    Ok(Pet::from_tags(&tags))
}

pub fn pet_policy(node: &Value) -> Result<PetPolicy> {
    let tag = tags::decode("PetPolicy", node)?;
    PetPolicy::from_tag(&tag)
}

pub fn units(node: &Value) -> Result<Vec<Unit>> {
    let tags = tags::decode("Unit", node)?;
    Unit::from_tags(&tags)
}

pub fn property(node: &Value) -> Result<Property> {
    let tag = tags::decode("Property", node)?;
    Property::from_tag(&tag)
}

/// One `Property` node or a list of them. The first failure stops the batch.
pub fn properties(node: Value) -> Result<Vec<Property>> {
    as_sequence(node).iter().map(property).collect()
}
