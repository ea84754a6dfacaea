//! Maps parsed MITS listing feeds into typed rental-property entities.
//!
//! The input is the tag tree an upstream parser produces, held as a
//! `serde_json::Value`. [`mapper`] turns nodes of that tree into the entities
//! in [`domain`]; nothing downstream needs to look at raw tags again.

pub mod coerce;
pub mod domain;
pub mod errors;
pub mod mapper;
pub mod tags;

pub use domain::{
    Address, Amenity, Company, Deposit, DepositAmount, Fees, NumericRange, Pet, PetPolicy,
    Property, Unit,
};
pub use errors::{MappingError, Result};
