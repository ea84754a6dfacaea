//! Typed schemas for the raw MITS tag tree.
//!
//! One record per node shape. Decoding only checks shape; the domain layer
//! decides which tags are required and only ever sees records.

mod models;
mod one_or_many;

pub use models::*;
pub use one_or_many::{as_sequence, OneOrMany};

use crate::errors::{MappingError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes a raw node into its tag record, labelling failures with `entity`.
///
/// Records are all-optional, so a failure here is always a shape mismatch;
/// missing required tags are reported by the domain constructors.
pub fn decode<T: DeserializeOwned>(entity: &'static str, node: &Value) -> Result<T> {
    T::deserialize(node).map_err(|source| MappingError::Malformed { entity, source })
}
