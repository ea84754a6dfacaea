use super::Address;
use crate::errors::{MappingError, Result};
use crate::tags::CompanyTag;
use serde::Serialize;
use tracing::debug;

/// The management company behind a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    pub address: Address,
    pub id: String,
    pub logo: Option<String>,
    pub name: String,
    pub website: Option<String>,
}

impl Company {
    /// Requires `Identification.IDValue`, `CompanyName` and an `Address` node;
    /// the address itself may be empty.
    pub fn from_tag(tag: &CompanyTag) -> Result<Self> {
        let id = tag
            .identification
            .as_ref()
            .ok_or_else(|| MappingError::missing("Company", "Identification"))?
            .id_value
            .as_deref()
            .ok_or_else(|| MappingError::missing("Company", "Identification.IDValue"))?;

        let name = tag
            .company_name
            .as_deref()
            .ok_or_else(|| MappingError::missing("Company", "CompanyName"))?;

        let address = tag
            .address
            .as_ref()
            .ok_or_else(|| MappingError::missing("Company", "Address"))?;

        debug!(id, name, "mapping company");

        Ok(Company {
            address: Address::from_tag(address),
            id: id.to_string(),
            logo: tag.logo.clone(),
            name: name.to_string(),
            website: tag.website.clone(),
        })
    }
}
