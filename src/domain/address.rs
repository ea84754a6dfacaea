use crate::tags::AddressTag;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Address {
    pub address_type: Option<String>,
    pub description: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Copies every leaf verbatim. Missing leaves stay `None`.
    pub fn from_tag(tag: &AddressTag) -> Self {
        Address {
            address_type: tag.address_type.clone(),
            description: tag.description.clone(),
            address1: tag.address1.clone(),
            address2: tag.address2.clone(),
            city: tag.city.clone(),
            state: tag.state.clone(),
            postal_code: tag.postal_code.clone(),
            country: tag.country.clone(),
        }
    }
}
