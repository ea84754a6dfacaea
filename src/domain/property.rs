// src/domain/property.rs

use super::{Amenity, Deposit, Fees, PetPolicy, Unit};
use crate::errors::{MappingError, Result};
use crate::tags::{self, PetPolicyTag, PropertyTag};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// One rental listing from a MITS feed. Consumers read these fields and never
/// go back to the tag tree they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub website: Option<String>,

    /// `None` when the feed has no `Amenity` tag; `Some(vec![])` when it
    /// declares an empty list.
    pub amenities: Option<Vec<Amenity>>,
    pub deposit: Deposit,
    pub fees: Fees,

    /// The raw `Policy.Pet` node. It is not mapped here; call
    /// [`Property::typed_pet_policy`] when a [`PetPolicy`] is needed.
    pub pet_policy: Option<Value>,
    pub units: Vec<Unit>,
}

impl Property {
    /// Requires `IDValue`, `PropertyID.MarketingName`, `ILS_Unit.Units.Unit`,
    /// `Deposit`, `Fee` and `Policy`. Absent or null, each one is a
    /// [`MappingError::StructuralAbsence`].
    pub fn from_tag(tag: &PropertyTag) -> Result<Self> {
        let missing = |field: &'static str| move || MappingError::missing("Property", field);

        let id = tag.id_value.as_deref().ok_or_else(missing("IDValue"))?;
        let property_id = tag.property_id.as_ref().ok_or_else(missing("PropertyID"))?;
        let name = property_id
            .marketing_name
            .as_deref()
            .ok_or_else(missing("PropertyID.MarketingName"))?;
        let ils_unit = tag.ils_unit.as_ref().ok_or_else(missing("ILS_Unit"))?;
        let unit_tags = ils_unit
            .units
            .as_ref()
            .ok_or_else(missing("ILS_Unit.Units"))?
            .unit
            .as_ref()
            .ok_or_else(missing("ILS_Unit.Units.Unit"))?;
        let deposit = tag.deposit.as_ref().ok_or_else(missing("Deposit"))?;
        let fee = tag.fee.as_ref().ok_or_else(missing("Fee"))?;
        let policy = tag.policy.as_ref().ok_or_else(missing("Policy"))?;

        let units = Unit::from_tags(unit_tags)?;
        let amenities = Amenity::from_tags(ils_unit.amenity.as_ref());

        debug!(
            id,
            units = units.len(),
            amenities = amenities.as_ref().map_or(0, Vec::len),
            "mapping property"
        );

        Ok(Property {
            id: id.to_string(),
            name: name.to_string(),
            website: property_id.web_site.clone(),
            amenities,
            deposit: Deposit::from_tag(deposit)?,
            fees: Fees::from_tag(fee)?,
            pet_policy: policy.pet.clone(),
            units,
        })
    }

    /// Maps the stored pet-policy node on demand. `Ok(None)` when the listing
    /// carries no `Policy.Pet` tag.
    pub fn typed_pet_policy(&self) -> Result<Option<PetPolicy>> {
        self.pet_policy
            .as_ref()
            .map(|node| {
                let tag: PetPolicyTag = tags::decode("PetPolicy", node)?;
                PetPolicy::from_tag(&tag)
            })
            .transpose()
    }
}
