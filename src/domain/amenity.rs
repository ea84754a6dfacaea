use crate::tags::{AmenityTag, OneOrMany};
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amenity {
    pub description: Option<String>,
    pub amenity_type: Option<String>,
}

impl Amenity {
    pub fn from_tag(tag: &AmenityTag) -> Self {
        Amenity {
            description: tag.description.clone(),
            amenity_type: tag.amenity_type.clone(),
        }
    }

    /// `None` when the listing has no `Amenity` tag at all, which is not the
    /// same as an empty list.
    pub fn from_tags(tags: Option<&OneOrMany<AmenityTag>>) -> Option<Vec<Self>> {
        let tags = tags?;
        if tags.is_single() {
            trace!("single Amenity tag normalized into a list");
        }
        Some(tags.as_slice().iter().map(Amenity::from_tag).collect())
    }
}
