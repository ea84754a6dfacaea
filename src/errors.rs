// errors.rs
use thiserror::Error;

/// Everything that can stop an entity from being built out of a tag node.
///
/// A missing optional leaf is never an error; it becomes `None` on the entity.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A required container or leaf is absent or null. `field` is the dotted
    /// tag path below the node being built, e.g. `Amount.ValueRange`.
    #[error("{entity} is missing required tag `{field}`")]
    StructuralAbsence { entity: &'static str, field: &'static str },

    /// Text is present but does not parse into the expected scalar.
    #[error("tag `{field}` holds {value:?}, which is not a valid {expected}")]
    Coercion {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The node exists but has the wrong shape (a map where text belongs,
    /// text where a container belongs, ...).
    #[error("{entity} tag has an unexpected shape: {source}")]
    Malformed {
        entity: &'static str,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MappingError>;

impl MappingError {
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        MappingError::StructuralAbsence { entity, field }
    }

    pub fn coercion(field: &'static str, value: &str, expected: &'static str) -> Self {
        MappingError::Coercion {
            field,
            value: value.to_string(),
            expected,
        }
    }
}
