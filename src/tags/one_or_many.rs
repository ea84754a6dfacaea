use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// A repeatable tag as the upstream parser hands it over: a lone occurrence
/// is not wrapped in a list, two or more are.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The occurrences in source order.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, OneOrMany::One(_))
    }
}

// An array is a list of occurrences, anything else is the single one. Element
// errors are passed through as-is so the offending value stays visible.
impl<'de, T: DeserializeOwned> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| T::deserialize(item))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(OneOrMany::Many)
                .map_err(de::Error::custom),
            single => T::deserialize(single)
                .map(OneOrMany::One)
                .map_err(de::Error::custom),
        }
    }
}

/// Raw-tree counterpart of [`OneOrMany`]: arrays pass through unchanged,
/// anything else becomes a one-element sequence.
pub fn as_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}
