use indexmap::IndexMap;

use crate::reference::{LogicalId, Reference};

/// Ordered property bag of a resource.
pub type Properties = IndexMap<String, PropertyValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Scalar(Scalar),
    Sequence(Vec<PropertyValue>),
    Mapping(IndexMap<String, PropertyValue>),
    Reference(Reference),
}

impl PropertyValue {
    pub fn string(value: impl Into<String>) -> Self {
        PropertyValue::Scalar(Scalar::String(value.into()))
    }

    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<PropertyValue>,
    {
        PropertyValue::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        PropertyValue::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::string(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(Scalar::String(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Scalar(Scalar::Integer(value))
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Scalar(Scalar::Integer(i64::from(value)))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Scalar(Scalar::Integer(i64::from(value)))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Scalar(Scalar::Boolean(value))
    }
}

impl From<Reference> for PropertyValue {
    fn from(reference: Reference) -> Self {
        PropertyValue::Reference(reference)
    }
}

/// A bare logical id used as a value means "the identity of that resource".
impl From<&LogicalId> for PropertyValue {
    fn from(id: &LogicalId) -> Self {
        PropertyValue::Reference(id.identity())
    }
}

impl<V: Into<PropertyValue>> From<Vec<V>> for PropertyValue {
    fn from(items: Vec<V>) -> Self {
        PropertyValue::sequence(items)
    }
}

impl From<IndexMap<String, PropertyValue>> for PropertyValue {
    fn from(entries: IndexMap<String, PropertyValue>) -> Self {
        PropertyValue::Mapping(entries)
    }
}
