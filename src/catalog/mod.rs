//! Typed resource kinds. Nothing past `ResourceNode` looks at these types.

pub mod cognito;
pub mod iam;
pub mod s3;

use crate::value::{Properties, PropertyValue};

pub trait Resource {
    /// Provider resource type tag, e.g. `AWS::S3::Bucket`.
    const KIND: &'static str;

    fn into_properties(self) -> Properties;
}

/// Accumulates properties, skipping the ones left unset.
#[derive(Debug, Default)]
pub(crate) struct PropertiesBuilder {
    properties: Properties,
}

impl PropertiesBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        return self;
    }

    pub(crate) fn set_opt<V: Into<PropertyValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub(crate) fn set_list<V: Into<PropertyValue>>(self, name: &str, values: Vec<V>) -> Self {
        if values.is_empty() {
            return self;
        }

        return self.set(name, PropertyValue::sequence(values));
    }

    pub(crate) fn build(self) -> Properties {
        self.properties
    }

    pub(crate) fn into_value(self) -> PropertyValue {
        PropertyValue::Mapping(self.properties)
    }
}

#[cfg(test)]
mod tests {
    use super::PropertiesBuilder;
    use crate::value::PropertyValue;

    #[test]
    fn skips_unset_properties() {
        let properties = PropertiesBuilder::new()
            .set("Name", "email")
            .set_opt::<bool>("Required", None)
            .set_list::<String>("Aliases", vec![])
            .set_opt("Mutable", Some(true))
            .build();

        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(vec!["Name", "Mutable"], keys);
        assert_eq!(Some(&PropertyValue::from(true)), properties.get("Mutable"));
    }
}
