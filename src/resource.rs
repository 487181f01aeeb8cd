use crate::catalog::Resource;
use crate::value::{Properties, PropertyValue};

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceNode {
    logical_id: String,
    kind: String,
    properties: Properties,
    depends_on: Vec<String>,
}

impl ResourceNode {
    pub fn new(
        logical_id: impl Into<String>,
        kind: impl Into<String>,
        properties: Properties,
    ) -> Self {
        return Self {
            logical_id: logical_id.into(),
            kind: kind.into(),
            properties,
            depends_on: Vec::new(),
        };
    }

    pub fn from_resource<R: Resource>(logical_id: impl Into<String>, resource: R) -> Self {
        Self::new(logical_id, R::KIND, resource.into_properties())
    }

    /// Adds an explicit `DependsOn` edge for ordering the references do not express.
    pub fn depends_on(mut self, target: impl Into<String>) -> Self {
        let target = target.into();
        if !self.depends_on.contains(&target) {
            self.depends_on.push(target);
        }

        return self;
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn dependencies(&self) -> &[String] {
        &self.depends_on
    }
}

/// A named export of a template, usually wrapping a reference.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputNode {
    name: String,
    description: String,
    value: PropertyValue,
    export_name: Option<PropertyValue>,
}

impl OutputNode {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
        description: impl Into<String>,
    ) -> Self {
        return Self {
            name: name.into(),
            description: description.into(),
            value: value.into(),
            export_name: None,
        };
    }

    /// Publishes the output as a cross-stack export under `export_name`.
    pub fn with_export(mut self, export_name: impl Into<PropertyValue>) -> Self {
        self.export_name = Some(export_name.into());
        return self;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn export_name(&self) -> Option<&PropertyValue> {
        self.export_name.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputNode, ResourceNode};
    use crate::catalog::s3::{AccessControl, Bucket};
    use crate::reference::Reference;
    use crate::value::{Properties, PropertyValue};

    #[test]
    fn catalog_resource_carries_its_kind() {
        let node = ResourceNode::from_resource(
            "SharedBucket",
            Bucket {
                access_control: Some(AccessControl::Private),
                ..Default::default()
            },
        );

        assert_eq!("SharedBucket", node.logical_id());
        assert_eq!("AWS::S3::Bucket", node.kind());
        assert_eq!(
            Some(&PropertyValue::from("Private")),
            node.properties().get("AccessControl")
        );
    }

    #[test]
    fn depends_on_ignores_repeated_targets() {
        let node = ResourceNode::new("Queue", "Custom::Queue", Properties::new())
            .depends_on("Topic")
            .depends_on("Topic");

        assert_eq!(&[String::from("Topic")], node.dependencies());
    }

    #[test]
    fn output_wraps_reference() {
        let output = OutputNode::new("BucketArn", Reference::attribute("Bucket", "Arn"), "Arn")
            .with_export("shared-bucket-arn");

        assert_eq!(
            &PropertyValue::Reference(Reference::attribute("Bucket", "Arn")),
            output.value()
        );
        assert_eq!(
            Some(&PropertyValue::from("shared-bucket-arn")),
            output.export_name()
        );
    }
}
