// References are followed a single hop and never expand the target, so
// cycles and self references resolve like any other reference.

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::reference::Reference;
use crate::resource::{OutputNode, ResourceNode};
use crate::template::{Error, Template};
use crate::value::{PropertyValue, Scalar};

pub const REF: &str = "Ref";
pub const GET_ATT: &str = "Fn::GetAtt";

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedResource {
    pub logical_id: String,
    pub kind: String,
    pub properties: Map<String, Value>,
    pub depends_on: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOutput {
    pub name: String,
    pub description: String,
    pub value: Value,
    pub export_name: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTemplate {
    pub name: String,
    pub format_version: String,
    pub description: String,
    pub resources: Vec<ResolvedResource>,
    pub outputs: Vec<ResolvedOutput>,
}

/// Fails on the first dangling reference, walking resources then outputs.
pub fn resolve(template: &Template) -> Result<ResolvedTemplate, Error> {
    let resolver = Resolver { template };

    let resources = template
        .resources()
        .map(|node| resolver.resource(node))
        .collect::<Result<Vec<_>, _>>()?;

    let outputs = template
        .outputs()
        .map(|node| resolver.output(node))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        template = %template.name(),
        resources = resources.len(),
        outputs = outputs.len(),
        "Resolved template"
    );

    return Ok(ResolvedTemplate {
        name: template.name().to_string(),
        format_version: template.format_version().to_string(),
        description: template.description().to_string(),
        resources,
        outputs,
    });
}

struct Resolver<'a> {
    template: &'a Template,
}

impl<'a> Resolver<'a> {
    fn resource(&self, node: &ResourceNode) -> Result<ResolvedResource, Error> {
        for target in node.dependencies() {
            if !self.template.contains(target) {
                return Err(Error::UnresolvedDependency {
                    resource: node.logical_id().to_string(),
                    target: target.clone(),
                });
            }
        }

        let mut properties = Map::new();
        for (name, value) in node.properties() {
            properties.insert(name.clone(), self.value(value)?);
        }

        return Ok(ResolvedResource {
            logical_id: node.logical_id().to_string(),
            kind: node.kind().to_string(),
            properties,
            depends_on: node.dependencies().to_vec(),
        });
    }

    fn output(&self, node: &OutputNode) -> Result<ResolvedOutput, Error> {
        let value = self.value(node.value())?;
        let export_name = match node.export_name() {
            Some(export_name) => Some(self.value(export_name)?),
            None => None,
        };

        return Ok(ResolvedOutput {
            name: node.name().to_string(),
            description: node.description().to_string(),
            value,
            export_name,
        });
    }

    fn value(&self, value: &PropertyValue) -> Result<Value, Error> {
        match value {
            PropertyValue::Scalar(Scalar::String(value)) => Ok(Value::String(value.clone())),
            PropertyValue::Scalar(Scalar::Integer(value)) => Ok(Value::from(*value)),
            PropertyValue::Scalar(Scalar::Float(value)) => match Number::from_f64(*value) {
                Some(number) => Ok(Value::Number(number)),
                None => Err(Error::NonFiniteNumber(value.to_string())),
            },
            PropertyValue::Scalar(Scalar::Boolean(value)) => Ok(Value::Bool(*value)),
            PropertyValue::Sequence(items) => items
                .iter()
                .map(|item| self.value(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            PropertyValue::Mapping(entries) => {
                let mut resolved = Map::new();
                for (key, value) in entries {
                    resolved.insert(key.clone(), self.value(value)?);
                }
                Ok(Value::Object(resolved))
            }
            PropertyValue::Reference(reference) => self.reference(reference),
        }
    }

    // The attribute name is passed through unchecked.
    fn reference(&self, reference: &Reference) -> Result<Value, Error> {
        if !self.template.contains(reference.target()) {
            return Err(Error::UnresolvedReference(reference.target().to_string()));
        }

        let marker = match reference {
            Reference::Identity { target } => (REF, Value::String(target.clone())),
            Reference::Attribute { target, attribute } => (
                GET_ATT,
                Value::Array(vec![
                    Value::String(target.clone()),
                    Value::String(attribute.clone()),
                ]),
            ),
        };

        let mut intrinsic = Map::new();
        intrinsic.insert(marker.0.to_string(), marker.1);
        return Ok(Value::Object(intrinsic));
    }
}
