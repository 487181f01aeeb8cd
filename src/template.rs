use indexmap::IndexMap;
use tracing::debug;

use crate::reference::LogicalId;
use crate::resolver::{self, ResolvedTemplate};
use crate::resource::{OutputNode, ResourceNode};
use crate::serializer::{self, Format};

pub const DEFAULT_FORMAT_VERSION: &str = "2010-09-09";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Resource `{0}` is already defined")]
    DuplicateLogicalId(String),

    #[error("Output `{0}` is already defined")]
    DuplicateOutputName(String),

    #[error("Reference to unknown resource `{0}`")]
    UnresolvedReference(String),

    #[error("Resource `{resource}` depends on unknown resource `{target}`")]
    UnresolvedDependency { resource: String, target: String },

    #[error("Number `{0}` cannot be written to a template")]
    NonFiniteNumber(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Append only. A rejected add leaves the template as it was.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    format_version: String,
    description: String,
    resources: IndexMap<String, ResourceNode>,
    outputs: IndexMap<String, OutputNode>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format_version: String::from(DEFAULT_FORMAT_VERSION),
            description: String::new(),
            resources: IndexMap::new(),
            outputs: IndexMap::new(),
        }
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.format_version = version.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn add_resource(&mut self, node: ResourceNode) -> Result<LogicalId, Error> {
        let logical_id = node.logical_id().to_string();
        if self.resources.contains_key(&logical_id) {
            return Err(Error::DuplicateLogicalId(logical_id));
        }

        debug!(
            template = %self.name,
            logical_id = %logical_id,
            kind = %node.kind(),
            "Adding resource"
        );
        self.resources.insert(logical_id.clone(), node);

        return Ok(LogicalId::new(logical_id));
    }

    pub fn add_output(&mut self, node: OutputNode) -> Result<(), Error> {
        if self.outputs.contains_key(node.name()) {
            return Err(Error::DuplicateOutputName(node.name().to_string()));
        }

        debug!(template = %self.name, output = %node.name(), "Adding output");
        self.outputs.insert(node.name().to_string(), node);

        return Ok(());
    }

    /// Adds outputs in order, stopping at the first duplicate name.
    pub fn add_outputs(
        &mut self,
        nodes: impl IntoIterator<Item = OutputNode>,
    ) -> Result<(), Error> {
        for node in nodes {
            self.add_output(node)?;
        }

        return Ok(());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn contains(&self, logical_id: &str) -> bool {
        self.resources.contains_key(logical_id)
    }

    pub fn resource(&self, logical_id: &str) -> Option<&ResourceNode> {
        self.resources.get(logical_id)
    }

    pub fn resources(&self) -> impl Iterator<Item = &ResourceNode> {
        self.resources.values()
    }

    pub fn outputs(&self) -> impl Iterator<Item = &OutputNode> {
        self.outputs.values()
    }

    pub fn resolve(&self) -> Result<ResolvedTemplate, Error> {
        resolver::resolve(self)
    }

    /// Resolves and encodes the template in one pass.
    pub fn render(&self, format: Format) -> Result<String, Error> {
        let resolved = self.resolve()?;
        return serializer::serialize(&resolved, format);
    }
}
