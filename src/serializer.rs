use std::fmt;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::resolver::ResolvedTemplate;
use crate::template::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from a file extension: `.json`, `.yaml` or `.yml`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(format!("Unknown format `{}`, expected `json` or `yaml`", other)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Yaml => f.write_str("yaml"),
        }
    }
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(rename = "AWSTemplateFormatVersion")]
    format_version: &'a str,

    #[serde(rename = "Description")]
    description: &'a str,

    #[serde(rename = "Resources")]
    resources: IndexMap<&'a str, ResourceEntry<'a>>,

    #[serde(rename = "Outputs", skip_serializing_if = "IndexMap::is_empty")]
    outputs: IndexMap<&'a str, OutputEntry<'a>>,
}

#[derive(Serialize)]
struct ResourceEntry<'a> {
    #[serde(rename = "Type")]
    kind: &'a str,

    #[serde(rename = "Properties")]
    properties: &'a Map<String, Value>,

    #[serde(rename = "DependsOn", skip_serializing_if = "Vec::is_empty")]
    depends_on: &'a Vec<String>,
}

#[derive(Serialize)]
struct OutputEntry<'a> {
    #[serde(rename = "Value")]
    value: &'a Value,

    #[serde(rename = "Description")]
    description: &'a str,

    #[serde(rename = "Export", skip_serializing_if = "Option::is_none")]
    export: Option<ExportEntry<'a>>,
}

#[derive(Serialize)]
struct ExportEntry<'a> {
    #[serde(rename = "Name")]
    name: &'a Value,
}

fn document(resolved: &ResolvedTemplate) -> Document<'_> {
    let resources = resolved
        .resources
        .iter()
        .map(|resource| {
            let entry = ResourceEntry {
                kind: &resource.kind,
                properties: &resource.properties,
                depends_on: &resource.depends_on,
            };
            (resource.logical_id.as_str(), entry)
        })
        .collect();

    let outputs = resolved
        .outputs
        .iter()
        .map(|output| {
            let entry = OutputEntry {
                value: &output.value,
                description: &output.description,
                export: output.export_name.as_ref().map(|name| ExportEntry { name }),
            };
            (output.name.as_str(), entry)
        })
        .collect();

    return Document {
        format_version: &resolved.format_version,
        description: &resolved.description,
        resources,
        outputs,
    };
}

/// The document as a nested mapping, keys in template insertion order.
pub fn to_value(resolved: &ResolvedTemplate) -> Result<Value, Error> {
    return serde_json::to_value(document(resolved))
        .map_err(|error| Error::Serialization(error.to_string()));
}

pub fn to_json(resolved: &ResolvedTemplate) -> Result<String, Error> {
    return serde_json::to_string_pretty(&document(resolved))
        .map_err(|error| Error::Serialization(error.to_string()));
}

pub fn to_yaml(resolved: &ResolvedTemplate) -> Result<String, Error> {
    return serde_yaml::to_string(&document(resolved))
        .map_err(|error| Error::Serialization(error.to_string()));
}

pub fn serialize(resolved: &ResolvedTemplate, format: Format) -> Result<String, Error> {
    match format {
        Format::Json => to_json(resolved),
        Format::Yaml => to_yaml(resolved),
    }
}
