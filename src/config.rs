use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path, path::PathBuf};
use validator::{Validate, ValidationError};

use crate::serializer::Format;
use crate::stacks::Stack;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("File {0} not found")]
    FileNotFound(String),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Validation errors: {0}")]
    ValidationError(String),

    #[error("Unknown error occurred: {0}")]
    Unknown(String),
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct OutputFile {
    pub location: PathBuf,
}

impl OutputFile {
    /// Format implied by the location's extension.
    pub fn format(&self) -> Option<Format> {
        Format::from_path(&self.location)
    }
}

/// One render target: which stack to build and where to write it.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ConfigEntry {
    #[validate(required)]
    pub stack: Option<Stack>,

    /// Region used when validating the document remotely.
    pub region: Option<String>,

    #[validate(custom = "validate_output_file")]
    pub output: OutputFile,
}

pub type Config = Vec<ConfigEntry>;

pub fn parse(path: &Path) -> Result<Config, Error> {
    let contents = match fs::read_to_string(path) {
        Ok(raw_contents) => Ok(raw_contents),
        Err(error) => match error.kind() {
            io::ErrorKind::NotFound => Err(Error::FileNotFound(path.display().to_string())),
            _ => Err(Error::Unknown(error.to_string())),
        },
    }?;

    let config: Config = match serde_yaml::from_str(&contents) {
        Ok(data) => Ok(data),
        Err(error) => Err(Error::ParsingError(error.to_string())),
    }?;

    for config_entry in &config {
        match config_entry.validate() {
            Ok(_) => (),
            Err(error) => return Err(Error::ValidationError(error.to_string())),
        }
    }

    return Ok(config);
}

fn validate_output_file(output_file: &OutputFile) -> Result<(), ValidationError> {
    if output_file.location.extension().is_none() {
        return Err(ValidationError::new(
            "Unable to parse the extension of the output file location",
        ));
    }
    if output_file.format().is_none() {
        return Err(ValidationError::new(
            "The output file location has to end with `.json`, `.yaml` or `.yml`",
        ));
    }

    return Ok(());
}
