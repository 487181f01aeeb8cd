use std::fs;
use std::path::Path;

use tracing::info;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Unable to write {path}: {message}")]
    Io { path: String, message: String },
}

/// Writes a rendered document, creating missing parent directories.
pub fn write(path: &Path, contents: &str) -> Result<(), Error> {
    let io_error = |error: std::io::Error| Error::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let mut file_contents = String::from(contents);
    if !file_contents.ends_with('\n') {
        file_contents.push('\n');
    }
    fs::write(path, file_contents).map_err(io_error)?;

    info!(path = %path.display(), bytes = contents.len(), "Wrote template");
    return Ok(());
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{write, Error};
    use tempfile::tempdir;

    #[test]
    fn writes_into_missing_directories() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("out").join("stacks").join("cognito.json");

        write(&file_path, "{}").unwrap();

        assert_eq!("{}\n", fs::read_to_string(&file_path).unwrap());
    }

    #[test]
    fn overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("shared.yaml");

        write(&file_path, "first\n").unwrap();
        write(&file_path, "second\n").unwrap();

        assert_eq!("second\n", fs::read_to_string(&file_path).unwrap());
    }

    #[test]
    fn reports_unwritable_location() {
        let dir = tempdir().unwrap();

        let result = write(dir.path(), "{}");

        match result.err().unwrap() {
            Error::Io { path, .. } => assert_eq!(dir.path().display().to_string(), path),
        }
    }
}
