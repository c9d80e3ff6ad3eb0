//! Reading parameter sets and test values from JSON files.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use soilhealth::{InputValues, MasterData, Parameter};
use thiserror::Error;

/// Errors that occur while loading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading an input file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::Io { source, .. } if source.kind() == ErrorKind::NotFound => {
                exitcode::NOINPUT
            }
            LoadError::Io { .. } => exitcode::IOERR,
            LoadError::Json { .. } => exitcode::DATAERR,
        }
    }
}

/// A parameter file: either the editor's `{ "parameters": [...] }` document
/// or a bare list of parameters.
#[derive(Deserialize)]
#[serde(untagged)]
enum ParameterFile {
    Document(MasterData),
    List(Vec<Parameter>),
}

/// Load the parameter definitions from `path`.
pub fn load_parameters(path: &Path) -> Result<Vec<Parameter>, LoadError> {
    Ok(match read_json::<ParameterFile>(path)? {
        ParameterFile::Document(master) => master.parameters,
        ParameterFile::List(parameters) => parameters,
    })
}

/// Load test values from a JSON object keyed by parameter id.
///
/// Values may be strings or numbers; `null` entries are skipped.
pub fn load_values(path: &Path) -> Result<InputValues, LoadError> {
    let raw: HashMap<String, JsonValue> = read_json(path)?;
    Ok(raw
        .into_iter()
        .filter_map(|(id, value)| match value {
            JsonValue::String(s) => Some((id, s)),
            JsonValue::Null => None,
            other => Some((id, other.to_string())),
        })
        .collect())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
