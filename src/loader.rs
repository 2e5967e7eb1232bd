use crate::ticket::Ticket;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid tickets document: {0}")]
    Document(String),

    /// One entry under `tickets` could not be decoded.
    #[error("malformed ticket at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Reads and decodes every ticket in the file. Any bad entry fails the whole load.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Ticket>, LoadError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&data)
}

pub fn load_from_str(data: &str) -> Result<Vec<Ticket>, LoadError> {
    let document: Value =
        serde_json::from_str(data).map_err(|e| LoadError::Document(e.to_string()))?;
    from_document(document)
}

/// Decodes the `tickets` array of an already parsed document.
/// A document without a `tickets` array holds no tickets.
pub fn from_document(document: Value) -> Result<Vec<Ticket>, LoadError> {
    let entries = match document {
        Value::Object(mut root) => match root.remove("tickets") {
            Some(Value::Array(entries)) => entries,
            None | Some(Value::Null) => {
                debug!("document has no tickets");
                return Ok(Vec::new());
            }
            Some(other) => {
                warn!(found = kind(&other), "`tickets` is not an array, nothing to load");
                return Ok(Vec::new());
            }
        },
        other => {
            warn!(found = kind(&other), "top level is not an object, nothing to load");
            return Ok(Vec::new());
        }
    };

    let tickets = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<Ticket>(entry).map_err(|e| LoadError::MalformedRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = tickets.len(), "decoded tickets");
    Ok(tickets)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
