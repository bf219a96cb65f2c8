use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use caulk_core::model::SemanticModel;
use caulk_syntax::tree::SourceTree;

/// A serialized project snapshot produced by a host frontend: the semantic
/// model plus the syntax tree of every file fixes may touch, keyed by the
/// file path the model's locations refer to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    pub model: SemanticModel,
    #[serde(default)]
    pub trees: BTreeMap<String, SourceTree>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed snapshot {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CliError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
