use thiserror::Error;

use crate::table::TableKind;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot generate {dependent}: referenced table '{referenced}' is empty")]
    EmptyReference {
        dependent: TableKind,
        referenced: TableKind,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type GenResult<T> = Result<T, GenError>;
