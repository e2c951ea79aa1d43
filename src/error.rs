//! Error types shared by the theme parser, the merge engine and config loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to parse the text of an `index.theme` file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `key=value` line appeared before any `[Section]` header.
    #[error("line {line}: assignment without a category")]
    AssignmentWithoutCategory { line: usize },

    /// A line that is neither a section header nor an assignment.
    #[error("line {line}: expected `key=value`, found `{content}`")]
    MissingEquals { line: usize, content: String },
}

/// Failures that abort a merge run.
#[derive(Debug, Error)]
pub enum MergeError {
    /// One or more requested theme roots have no `index.theme`.
    #[error("{} theme path(s) are invalid (missing index.theme)", roots.len())]
    MissingThemeIndex { roots: Vec<PathBuf> },

    /// An `index.theme` file could not be parsed.
    #[error("malformed theme file {path:?}: {source}")]
    MalformedThemeFile {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A filesystem operation failed.
    #[error("failed to {action} {path:?}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    /// Wraps an I/O error with the operation and path it concerned.
    pub fn io(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit status for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingThemeIndex { .. } => crate::constants::EXIT_MISSING_THEMES,
            _ => crate::constants::EXIT_FAILURE,
        }
    }
}

/// Problems resolving the merge configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required option was not provided by any layer.
    #[error("missing required setting `{key}` (set it in a config file, the `{env}` environment variable, or on the command line)")]
    Missing { key: &'static str, env: &'static str },

    /// A config file could not be read.
    #[error("failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A config file is not valid TOML for our schema.
    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
