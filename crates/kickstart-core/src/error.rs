//! Error kinds for the generation pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KickstartError {
    /// Bad project name or target directory already exists. Fatal before
    /// anything is written.
    #[error("{0}")]
    Validation(String),

    /// A rendered output path escapes the project root. Always fatal and
    /// aborts the entire generation.
    #[error("path traversal detected: '{path}' escapes the project directory")]
    PathSafety { path: String },

    /// Filesystem failure while materializing a file. The partially written
    /// tree is removed before this is returned.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// venv creation or dependency install failed. Non-fatal: the generated
    /// project tree is already complete and usable.
    #[error("{0}")]
    Bootstrap(String),
}
