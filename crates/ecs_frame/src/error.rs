//! Frame-layer error types.

use std::path::PathBuf;

use ecs_store::StoreError;

/// Errors that can occur while configuring or running the frame loop.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A system with this name is already registered.
    #[error("system '{0}' is already registered")]
    DuplicateSystem(String),

    /// The frame configuration failed validation.
    #[error("invalid frame config: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was not valid JSON for [`FrameConfig`](crate::FrameConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A system returned an error while running.
    #[error("system '{system}' failed: {source}")]
    System {
        /// Name of the failing system.
        system: String,
        /// The store error the system propagated.
        #[source]
        source: StoreError,
    },
}
