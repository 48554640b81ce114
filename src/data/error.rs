use std::path::PathBuf;

use thiserror::Error;

/// Why the analysis payload could not be loaded.
/// Only ever logged; the user sees a single fixed message whatever the cause.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid analysis payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start fetch runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
