//! Error types for shp.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The list call against the cluster failed (network, auth, missing namespace, deadline).
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Writing the report to the output stream failed.
    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),

    /// Kubeconfig or client setup failed.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
