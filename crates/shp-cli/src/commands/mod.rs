//! CLI command implementations.

pub mod buildrun;

use shp_core::BuildRunClient;
use std::sync::Arc;
use std::time::Duration;

/// Cluster access shared by all subcommands.
pub struct Params {
    pub client: Arc<dyn BuildRunClient>,
    pub namespace: String,
    /// Deadline for a single API call.
    pub request_timeout: Duration,
}
