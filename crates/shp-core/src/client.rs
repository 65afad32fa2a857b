//! BuildRun client trait.

use async_trait::async_trait;

use crate::{BuildRun, Result};

/// Source of BuildRun resources.
///
/// Implementations return every BuildRun in the namespace in one call, in the
/// order the backend reports them. Failures map to [`crate::Error::Fetch`].
#[async_trait]
pub trait BuildRunClient: Send + Sync {
    /// Name of this client backend.
    fn name(&self) -> &'static str;

    /// List all BuildRuns in `namespace`.
    async fn list(&self, namespace: &str) -> Result<Vec<BuildRun>>;
}
