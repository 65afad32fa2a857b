//! BuildRun commands.

use chrono::Utc;
use shp_core::row::COLUMNS;
use shp_core::{BuildRunRow, Error, Result};
use std::io::Write;
use tracing::debug;

use super::Params;
use crate::table::TableWriter;

/// List the BuildRuns in the namespace as a table on `out`.
///
/// Nothing is written when the fetch fails or times out.
pub async fn list<W: Write>(params: &Params, no_header: bool, out: W) -> Result<()> {
    let fetch = params.client.list(&params.namespace);
    let buildruns = tokio::time::timeout(params.request_timeout, fetch)
        .await
        .map_err(|_| {
            Error::Fetch(format!(
                "timed out after {}s listing buildruns in namespace {}",
                params.request_timeout.as_secs_f64(),
                params.namespace
            ))
        })??;

    debug!(
        client = params.client.name(),
        namespace = %params.namespace,
        count = buildruns.len(),
        "rendering buildruns"
    );

    let now = Utc::now();
    let mut table = TableWriter::new(out, COLUMNS, !no_header);
    for br in &buildruns {
        table.push_row(BuildRunRow::from_buildrun(br, now).into_cells());
    }
    table.finish()
}
