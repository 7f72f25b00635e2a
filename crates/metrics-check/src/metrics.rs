//! Latest executive metrics lookup.

use crate::client::{Rows, SupabaseClient};
use crate::error::CheckError;

/// Table holding executive metrics snapshots.
pub const METRICS_TABLE: &str = "executive_metrics";

/// Column used to pick the latest row.
pub const UPDATED_AT_COLUMN: &str = "updated_at";

/// Fetch the most recently updated row of `table`.
///
/// Returns a single-element list, or an empty list when the table is empty.
pub async fn fetch_latest(client: &SupabaseClient, table: &str) -> Result<Rows, CheckError> {
    client
        .table(table)
        .select("*")
        .order(UPDATED_AT_COLUMN, true)
        .limit(1)
        .execute()
        .await
}

/// Render rows for stdout: one line, or indented when `pretty` is set.
pub fn render(rows: &Rows, pretty: bool) -> Result<String, CheckError> {
    let out = if pretty {
        serde_json::to_string_pretty(rows)?
    } else {
        serde_json::to_string(rows)?
    };
    Ok(out)
}
