//! Supabase PostgREST client.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;

use crate::config::SupabaseConfig;
use crate::error::CheckError;

/// Rows returned by a table query. Shape is owned by the remote table.
pub type Rows = Vec<serde_json::Value>;

/// HTTP client for the Supabase REST API.
#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    rest_url: String,
    service_key: String,
}

impl SupabaseClient {
    /// Create a new client bound to the project URL and service key.
    ///
    /// Neither value is validated here; the service rejects bad ones.
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            service_key: config.service_key.clone(),
        }
    }

    /// Start a query against `table`.
    pub fn table(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
            params: QueryParams {
                select: "*".to_string(),
                order: None,
                limit: None,
            },
        }
    }
}

/// PostgREST query string parameters.
#[derive(Debug, Clone, Serialize)]
struct QueryParams {
    select: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

/// Read query against a single table.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    params: QueryParams,
}

impl TableQuery<'_> {
    /// Columns to return, comma separated (default `*`).
    pub fn select(mut self, columns: &str) -> Self {
        self.params.select = columns.to_string();
        self
    }

    /// Order by `column`, descending when `desc` is set.
    pub fn order(mut self, column: &str, desc: bool) -> Self {
        let direction = if desc { "desc" } else { "asc" };
        self.params.order = Some(format!("{}.{}", column, direction));
        self
    }

    /// Return at most `count` rows.
    pub fn limit(mut self, count: usize) -> Self {
        self.params.limit = Some(count);
        self
    }

    /// Endpoint URL for this table.
    pub fn url(&self) -> String {
        format!("{}/{}", self.client.rest_url, self.table)
    }

    /// Issue the query and return the rows.
    pub async fn execute(self) -> Result<Rows, CheckError> {
        let url = self.url();
        tracing::debug!(
            url = %url,
            select = %self.params.select,
            order = ?self.params.order,
            limit = ?self.params.limit,
            "Querying table"
        );

        let response = self
            .client
            .client
            .get(&url)
            .query(&self.params)
            .header("apikey", &self.client.service_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.client.service_key))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CheckError::Service { status, body });
        }

        let rows: Rows = serde_json::from_str(&body)?;
        tracing::debug!(table = %self.table, rows = rows.len(), "Query completed");
        Ok(rows)
    }
}
