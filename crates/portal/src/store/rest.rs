//! REST client for the hosted table-query API.
//!
//! Speaks PostgREST-style conventions: filters and ordering as query-string
//! pairs, JSON rows in and out, `Prefer: return=representation` so writes
//! echo the stored rows back.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::PortalConfig;

use super::{Filter, Query, StoreError, Table, TableStore};

/// Client for the hosted table-query datastore.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
}

impl RestStore {
    /// Create a new datastore client from the portal configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the API key cannot be used as an
    /// HTTP header value, or [`StoreError::Http`] if the client fails to
    /// build.
    pub fn new(config: &PortalConfig) -> Result<Self, StoreError> {
        let api_key = config.data_api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut key_value = HeaderValue::from_str(api_key)
            .map_err(|e| StoreError::Decode(format!("invalid API key format: {e}")))?;
        key_value.set_sensitive(true);
        headers.insert("apikey", key_value);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| StoreError::Decode(format!("invalid API key format: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        // Writes return the stored rows instead of an empty body
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.data_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/{}", self.base_url, table.as_str())
    }

    /// Issue a request and decode the JSON row array the API responds with.
    async fn rows(
        &self,
        method: Method,
        table: Table,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Vec<Value>, StoreError> {
        let mut request = self.client.request(method, self.table_url(table)).query(params);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            if status == StatusCode::CONFLICT {
                return Err(StoreError::Conflict(message));
            }
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(rows)
    }
}

impl TableStore for RestStore {
    async fn select(&self, table: Table, query: Query) -> Result<Vec<Value>, StoreError> {
        let mut params = Vec::new();
        if let Some(filter) = &query.filter {
            params.push(filter.to_query_pair());
        }
        if let Some(order) = query.order {
            params.push(order.to_query_pair());
        }
        self.rows(Method::GET, table, &params, None).await
    }

    async fn insert(&self, table: Table, row: Value) -> Result<Value, StoreError> {
        let rows = self.rows(Method::POST, table, &[], Some(&row)).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode(format!("insert into {table} returned no row")))
    }

    async fn update(
        &self,
        table: Table,
        filter: Filter,
        patch: Value,
    ) -> Result<Vec<Value>, StoreError> {
        let params = [filter.to_query_pair()];
        self.rows(Method::PATCH, table, &params, Some(&patch)).await
    }

    async fn delete(&self, table: Table, filter: Filter) -> Result<u64, StoreError> {
        let params = [filter.to_query_pair()];
        let rows = self.rows(Method::DELETE, table, &params, None).await?;
        Ok(rows.len() as u64)
    }
}
