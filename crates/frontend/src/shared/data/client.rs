//! Typed client over the hosted query API.
//!
//! Supports exactly the subset the views need: select with equality /
//! inclusion filters, ordering, limit, at-most-one fetch, row counting and
//! a single-field update by id. Full query-language generality is out of
//! scope on purpose.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::config;
use crate::system::auth::storage;

fn rest_url(table: &str) -> String {
    format!("{}/rest/v1/{}", config::backend_url(), table)
}

/// Attach the publishable key and, when a user session exists, its bearer
/// token. Without a session the key doubles as the bearer, matching the
/// backend's anonymous-role convention.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let key = config::anon_key();
    let bearer = storage::get_access_token().unwrap_or_else(|| key.to_string());
    builder
        .header("apikey", key)
        .header("Authorization", &format!("Bearer {}", bearer))
}

/// Start a read against `table`.
pub fn table(name: &'static str) -> SelectBuilder {
    SelectBuilder::new(name)
}

#[derive(Debug, Clone)]
pub struct SelectBuilder {
    table: &'static str,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<usize>,
}

impl SelectBuilder {
    fn new(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// `column ∈ values`
    pub fn in_set(mut self, column: &str, values: &[&str]) -> Self {
        self.filters
            .push((column.to_string(), format!("in.({})", values.join(","))));
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        let dir = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{}.{}", column, dir));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Query string in the backend's filter syntax. Pure; kept separate
    /// from the network call so it can be tested on the host target.
    fn query_string(&self) -> String {
        let mut parts = vec!["select=*".to_string()];
        for (column, op) in &self.filters {
            parts.push(format!("{}={}", column, urlencoding::encode(op)));
        }
        if let Some(order) = &self.order {
            parts.push(format!("order={}", order));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        parts.join("&")
    }

    /// Fetch all matching rows.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, String> {
        let url = format!("{}?{}", rest_url(self.table), self.query_string());
        let response = with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// Fetch at most one row. Zero rows is not an error.
    pub async fn fetch_maybe_single<T: DeserializeOwned>(mut self) -> Result<Option<T>, String> {
        self.limit = Some(1);
        let mut rows = self.fetch::<T>().await?;
        Ok(rows.pop())
    }

    /// Count matching rows without transferring them.
    pub async fn count(self) -> Result<u64, String> {
        let mut query = String::from("select=id");
        for (column, op) in &self.filters {
            query.push('&');
            query.push_str(&format!("{}={}", column, urlencoding::encode(op)));
        }
        let url = format!("{}?{}", rest_url(self.table), query);
        let response = with_auth(Request::get(&url))
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        // 206 Partial Content is the normal answer to a ranged count
        if !response.ok() && response.status() != 206 {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let content_range = response
            .headers()
            .get("content-range")
            .ok_or_else(|| "Missing Content-Range header".to_string())?;
        parse_count(&content_range)
            .ok_or_else(|| format!("Unexpected Content-Range: {}", content_range))
    }
}

/// Total after the `/` in a `Content-Range` value like `0-0/42` or `*/42`.
fn parse_count(content_range: &str) -> Option<u64> {
    content_range.rsplit('/').next()?.parse().ok()
}

/// Patch selected fields of one row. The only write path in the
/// application; `Prefer: return=minimal` because nobody reads the echo.
pub async fn update_by_id(
    table: &'static str,
    id: Uuid,
    patch: &serde_json::Value,
) -> Result<(), String> {
    let url = format!("{}?id=eq.{}", rest_url(table), id);
    let response = with_auth(Request::patch(&url))
        .header("Prefer", "return=minimal")
        .json(patch)
        .map_err(|e| format!("Failed to serialize patch: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_select() {
        let q = SelectBuilder::new("clients").query_string();
        assert_eq!(q, "select=*");
    }

    #[test]
    fn eq_filter_with_order_and_limit() {
        let q = SelectBuilder::new("deliveries")
            .eq("status", "pending")
            .order_by("scheduled_time", true)
            .limit(10)
            .query_string();
        assert_eq!(
            q,
            "select=*&status=eq.pending&order=scheduled_time.asc&limit=10"
        );
    }

    #[test]
    fn in_set_filter_is_percent_encoded() {
        let q = SelectBuilder::new("deliveries")
            .in_set("status", &["pending", "in_transit"])
            .query_string();
        assert_eq!(q, "select=*&status=in.%28pending%2Cin_transit%29");
    }

    #[test]
    fn descending_order() {
        let q = SelectBuilder::new("routes")
            .order_by("created_at", false)
            .query_string();
        assert_eq!(q, "select=*&order=created_at.desc");
    }

    #[test]
    fn count_parses_content_range() {
        assert_eq!(parse_count("0-0/42"), Some(42));
        assert_eq!(parse_count("*/0"), Some(0));
        assert_eq!(parse_count("garbage"), None);
    }
}
