//! Thin client for the hosted Supabase tables. The public site only
//! inserts rows; the admin inbox additionally selects, patches the status
//! column and deletes. No retries.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Message extracted from the server's error body, surfaced verbatim.
    #[error("{0}")]
    Server(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Handle to the hosted project. Cheap to clone; construct once per page.
#[derive(Clone, PartialEq)]
pub struct Supabase {
    base: String,
    anon_key: String,
}

impl Supabase {
    pub fn new() -> Self {
        Self {
            base: config::get_supabase_url(),
            anon_key: config::get_supabase_anon_key(),
        }
    }

    pub fn from(&self, table: &str) -> TableHandle {
        TableHandle {
            url: table_url(&self.base, table),
            anon_key: self.anon_key.clone(),
        }
    }
}

pub struct TableHandle {
    url: String,
    anon_key: String,
}

impl TableHandle {
    /// Single-row insert. `Prefer: return=minimal` keeps the response empty.
    pub async fn insert<T: Serialize>(&self, row: &T) -> Result<(), StoreError> {
        let body =
            serde_json::to_string(row).map_err(|e| StoreError::Decode(e.to_string()))?;
        let response = self
            .authed(Request::post(&self.url))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        expect_ok(response).await.map(|_| ())
    }

    pub async fn select_ordered<T: DeserializeOwned>(
        &self,
        order: &str,
    ) -> Result<Vec<T>, StoreError> {
        let url = order_query(&self.url, order);
        let response = self
            .authed(Request::get(&url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let response = expect_ok(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    pub async fn update_by_id<T: Serialize>(
        &self,
        id: &str,
        patch: &T,
    ) -> Result<(), StoreError> {
        let body =
            serde_json::to_string(patch).map_err(|e| StoreError::Decode(e.to_string()))?;
        let response = self
            .authed(Request::patch(&id_filter(&self.url, id)))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        expect_ok(response).await.map(|_| ())
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .authed(Request::delete(&id_filter(&self.url, id)))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        expect_ok(response).await.map(|_| ())
    }

    fn authed(&self, request: Request) -> Request {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }
}

fn table_url(base: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base.trim_end_matches('/'), table)
}

fn id_filter(table_url: &str, id: &str) -> String {
    format!("{table_url}?id=eq.{id}")
}

fn order_query(table_url: &str, order: &str) -> String {
    format!("{table_url}?select=*&order={order}")
}

async fn expect_ok(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Server(server_message(status, &body)))
}

/// Pull the human-readable `message` out of an error body; fall back to the
/// status code when the body is not the expected shape.
fn server_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_target_the_rest_endpoint() {
        let url = table_url("https://example.supabase.co/", "contact_submissions");
        assert_eq!(url, "https://example.supabase.co/rest/v1/contact_submissions");
        assert_eq!(
            id_filter(&url, "42"),
            "https://example.supabase.co/rest/v1/contact_submissions?id=eq.42"
        );
        assert_eq!(
            order_query(&url, "created_at.desc"),
            "https://example.supabase.co/rest/v1/contact_submissions?select=*&order=created_at.desc"
        );
    }

    #[test]
    fn server_message_prefers_the_body_message() {
        let body = r#"{"code":"23505","message":"duplicate key value"}"#;
        assert_eq!(server_message(409, body), "duplicate key value");
        assert_eq!(
            server_message(500, "<html>oops</html>"),
            "request failed with status 500"
        );
        assert_eq!(server_message(502, ""), "request failed with status 502");
    }

    #[test]
    fn errors_render_for_the_banner() {
        assert_eq!(
            StoreError::Server("duplicate key value".into()).to_string(),
            "duplicate key value"
        );
        assert!(StoreError::Network("timeout".into())
            .to_string()
            .starts_with("request failed"));
    }
}
