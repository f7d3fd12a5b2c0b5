//! REST API Client
//!
//! Thin wrappers over the browser fetch API (via gloo-net) for the backend
//! endpoints. Every call either resolves with parsed JSON or fails with an
//! [`ApiError`]; there is no retry, timeout, or cancellation.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Item, UserDetail, UserSummary};

/// Failure modes of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network down, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered outside the 200-299 range.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Request body for `POST /api/items/`.
#[derive(Serialize)]
struct CreateItemBody<'a> {
    name: &'a str,
    description: &'a str,
}

fn check_status(status: u16, ok: bool) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

pub async fn list_items() -> Result<Vec<Item>, ApiError> {
    let resp = Request::get("/api/items").send().await?;
    check_status(resp.status(), resp.ok())?;
    Ok(resp.json().await?)
}

pub async fn create_item(name: &str, description: &str) -> Result<Item, ApiError> {
    let resp = Request::post("/api/items/")
        .json(&CreateItemBody { name, description })?
        .send()
        .await?;
    check_status(resp.status(), resp.ok())?;
    Ok(resp.json().await?)
}

pub async fn delete_item(id: u32) -> Result<(), ApiError> {
    let resp = Request::delete(&format!("/api/items/{}", id)).send().await?;
    check_status(resp.status(), resp.ok())
}

pub async fn list_users() -> Result<Vec<UserSummary>, ApiError> {
    let resp = Request::get("/api/users").send().await?;
    check_status(resp.status(), resp.ok())?;
    Ok(resp.json().await?)
}

/// Fetch a single user profile. A 2xx response with an empty or `null` body
/// resolves to `None` (the detail view's not-found state).
pub async fn get_user(user_id: &str) -> Result<Option<UserDetail>, ApiError> {
    let resp = Request::get(&format!("/api/users/{}", user_id)).send().await?;
    check_status(resp.status(), resp.ok())?;
    let body = resp.text().await?;
    if body.trim().is_empty() || body.trim() == "null" {
        return Ok(None);
    }
    serde_json::from_str(&body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mentions_code() {
        let msg = ApiError::Status(404).to_string();
        assert!(msg.contains("404"), "message was: {}", msg);
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200, true).is_ok());
        assert!(matches!(check_status(500, false), Err(ApiError::Status(500))));
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let serde_err = serde_json::from_str::<u32>("oops").unwrap_err();
        let err: ApiError = gloo_net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_create_body_shape() {
        let body = CreateItemBody { name: "Widget", description: "" };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"name":"Widget","description":""}"#);
    }
}
