//! Client for the Intent persistence service (`/api/intents/`).
//!
//! Unlike the parser client these calls are real fallible operations:
//! failures propagate as [`StoreError`] for the host to surface as a
//! notification. They never touch the editing session's state.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("malformed reply: {0}")]
    Parse(String),
}

/// A persisted Intent as the service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentRecord {
    pub id: u64,
    pub intent_string: String,
    /// Owning user's id.
    pub username: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Blocking client for Intent CRUD.
pub struct IntentStore {
    base_url: String,
    token: Option<String>,
}

impl IntentStore {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    pub fn list(&self) -> Result<Vec<IntentRecord>, StoreError> {
        let body = self.get(&self.url("/api/intents/"))?;
        serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))
    }

    pub fn retrieve(&self, id: u64) -> Result<IntentRecord, StoreError> {
        let body = self.get(&self.url(&format!("/api/intents/{id}")))?;
        serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))
    }

    pub fn create(&self, intent: &str) -> Result<IntentRecord, StoreError> {
        let body = self.send_intent(&self.url("/api/intents/"), "POST", intent)?;
        serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))
    }

    pub fn update(&self, id: u64, intent: &str) -> Result<IntentRecord, StoreError> {
        let body = self.send_intent(&self.url(&format!("/api/intents/{id}/")), "PUT", intent)?;
        serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))
    }

    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut request = ureq::delete(self.url(&format!("/api/intents/{id}")));
        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Token {token}"));
        }
        request
            .call()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> Result<String, StoreError> {
        let mut request = ureq::get(url);
        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Token {token}"));
        }
        let response = request
            .call()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        response
            .into_body()
            .read_to_string()
            .map_err(|e| StoreError::Http(e.to_string()))
    }

    fn send_intent(&self, url: &str, method: &str, intent: &str) -> Result<String, StoreError> {
        let body = serde_json::json!({ "intent_string": intent }).to_string();
        let mut request = if method == "PUT" {
            ureq::put(url)
        } else {
            ureq::post(url)
        }
        .header("Content-Type", "application/json");
        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Token {token}"));
        }
        let response = request
            .send(body.as_bytes())
            .map_err(|e| StoreError::Http(e.to_string()))?;
        response
            .into_body()
            .read_to_string()
            .map_err(|e| StoreError::Http(e.to_string()))
    }
}
