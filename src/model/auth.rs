/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::http::ApiResponse;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session token issued by `GET api/key`.
///
/// Serialises as the server's `{"key": "..."}` object. The client never caches,
/// validates or refreshes it: whoever holds the value decides how long it lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthKey {
    key: String,
}

impl AuthKey {
    /// Wraps an arbitrary token. Foreign or malformed keys are allowed on purpose,
    /// the server is the only judge of validity.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Extracts the token from an authenticate response.
    ///
    /// Returns `None` when the status is not a success or the body has no string `key`.
    pub fn from_response(response: &ApiResponse) -> Option<Self> {
        if !response.is_success() {
            return None;
        }
        response
            .body
            .get("key")
            .and_then(|v| v.as_str())
            .map(AuthKey::new)
    }

    /// The raw token value sent in the `auth_key` header
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl From<&str> for AuthKey {
    fn from(key: &str) -> Self {
        AuthKey::new(key)
    }
}

impl From<String> for AuthKey {
    fn from(key: String) -> Self {
        AuthKey::new(key)
    }
}
