/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::{AppError, PetResult};
use reqwest::multipart::Form;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Body of a response: decoded JSON when possible, the raw text otherwise.
///
/// The service sometimes answers with HTML error pages, so every caller has to
/// handle both shapes explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body parsed as JSON
    Structured(Value),
    /// Body that was not valid JSON, kept verbatim (may be empty)
    Raw(String),
}

impl ResponseBody {
    /// Parses `text` as JSON, falling back to [`ResponseBody::Raw`]
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Structured(value),
            Err(e) => {
                debug!("Response body is not JSON ({}), keeping raw text", e);
                ResponseBody::Raw(text)
            }
        }
    }

    /// True for [`ResponseBody::Structured`]
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, ResponseBody::Structured(_))
    }

    /// The decoded JSON, if any
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Structured(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }

    /// The raw text, if the body was not JSON
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ResponseBody::Structured(_) => None,
            ResponseBody::Raw(text) => Some(text),
        }
    }

    /// Field `key` of a JSON object body
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|v| v.get(key))
    }

    /// True when the body is a JSON object holding `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Decodes a JSON body into `T`.
    ///
    /// # Errors
    /// `AppError::Deserialization` for a raw body, `AppError::Json` when the JSON
    /// does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> PetResult<T> {
        match self {
            ResponseBody::Structured(value) => Ok(serde_json::from_value(value.clone())?),
            ResponseBody::Raw(text) => Err(AppError::Deserialization(format!(
                "body is not JSON: {}",
                truncate(text, 200)
            ))),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Structured(value) => write!(f, "{value}"),
            ResponseBody::Raw(text) => f.write_str(text),
        }
    }
}

/// Uniform outcome of every client call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP method of the originating request
    pub method: Method,
    /// Numeric status code, not interpreted by the client
    pub status: u16,
    /// Response body
    pub body: ResponseBody,
}

impl ApiResponse {
    /// True for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Status as a `StatusCode`, `None` for values outside the valid range
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    /// Splits into the `(status, body)` pair
    pub fn into_parts(self) -> (u16, ResponseBody) {
        (self.status, self.body)
    }

    /// Turns non-2xx statuses into `AppError::Unexpected`
    pub fn ensure_success(self) -> PetResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let status = self
            .status_code()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Err(AppError::Unexpected(status))
    }
}

/// What goes into the request besides the headers
pub enum RequestPayload {
    /// Nothing
    Empty,
    /// URL query parameters
    Query(Vec<(&'static str, String)>),
    /// `application/x-www-form-urlencoded` fields
    Form(Vec<(&'static str, String)>),
    /// `multipart/form-data` body
    Multipart(Form),
}

impl fmt::Debug for RequestPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestPayload::Empty => f.write_str("Empty"),
            RequestPayload::Query(q) => f.debug_tuple("Query").field(q).finish(),
            RequestPayload::Form(fields) => f.debug_tuple("Form").field(fields).finish(),
            RequestPayload::Multipart(_) => f.write_str("Multipart"),
        }
    }
}

/// Sends one HTTP request and normalises the answer into an [`ApiResponse`].
///
/// No retry and no status interpretation: whatever status the server returns ends
/// up in the response. Only transport failures produce an error.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `payload` - Query string, form or multipart body
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     Method::GET,
///     "https://petfriends.skillfactory.ru/api/key",
///     vec![("email", "me@example.com"), ("password", "secret")],
///     RequestPayload::Empty,
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    payload: RequestPayload,
) -> PetResult<ApiResponse> {
    debug!("{} {}", method, url);

    let mut request = client.request(method.clone(), url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    request = match payload {
        RequestPayload::Empty => request,
        RequestPayload::Query(params) => request.query(&params),
        RequestPayload::Form(fields) => request.form(&fields),
        RequestPayload::Multipart(form) => request.multipart(form),
    };

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let text = response.text().await?;

    Ok(ApiResponse {
        method,
        status: status.as_u16(),
        body: ResponseBody::from_text(text),
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
