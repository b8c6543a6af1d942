//! Request dispatch: the seam between built options and the network.
//!
//! A [`ServiceClient`](crate::client::ServiceClient) renders an options value
//! into a [`ServiceRequest`] and hands it to a [`Dispatcher`]. [`HttpTransport`]
//! is the reqwest-backed default; tests and embedders can plug in their own.

mod http;

pub use http::HttpTransport;

use crate::model::{HttpMethod, RequestBody};
use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

/// A fully rendered request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    /// Operation name, for logs.
    pub operation: &'static str,
    pub method: HttpMethod,
    /// Service URL, encoded path and query.
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ServiceRequest {
    /// Header lookup; names compare case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Raw response from a successful dispatch.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl ServiceResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as text; invalid UTF-8 is replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Sends a rendered request and returns the raw response.
///
/// Implementations turn non-2xx statuses into [`Error::Remote`](crate::Error::Remote).
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: ServiceRequest) -> Result<ServiceResponse>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Other(String),
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Insert or replace a header, comparing names case-insensitively.
pub(crate) fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        Some(entry) => entry.1 = value.to_string(),
        None => headers.push((name.to_string(), value.to_string())),
    }
}
