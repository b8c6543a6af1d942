//! Turning a built options value into the parts of an HTTP request.

use super::field::ParamValue;
use crate::{ArgumentError, Error, ErrorContext, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Request payload produced by an options value.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Text(String),
}

/// Everything a dispatcher needs from an options value, minus the service URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParts {
    pub method: HttpMethod,
    /// Decoded path segments; the transport percent-encodes each one.
    pub path_segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestParts {
    /// The path as written in the API reference, without encoding.
    pub fn path(&self) -> String {
        format!("/{}", self.path_segments.join("/"))
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Header lookup; names compare case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An options value that maps onto one API operation.
pub trait Operation {
    /// Operation name used in logs.
    const NAME: &'static str;
    const METHOD: HttpMethod;
    /// Path template, with `{name}` placeholders occupying whole segments.
    const PATH: &'static str;

    fn to_request(&self) -> Result<RequestParts>;
}

/// Accumulates request parts while a generated `to_request` walks its fields.
#[doc(hidden)]
#[derive(Debug)]
pub struct RequestTemplate {
    method: HttpMethod,
    template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    payload: Option<RequestBody>,
    json_members: bool,
}

impl RequestTemplate {
    pub fn new(method: HttpMethod, template: &'static str) -> Self {
        Self {
            method,
            template,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            payload: None,
            json_members: false,
        }
    }

    pub fn path_param<T: ParamValue + ?Sized>(&mut self, name: &'static str, value: &T) {
        self.path_params.push((name, value.to_param()));
    }

    pub fn query_param<T: ParamValue + ?Sized>(&mut self, name: &str, value: &T) {
        self.query.push((name.to_string(), value.to_param()));
    }

    pub fn header<T: ParamValue + ?Sized>(&mut self, name: &str, value: &T) {
        self.headers.push((name.to_string(), value.to_param()));
    }

    /// The model has fields that serialize as members of a JSON object body.
    pub fn expect_json_members(&mut self) {
        self.json_members = true;
    }

    /// The field is the whole JSON body. A JSON payload wins over a text payload.
    pub fn json_payload<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.payload = Some(RequestBody::Json(serde_json::to_value(value)?));
        Ok(())
    }

    pub fn text_payload<T: ParamValue + ?Sized>(&mut self, value: &T) {
        if !matches!(self.payload, Some(RequestBody::Json(_))) {
            self.payload = Some(RequestBody::Text(value.to_param()));
        }
    }

    pub fn finish<M: Serialize>(self, model: &M) -> Result<RequestParts> {
        let path_segments = self
            .template
            .trim_start_matches('/')
            .split('/')
            .map(|segment| match placeholder(segment) {
                Some(name) => self
                    .path_params
                    .iter()
                    .find(|(param, _)| *param == name)
                    .map(|(_, value)| value.clone())
                    .ok_or_else(|| {
                        Error::invalid_argument(
                            ArgumentError::UnresolvedPathParam {
                                name: name.to_string(),
                            },
                            ErrorContext::new()
                                .with_details(self.template)
                                .with_source("request_template"),
                        )
                    }),
                None => Ok(segment.to_string()),
            })
            .collect::<Result<Vec<_>>>()?;

        let body = match self.payload {
            Some(payload) => payload,
            None if self.json_members => RequestBody::Json(serde_json::to_value(model)?),
            None => RequestBody::Empty,
        };

        Ok(RequestParts {
            method: self.method,
            path_segments,
            query: self.query,
            headers: self.headers,
            body,
        })
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
