use super::{Dispatcher, ServiceRequest, ServiceResponse, TransportError};
use crate::config::{Credentials, ServiceConfig};
use crate::model::{HttpMethod, RequestBody};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

/// Default dispatcher: one pooled reqwest client per service instance.
pub struct HttpTransport {
    client: reqwest::Client,
    credentials: Credentials,
}

impl HttpTransport {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        Ok(Self {
            client,
            credentials: config.credentials.clone(),
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Credentials::NoAuth => request,
            // IBM Cloud accepts the API key as basic auth with the fixed user name "apikey".
            Credentials::ApiKey { apikey } => request.basic_auth("apikey", Some(apikey)),
            Credentials::BearerToken { bearer_token } => request.bearer_auth(bearer_token),
        }
    }
}

#[async_trait]
impl Dispatcher for HttpTransport {
    async fn dispatch(&self, request: ServiceRequest) -> Result<ServiceResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut req = self.authorize(self.client.request(method, request.url.clone()));
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if request.header("accept").is_none() {
            req = req.header(ACCEPT, "application/json");
        }

        let has_content_type = request.header("content-type").is_some();
        req = match &request.body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => {
                if !has_content_type {
                    req = req.header(CONTENT_TYPE, "application/json");
                }
                req.body(serde_json::to_vec(value)?)
            }
            RequestBody::Text(text) => {
                if !has_content_type {
                    req = req.header(CONTENT_TYPE, "text/plain");
                }
                req.body(text.clone())
            }
        };

        let response = req
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !(200..300).contains(&status) {
            let message = error_message(&body);
            tracing::warn!(
                operation = request.operation,
                status,
                message = %message,
                "Watson request failed"
            );
            return Err(Error::remote(status, message));
        }

        Ok(ServiceResponse {
            status,
            headers,
            body,
        })
    }
}

/// Pull the human-readable message out of a Watson error body.
///
/// Services answer with `{"error": "...", "code": N}`, `{"message": "..."}`
/// or `{"errors": [{"message": "..."}]}`; anything else is returned verbatim.
fn error_message(body: &[u8]) -> String {
    let json: Option<serde_json::Value> = serde_json::from_slice(body).ok();
    json.as_ref()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.as_str())
                .or_else(|| v.get("message").and_then(|m| m.as_str()))
                .or_else(|| {
                    v.get("errors")
                        .and_then(|e| e.get(0))
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                })
        })
        .map(String::from)
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn error_message_prefers_error_field() {
        let body = br#"{"error":"Model en-XX_Foo not found","code":404}"#;
        assert_eq!(error_message(body), "Model en-XX_Foo not found");
    }

    #[test]
    fn error_message_reads_errors_array() {
        let body = br#"{"errors":[{"code":"missing_field","message":"text is required"}]}"#;
        assert_eq!(error_message(body), "text is required");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message(b"Bad Gateway"), "Bad Gateway");
    }
}
