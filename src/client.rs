//! Service client shared by every Watson service.
//!
//! A [`ServiceClient`] knows a service's URL, API version date and default
//! headers. It renders a built options value into a [`ServiceRequest`] and
//! sends it through a [`Dispatcher`]. Per-service clients
//! (e.g. `SpeechToText`) are thin typed wrappers around it.

mod builder;

pub use builder::ServiceClientBuilder;

use crate::model::Operation;
use crate::transport::{set_header, Dispatcher, ServiceRequest, ServiceResponse};
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Static facts about one Watson service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Prefix for environment lookup, e.g. `SPEECH_TO_TEXT`.
    pub name: &'static str,
    pub default_url: &'static str,
    /// The API takes a `version=YYYY-MM-DD` query parameter on every call.
    pub versioned: bool,
}

pub struct ServiceClient {
    spec: ServiceSpec,
    service_url: Url,
    version: Option<String>,
    default_headers: Vec<(String, String)>,
    dispatcher: Arc<dyn Dispatcher>,
}

impl ServiceClient {
    pub fn builder(spec: ServiceSpec) -> ServiceClientBuilder {
        ServiceClientBuilder::new(spec)
    }

    pub fn spec(&self) -> &ServiceSpec {
        &self.spec
    }

    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Render an options value without sending it.
    pub fn prepare<O: Operation>(&self, options: &O) -> Result<ServiceRequest> {
        self.prepare_with_headers(options, &[])
    }

    /// Render an options value; `extra` headers override everything else.
    pub fn prepare_with_headers<O: Operation>(
        &self,
        options: &O,
        extra: &[(&str, &str)],
    ) -> Result<ServiceRequest> {
        let parts = options.to_request()?;

        let mut url = self.service_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::configuration_with_context(
                    "service URL cannot carry a path",
                    ErrorContext::new().with_details(self.service_url.as_str()),
                )
            })?;
            segments.pop_if_empty().extend(&parts.path_segments);
        }

        if self.version.is_some() || !parts.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if let Some(version) = &self.version {
                pairs.append_pair("version", version);
            }
            for (name, value) in &parts.query {
                pairs.append_pair(name, value);
            }
        }

        let mut headers = self.default_headers.clone();
        set_header(
            &mut headers,
            "X-Request-ID",
            &uuid::Uuid::new_v4().to_string(),
        );
        for (name, value) in &parts.headers {
            set_header(&mut headers, name, value);
        }
        for (name, value) in extra {
            set_header(&mut headers, name, value);
        }

        Ok(ServiceRequest {
            operation: O::NAME,
            method: parts.method,
            url,
            headers,
            body: parts.body,
        })
    }

    pub async fn invoke<O: Operation>(&self, options: &O) -> Result<ServiceResponse> {
        self.invoke_with_headers(options, &[]).await
    }

    pub async fn invoke_with_headers<O: Operation>(
        &self,
        options: &O,
        extra: &[(&str, &str)],
    ) -> Result<ServiceResponse> {
        let request = self.prepare_with_headers(options, extra)?;
        tracing::debug!(
            service = self.spec.name,
            operation = O::NAME,
            method = request.method.as_str(),
            path = request.url.path(),
            "dispatching Watson request"
        );
        self.dispatcher.dispatch(request).await
    }

    /// Send and decode a JSON response.
    pub async fn invoke_json<O: Operation, T: DeserializeOwned>(&self, options: &O) -> Result<T> {
        self.invoke(options).await?.json()
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.spec.name)
            .field("service_url", &self.service_url.as_str())
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options_model;
    use async_trait::async_trait;
    use std::sync::Mutex;

    options_model! {
        pub struct FetchOptions => FetchOptionsBuilder;
        Get "/v1/items/{item_id}"
        {
            item_id: String [required, path "item_id"],
            tags: Vec<String> [list(add_tag: String), query "tags"],
            trace: String [optional, header "X-Trace"],
        }
    }

    #[derive(Default)]
    struct Echo {
        seen: Mutex<Vec<ServiceRequest>>,
    }

    #[async_trait]
    impl Dispatcher for Echo {
        async fn dispatch(&self, request: ServiceRequest) -> Result<ServiceResponse> {
            self.seen.lock().unwrap().push(request);
            Ok(ServiceResponse::new(200, r#"{"ok":true}"#))
        }
    }

    const VERSIONED: ServiceSpec = ServiceSpec {
        name: "EXAMPLE",
        default_url: "https://example.test/api",
        versioned: true,
    };

    fn client(echo: Arc<Echo>) -> ServiceClient {
        ServiceClient::builder(VERSIONED)
            .version("2020-01-01")
            .header("User-Agent", "watson-sdk-tests")
            .dispatcher(echo)
            .build()
            .unwrap()
    }

    #[test]
    fn versioned_service_requires_version() {
        let err = ServiceClient::builder(VERSIONED)
            .dispatcher(Arc::new(Echo::default()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("version cannot be null"));
    }

    #[test]
    fn prepare_encodes_path_and_orders_query() {
        let client = client(Arc::new(Echo::default()));
        let options = FetchOptions::builder()
            .item_id("a/b c")
            .add_tag("x")
            .add_tag("y")
            .trace("t-1")
            .build()
            .unwrap();

        let request = client.prepare(&options).unwrap();
        assert_eq!(request.url.path(), "/api/v1/items/a%2Fb%20c");
        assert_eq!(request.url.query(), Some("version=2020-01-01&tags=x%2Cy"));
        assert_eq!(request.header("x-trace"), Some("t-1"));
        assert_eq!(request.header("user-agent"), Some("watson-sdk-tests"));
        assert!(request.header("X-Request-ID").is_some());
    }

    #[test]
    fn extra_headers_win() {
        let client = client(Arc::new(Echo::default()));
        let options = FetchOptions::builder()
            .item_id("1")
            .trace("from-options")
            .build()
            .unwrap();

        let request = client
            .prepare_with_headers(&options, &[("X-Trace", "from-caller")])
            .unwrap();
        assert_eq!(request.header("X-Trace"), Some("from-caller"));
    }

    #[test]
    fn invoke_json_dispatches_once() {
        let echo = Arc::new(Echo::default());
        let client = client(echo.clone());
        let options = FetchOptions::builder().item_id("1").build().unwrap();

        let body: serde_json::Value = tokio_test::block_on(client.invoke_json(&options)).unwrap();
        assert_eq!(body["ok"], true);

        let seen = echo.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].operation, FetchOptions::NAME);
    }
}
