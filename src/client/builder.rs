use super::{ServiceClient, ServiceSpec};
use crate::config::{Credentials, ServiceConfig};
use crate::transport::{Dispatcher, HttpTransport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use url::Url;

/// Builder for [`ServiceClient`].
///
/// Explicit values win over a supplied [`ServiceConfig`], which wins over the
/// environment (when [`from_env`](Self::from_env) is set), which wins over
/// the service's default URL.
pub struct ServiceClientBuilder {
    spec: ServiceSpec,
    config: Option<ServiceConfig>,
    env: Option<ServiceConfig>,
    service_url: Option<String>,
    version: Option<String>,
    credentials: Option<Credentials>,
    timeout_secs: Option<u64>,
    headers: Vec<(String, String)>,
    dispatcher: Option<Arc<dyn Dispatcher>>,
}

impl ServiceClientBuilder {
    pub fn new(spec: ServiceSpec) -> Self {
        Self {
            spec,
            config: None,
            env: None,
            service_url: None,
            version: None,
            credentials: None,
            timeout_secs: None,
            headers: Vec::new(),
            dispatcher: None,
        }
    }

    /// Start from a complete configuration (e.g. one read from YAML).
    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Fill unset values from `<SERVICE>_*` environment variables and the keyring.
    pub fn from_env(self) -> Self {
        let env = ServiceConfig::from_env(self.spec.name);
        self.env_config(env)
    }

    /// Use an already resolved environment layer, e.g. from
    /// [`ServiceConfig::from_lookup`].
    pub fn env_config(mut self, env: ServiceConfig) -> Self {
        self.env = Some(env);
        self
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.credentials(Credentials::api_key(key))
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Replace the HTTP transport, e.g. with an in-memory dispatcher in tests.
    pub fn dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Merge the layers into the configuration the client will run with.
    fn resolve(&mut self) -> ServiceConfig {
        let mut config = match (self.config.take(), self.env.take()) {
            (Some(mut config), Some(env)) => {
                if config.service_url.is_none() {
                    config.service_url = env.service_url;
                }
                if config.version.is_none() {
                    config.version = env.version;
                }
                config
            }
            (Some(config), None) => config,
            (None, Some(env)) => env,
            (None, None) => ServiceConfig::default(),
        };

        if let Some(url) = self.service_url.take() {
            config.service_url = Some(url);
        }
        if let Some(version) = self.version.take() {
            config.version = Some(version);
        }
        if let Some(credentials) = self.credentials.take() {
            config.credentials = credentials;
        }
        if let Some(secs) = self.timeout_secs.take() {
            config.timeout_secs = secs;
        }
        config.default_headers.extend(self.headers.drain(..));
        config
    }

    pub fn build(mut self) -> Result<ServiceClient> {
        let config = self.resolve();

        let version = config.version.clone().filter(|v| !v.trim().is_empty());
        if self.spec.versioned && version.is_none() {
            return Err(Error::configuration_with_context(
                "version cannot be null",
                ErrorContext::new()
                    .with_field_path(format!("{}.version", self.spec.name))
                    .with_source("service_client_builder"),
            ));
        }

        let raw_url = config
            .service_url
            .clone()
            .unwrap_or_else(|| self.spec.default_url.to_string());
        let service_url = Url::parse(raw_url.trim_end_matches('/')).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid service URL: {}", e),
                ErrorContext::new()
                    .with_details(raw_url.clone())
                    .with_source("service_client_builder"),
            )
        })?;
        if service_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "service URL cannot carry a path",
                ErrorContext::new()
                    .with_details(raw_url)
                    .with_source("service_client_builder"),
            ));
        }

        let dispatcher: Arc<dyn Dispatcher> = match self.dispatcher {
            Some(dispatcher) => dispatcher,
            None => Arc::new(HttpTransport::new(&config)?),
        };

        let mut default_headers: Vec<(String, String)> =
            config.default_headers.into_iter().collect();
        default_headers.sort();

        tracing::debug!(
            service = self.spec.name,
            service_url = %service_url,
            version = ?version,
            credentials = ?config.credentials,
            timeout_secs = config.timeout_secs,
            "service client configured"
        );

        Ok(ServiceClient {
            spec: self.spec,
            service_url,
            version,
            default_headers,
            dispatcher,
        })
    }
}
