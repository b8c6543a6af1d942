//! Service configuration: URL, API version date, credentials and timeouts.
//!
//! Values come from code, a YAML document, or the environment. Environment
//! lookup follows the Watson convention of prefixing with the service name:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `<SERVICE>_URL` | Service instance URL |
//! | `<SERVICE>_APIKEY` | IBM Cloud API key |
//! | `<SERVICE>_BEARER_TOKEN` | Pre-issued bearer token |
//! | `<SERVICE>_AUTH_TYPE` | `noauth`, `bearertoken` or `iam` (default) |
//! | `WATSON_HTTP_TIMEOUT_SECS` | Request timeout (default 60) |
//!
//! When the environment has no credentials, the OS keyring entry
//! `("ibm-watson", <service>)` is consulted for an API key.

use crate::{Error, ErrorContext, Result};
use keyring::Entry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const KEYRING_SERVICE: &str = "ibm-watson";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// How requests authenticate.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    #[default]
    NoAuth,
    ApiKey { apikey: String },
    BearerToken { bearer_token: String },
}

impl Credentials {
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey { apikey: key.into() }
    }

    pub fn bearer_token(token: impl Into<String>) -> Self {
        Credentials::BearerToken {
            bearer_token: token.into(),
        }
    }
}

// Secrets never reach logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::NoAuth => f.write_str("NoAuth"),
            Credentials::ApiKey { .. } => f.write_str("ApiKey(<redacted>)"),
            Credentials::BearerToken { .. } => f.write_str("BearerToken(<redacted>)"),
        }
    }
}

/// Configuration for one service client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    /// API version date (`YYYY-MM-DD`) for date-versioned services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Headers added to every request (e.g. `X-Watson-Learning-Opt-Out`).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub default_headers: HashMap<String, String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_url: None,
            version: None,
            credentials: Credentials::NoAuth,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_headers: HashMap::new(),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Parse a YAML document such as:
    ///
    /// ```yaml
    /// service_url: https://api.us-south.speech-to-text.watson.cloud.ibm.com
    /// credentials:
    ///   type: api_key
    ///   apikey: my-key
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid service configuration: {}", e),
                ErrorContext::new().with_source("service_config"),
            )
        })
    }

    /// Read `<SERVICE>_*` variables, then fall back to the OS keyring for an API key.
    pub fn from_env(service_name: &str) -> Self {
        Self::from_lookup(
            service_name,
            |key| std::env::var(key).ok(),
            keyring_api_key,
        )
    }

    /// Same as [`from_env`](Self::from_env) with injectable sources.
    pub fn from_lookup(
        service_name: &str,
        env: impl Fn(&str) -> Option<String>,
        keyring: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let prefix = service_name.to_uppercase();
        let var = |suffix: &str| {
            env(&format!("{}_{}", prefix, suffix)).filter(|v| !v.trim().is_empty())
        };

        let auth_type = var("AUTH_TYPE").map(|t| t.to_lowercase());
        let credentials = match auth_type.as_deref() {
            Some("noauth") => Credentials::NoAuth,
            Some("bearertoken") => var("BEARER_TOKEN")
                .map(Credentials::bearer_token)
                .unwrap_or_default(),
            _ => var("APIKEY")
                .or_else(|| var("IAM_APIKEY"))
                .or_else(|| keyring(&service_name.to_lowercase()))
                .map(Credentials::api_key)
                .unwrap_or_default(),
        };

        let timeout_secs = env("WATSON_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            service_url: var("URL"),
            version: None,
            credentials,
            timeout_secs,
            default_headers: HashMap::new(),
        }
    }
}

fn keyring_api_key(user: &str) -> Option<String> {
    Entry::new(KEYRING_SERVICE, user)
        .ok()
        .and_then(|entry| entry.get_password().ok())
}
