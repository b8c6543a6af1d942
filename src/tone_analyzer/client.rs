//! Tone Analyzer service client.

use super::types::{ToneAnalysis, ToneChatOptions, ToneOptions, UtteranceAnalyses};
use crate::client::{ServiceClient, ServiceClientBuilder, ServiceSpec};
use crate::Result;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "TONE_ANALYZER",
    default_url: "https://api.us-south.tone-analyzer.watson.cloud.ibm.com",
    versioned: true,
};

#[derive(Debug)]
pub struct ToneAnalyzer {
    client: ServiceClient,
}

impl ToneAnalyzer {
    pub fn builder() -> ServiceClientBuilder {
        ServiceClient::builder(SERVICE)
    }

    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    pub fn from_env(version: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Self::builder().from_env().version(version).build()?))
    }

    pub fn client(&self) -> &ServiceClient {
        &self.client
    }

    pub async fn tone(&self, options: ToneOptions) -> Result<ToneAnalysis> {
        self.client.invoke_json(&options).await
    }

    pub async fn tone_chat(&self, options: ToneChatOptions) -> Result<UtteranceAnalyses> {
        self.client.invoke_json(&options).await
    }
}
