//! Natural Language Understanding service client.

use super::types::{
    AnalysisResults, AnalyzeOptions, DeleteModelOptions, DeleteModelResults, ListModelsOptions,
    ListModelsResults,
};
use crate::client::{ServiceClient, ServiceClientBuilder, ServiceSpec};
use crate::Result;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "NATURAL_LANGUAGE_UNDERSTANDING",
    default_url: "https://api.us-south.natural-language-understanding.watson.cloud.ibm.com",
    versioned: true,
};

#[derive(Debug)]
pub struct NaturalLanguageUnderstanding {
    client: ServiceClient,
}

impl NaturalLanguageUnderstanding {
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

    pub async fn analyze(&self, options: AnalyzeOptions) -> Result<AnalysisResults> {
        self.client.invoke_json(&options).await
    }

    /// Lists custom models deployed to the instance.
    pub async fn list_models(&self, options: ListModelsOptions) -> Result<ListModelsResults> {
        self.client.invoke_json(&options).await
    }

    pub async fn delete_model(&self, options: DeleteModelOptions) -> Result<DeleteModelResults> {
        self.client.invoke_json(&options).await
    }
}
