//! Personality Insights service client.

use super::types::{Profile, ProfileOptions};
use crate::client::{ServiceClient, ServiceClientBuilder, ServiceSpec};
use crate::Result;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "PERSONALITY_INSIGHTS",
    default_url: "https://api.us-south.personality-insights.watson.cloud.ibm.com",
    versioned: true,
};

#[derive(Debug)]
pub struct PersonalityInsights {
    client: ServiceClient,
}

impl PersonalityInsights {
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

    pub async fn profile(&self, options: ProfileOptions) -> Result<Profile> {
        self.client.invoke_json(&options).await
    }

    /// Same analysis, returned as CSV text.
    pub async fn profile_as_csv(&self, options: ProfileOptions) -> Result<String> {
        let response = self
            .client
            .invoke_with_headers(&options, &[("Accept", "text/csv")])
            .await?;
        Ok(response.text())
    }
}
