//! Assistant service clients.

use super::v1::{
    CreateValueOptions, DeleteValueOptions, EntityValue, GetValueOptions, ListValuesOptions,
    UpdateValueOptions, ValueCollection,
};
use super::v2::{
    CreateSessionOptions, DeleteSessionOptions, MessageOptions, MessageResponse, SessionResponse,
};
use crate::client::{ServiceClient, ServiceClientBuilder, ServiceSpec};
use crate::Result;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "ASSISTANT",
    default_url: "https://api.us-south.assistant.watson.cloud.ibm.com",
    versioned: true,
};

/// Workspace-level (v1) Assistant API. Requires a version date.
#[derive(Debug)]
pub struct AssistantV1 {
    client: ServiceClient,
}

impl AssistantV1 {
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

    pub async fn create_value(&self, options: CreateValueOptions) -> Result<EntityValue> {
        self.client.invoke_json(&options).await
    }

    pub async fn get_value(&self, options: GetValueOptions) -> Result<EntityValue> {
        self.client.invoke_json(&options).await
    }

    pub async fn update_value(&self, options: UpdateValueOptions) -> Result<EntityValue> {
        self.client.invoke_json(&options).await
    }

    pub async fn delete_value(&self, options: DeleteValueOptions) -> Result<()> {
        self.client.invoke(&options).await.map(|_| ())
    }

    pub async fn list_values(&self, options: ListValuesOptions) -> Result<ValueCollection> {
        self.client.invoke_json(&options).await
    }
}

/// Session-based (v2) Assistant API. Requires a version date.
#[derive(Debug)]
pub struct AssistantV2 {
    client: ServiceClient,
}

impl AssistantV2 {
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

    pub async fn create_session(&self, options: CreateSessionOptions) -> Result<SessionResponse> {
        self.client.invoke_json(&options).await
    }

    pub async fn delete_session(&self, options: DeleteSessionOptions) -> Result<()> {
        self.client.invoke(&options).await.map(|_| ())
    }

    pub async fn message(&self, options: MessageOptions) -> Result<MessageResponse> {
        self.client.invoke_json(&options).await
    }
}
