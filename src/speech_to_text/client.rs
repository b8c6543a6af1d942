//! Speech to Text service client.

use super::types::{
    AddWordOptions, AddWordsOptions, CreateLanguageModelOptions, DeleteLanguageModelOptions,
    DeleteWordOptions, GetLanguageModelOptions, GetModelOptions, LanguageModel, LanguageModels,
    ListLanguageModelsOptions, ListModelsOptions, SpeechModel, SpeechModels,
};
use crate::client::{ServiceClient, ServiceClientBuilder, ServiceSpec};
use crate::Result;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "SPEECH_TO_TEXT",
    default_url: "https://api.us-south.speech-to-text.watson.cloud.ibm.com",
    versioned: false,
};

/// Client for the Speech to Text v1 model and customization APIs.
#[derive(Debug)]
pub struct SpeechToText {
    client: ServiceClient,
}

impl SpeechToText {
    pub fn builder() -> ServiceClientBuilder {
        ServiceClient::builder(SERVICE)
    }

    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    /// Configure from `SPEECH_TO_TEXT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Self::builder().from_env().build()?))
    }

    pub fn client(&self) -> &ServiceClient {
        &self.client
    }

    pub async fn list_models(&self, options: ListModelsOptions) -> Result<SpeechModels> {
        self.client.invoke_json(&options).await
    }

    pub async fn get_model(&self, options: GetModelOptions) -> Result<SpeechModel> {
        self.client.invoke_json(&options).await
    }

    pub async fn create_language_model(
        &self,
        options: CreateLanguageModelOptions,
    ) -> Result<LanguageModel> {
        self.client.invoke_json(&options).await
    }

    pub async fn list_language_models(
        &self,
        options: ListLanguageModelsOptions,
    ) -> Result<LanguageModels> {
        self.client.invoke_json(&options).await
    }

    pub async fn get_language_model(&self, options: GetLanguageModelOptions) -> Result<LanguageModel> {
        self.client.invoke_json(&options).await
    }

    pub async fn delete_language_model(&self, options: DeleteLanguageModelOptions) -> Result<()> {
        self.client.invoke(&options).await.map(|_| ())
    }

    pub async fn add_word(&self, options: AddWordOptions) -> Result<()> {
        self.client.invoke(&options).await.map(|_| ())
    }

    pub async fn add_words(&self, options: AddWordsOptions) -> Result<()> {
        self.client.invoke(&options).await.map(|_| ())
    }

    pub async fn delete_word(&self, options: DeleteWordOptions) -> Result<()> {
        self.client.invoke(&options).await.map(|_| ())
    }
}
