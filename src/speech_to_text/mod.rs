//! Speech to Text v1: speech models and custom language models.

mod client;
mod types;

pub use client::{SpeechToText, SERVICE};
pub use types::{
    AddWordOptions, AddWordOptionsBuilder, AddWordsOptions, AddWordsOptionsBuilder,
    BaseModelName, CreateLanguageModelOptions, CreateLanguageModelOptionsBuilder, CustomWord,
    CustomWordBuilder, DeleteLanguageModelOptions, DeleteLanguageModelOptionsBuilder,
    DeleteWordOptions, DeleteWordOptionsBuilder, GetLanguageModelOptions,
    GetLanguageModelOptionsBuilder, GetModelOptions, GetModelOptionsBuilder, LanguageModel,
    LanguageModelBuilder, LanguageModels, LanguageModelsBuilder, ListLanguageModelsOptions,
    ListLanguageModelsOptionsBuilder, ListModelsOptions, ListModelsOptionsBuilder, SpeechModel,
    SpeechModelBuilder, SpeechModels, SpeechModelsBuilder, SupportedFeatures,
    SupportedFeaturesBuilder,
};
