//! Natural Language Understanding v1: text analysis and custom model management.

mod client;
mod types;

pub use client::{NaturalLanguageUnderstanding, SERVICE};
pub use types::{
    AnalysisResults, AnalysisResultsBuilder, AnalyzeOptions, AnalyzeOptionsBuilder,
    CategoriesOptions, CategoriesOptionsBuilder, ClassificationsOptions,
    ClassificationsOptionsBuilder, ConceptsOptions, ConceptsOptionsBuilder, DeleteModelOptions,
    DeleteModelOptionsBuilder, DeleteModelResults, DeleteModelResultsBuilder, EmotionOptions,
    EmotionOptionsBuilder, EntitiesOptions, EntitiesOptionsBuilder, Features, FeaturesBuilder,
    KeywordsOptions, KeywordsOptionsBuilder, ListModelsOptions, ListModelsOptionsBuilder,
    ListModelsResults, ListModelsResultsBuilder, SentimentOptions, SentimentOptionsBuilder,
};
