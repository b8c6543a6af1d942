//! Natural Language Understanding options and response models.

use crate::options_model;
use serde_json::Value;

options_model! {
    /// Returns text classifications using a custom classifications model.
    pub struct ClassificationsOptions => ClassificationsOptionsBuilder
    {
        /// ID of the classifications model; defaults to the service's own.
        model: String [optional, body "model"],
    }
}

options_model! {
    pub struct CategoriesOptions => CategoriesOptionsBuilder
    {
        explanation: bool [optional, body "explanation"],
        /// Maximum number of categories, at most 10.
        limit: i64 [optional, body "limit"],
        model: String [optional, body "model"],
    }
}

options_model! {
    pub struct ConceptsOptions => ConceptsOptionsBuilder
    {
        limit: i64 [optional, body "limit"],
    }
}

options_model! {
    pub struct EmotionOptions => EmotionOptionsBuilder
    {
        document: bool [optional, body "document"],
        /// Target strings, found in the text, to analyze emotion for.
        targets: Vec<String> [list(add_target: String), body "targets"],
    }
}

options_model! {
    pub struct EntitiesOptions => EntitiesOptionsBuilder
    {
        limit: i64 [optional, body "limit"],
        mentions: bool [optional, body "mentions"],
        model: String [optional, body "model"],
        sentiment: bool [optional, body "sentiment"],
        emotion: bool [optional, body "emotion"],
    }
}

options_model! {
    pub struct KeywordsOptions => KeywordsOptionsBuilder
    {
        limit: i64 [optional, body "limit"],
        sentiment: bool [optional, body "sentiment"],
        emotion: bool [optional, body "emotion"],
    }
}

options_model! {
    pub struct SentimentOptions => SentimentOptionsBuilder
    {
        document: bool [optional, body "document"],
        targets: Vec<String> [list(add_target: String), body "targets"],
    }
}

options_model! {
    /// Which analyses to run. At least one feature should be set.
    pub struct Features => FeaturesBuilder
    {
        classifications: ClassificationsOptions [optional, body "classifications"],
        concepts: ConceptsOptions [optional, body "concepts"],
        emotion: EmotionOptions [optional, body "emotion"],
        entities: EntitiesOptions [optional, body "entities"],
        keywords: KeywordsOptions [optional, body "keywords"],
        sentiment: SentimentOptions [optional, body "sentiment"],
        categories: CategoriesOptions [optional, body "categories"],
    }
}

options_model! {
    /// Analyzes text, HTML or a public web page.
    pub struct AnalyzeOptions => AnalyzeOptionsBuilder;
    Post "/v1/analyze"
    {
        features: Features [required, body "features"],
        text: String [optional, body "text"],
        html: String [optional, body "html"],
        url: String [optional, body "url"],
        /// Remove website elements such as links and ads.
        clean: bool [optional, body "clean"],
        xpath: String [optional, body "xpath"],
        fallback_to_raw: bool [optional, body "fallback_to_raw"],
        return_analyzed_text: bool [optional, body "return_analyzed_text"],
        /// ISO 639-1 code; detected automatically when unset.
        language: String [optional, body "language"],
        limit_text_characters: i64 [optional, body "limit_text_characters"],
    }
}

options_model! {
    pub struct ListModelsOptions => ListModelsOptionsBuilder;
    Get "/v1/models"
    {}
}

options_model! {
    pub struct DeleteModelOptions => DeleteModelOptionsBuilder;
    Delete "/v1/models/{model_id}"
    {
        model_id: String [required, path "model_id"],
    }
}

options_model! {
    /// Results of an analysis. Per-feature sections are kept as raw JSON.
    pub struct AnalysisResults => AnalysisResultsBuilder
    {
        language: String [optional, body "language"],
        analyzed_text: String [optional, body "analyzed_text"],
        retrieved_url: String [optional, body "retrieved_url"],
        usage: Value [optional, body "usage"],
        concepts: Value [optional, body "concepts"],
        entities: Value [optional, body "entities"],
        keywords: Value [optional, body "keywords"],
        categories: Value [optional, body "categories"],
        classifications: Value [optional, body "classifications"],
        emotion: Value [optional, body "emotion"],
        sentiment: Value [optional, body "sentiment"],
    }
}

options_model! {
    pub struct ListModelsResults => ListModelsResultsBuilder
    {
        models: Vec<Value> [list(add_model: Value), body "models"],
    }
}

options_model! {
    pub struct DeleteModelResults => DeleteModelResultsBuilder
    {
        deleted: String [optional, body "deleted"],
    }
}
