//! Tone Analyzer v3: document tone and customer-engagement tone.

mod client;
mod types;

pub use client::{ToneAnalyzer, SERVICE};
pub use types::{
    AcceptLanguage, ContentLanguage, DocumentAnalysis, DocumentAnalysisBuilder, SentenceAnalysis,
    SentenceAnalysisBuilder, Tone, ToneAnalysis, ToneAnalysisBuilder, ToneChatOptions,
    ToneChatOptionsBuilder, ToneContentType, ToneInput, ToneInputBuilder, ToneOptions,
    ToneOptionsBuilder, ToneScore, ToneScoreBuilder, Utterance, UtteranceAnalyses,
    UtteranceAnalysesBuilder, UtteranceAnalysis, UtteranceAnalysisBuilder, UtteranceBuilder,
};
