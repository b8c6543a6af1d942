//! Tone Analyzer options and response models.

use crate::{options_model, wire_enum};
use serde_json::Value;

wire_enum! {
    pub enum ToneContentType {
        ApplicationJson => "application/json",
        TextPlain => "text/plain",
        TextHtml => "text/html",
    }
}

wire_enum! {
    /// Tone categories for the general-purpose endpoint.
    pub enum Tone {
        Emotion => "emotion",
        Language => "language",
        Social => "social",
    }
}

wire_enum! {
    /// Language of the input; only English and French are analyzed.
    pub enum ContentLanguage {
        En => "en",
        Fr => "fr",
    }
}

wire_enum! {
    pub enum AcceptLanguage {
        Ar => "ar",
        De => "de",
        En => "en",
        Es => "es",
        Fr => "fr",
        It => "it",
        Ja => "ja",
        Ko => "ko",
        PtBr => "pt-br",
        ZhCn => "zh-cn",
        ZhTw => "zh-tw",
    }
}

options_model! {
    /// JSON input for the general-purpose endpoint.
    pub struct ToneInput => ToneInputBuilder
    {
        text: String [required, body "text"],
    }
}

options_model! {
    /// Analyzes the tone of a document and its sentences.
    pub struct ToneOptions => ToneOptionsBuilder;
    Post "/v3/tone"
    {
        tone_input: ToneInput [managed, payload "tone_input"],
        body: String [managed, raw "body"],
        content_type: ToneContentType [optional, header "Content-Type"],
        /// Analyze each sentence as well as the whole document.
        sentences: bool [optional, query "sentences"],
        tones: Vec<Tone> [list(add_tone: Tone), query "tones"],
        content_language: ContentLanguage [optional, header "Content-Language"],
        accept_language: AcceptLanguage [optional, header "Accept-Language"],
    }
}

impl ToneOptionsBuilder {
    /// JSON input; replaces any HTML body.
    pub fn tone_input(mut self, input: ToneInput) -> Self {
        self.tone_input = Some(input);
        self.body = None;
        self.content_type(ToneContentType::ApplicationJson)
    }

    /// Plain-text input, sent as a JSON [`ToneInput`].
    ///
    /// The text is checked by `build()` like any required field.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.tone_input(ToneInput { text: text.into() })
    }

    /// HTML input, sent as the raw request body; replaces any JSON input.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.body = Some(html.into());
        self.tone_input = None;
        self.content_type(ToneContentType::TextHtml)
    }
}

options_model! {
    /// One utterance in a conversation.
    pub struct Utterance => UtteranceBuilder
    {
        text: String [required, body "text"],
        /// Speaker, e.g. `customer` or `agent`.
        user: String [optional, body "user"],
    }
}

options_model! {
    /// Analyzes customer-engagement tones of a conversation.
    pub struct ToneChatOptions => ToneChatOptionsBuilder;
    Post "/v3/tone_chat"
    {
        utterances: Vec<Utterance> [required(add_utterance: Utterance), body "utterances"],
        content_language: ContentLanguage [optional, header "Content-Language"],
        accept_language: AcceptLanguage [optional, header "Accept-Language"],
    }
}

options_model! {
    pub struct ToneScore => ToneScoreBuilder
    {
        score: f64 [required, body "score"],
        tone_id: String [required, body "tone_id"],
        tone_name: String [required, body "tone_name"],
    }
}

options_model! {
    pub struct DocumentAnalysis => DocumentAnalysisBuilder
    {
        tones: Vec<ToneScore> [list(add_tone: ToneScore), body "tones"],
        /// Category-grouped scores, returned when no `tones` filter is given.
        tone_categories: Vec<Value> [list(add_tone_category: Value), body "tone_categories"],
        warning: String [optional, body "warning"],
    }
}

options_model! {
    pub struct SentenceAnalysis => SentenceAnalysisBuilder
    {
        sentence_id: i64 [required, body "sentence_id"],
        text: String [required, body "text"],
        tones: Vec<ToneScore> [list(add_tone: ToneScore), body "tones"],
        input_from: i64 [optional, body "input_from"],
        input_to: i64 [optional, body "input_to"],
    }
}

options_model! {
    pub struct ToneAnalysis => ToneAnalysisBuilder
    {
        document_tone: DocumentAnalysis [required, body "document_tone"],
        sentences_tone: Vec<SentenceAnalysis> [list(add_sentences_tone: SentenceAnalysis), body "sentences_tone"],
    }
}

options_model! {
    pub struct UtteranceAnalysis => UtteranceAnalysisBuilder
    {
        utterance_id: i64 [required, body "utterance_id"],
        utterance_text: String [required, body "utterance_text"],
        tones: Vec<ToneScore> [required(add_tone: ToneScore), body "tones"],
        error: String [optional, body "error"],
    }
}

options_model! {
    pub struct UtteranceAnalyses => UtteranceAnalysesBuilder
    {
        utterances_tone: Vec<UtteranceAnalysis> [required(add_utterances_tone: UtteranceAnalysis), body "utterances_tone"],
        warning: String [optional, body "warning"],
    }
}
