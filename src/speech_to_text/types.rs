//! Speech to Text options and response models.

use crate::{options_model, wire_enum};

wire_enum! {
    /// Base model that a custom language model extends.
    pub enum BaseModelName {
        ArMsTelephony => "ar-MS_Telephony",
        DeDeBroadbandModel => "de-DE_BroadbandModel",
        DeDeNarrowbandModel => "de-DE_NarrowbandModel",
        DeDeTelephony => "de-DE_Telephony",
        EnAuBroadbandModel => "en-AU_BroadbandModel",
        EnAuNarrowbandModel => "en-AU_NarrowbandModel",
        EnAuTelephony => "en-AU_Telephony",
        EnGbBroadbandModel => "en-GB_BroadbandModel",
        EnGbNarrowbandModel => "en-GB_NarrowbandModel",
        EnGbTelephony => "en-GB_Telephony",
        EnInTelephony => "en-IN_Telephony",
        EnUsBroadbandModel => "en-US_BroadbandModel",
        EnUsMultimedia => "en-US_Multimedia",
        EnUsNarrowbandModel => "en-US_NarrowbandModel",
        EnUsShortFormNarrowbandModel => "en-US_ShortForm_NarrowbandModel",
        EnUsTelephony => "en-US_Telephony",
        EsArBroadbandModel => "es-AR_BroadbandModel",
        EsArNarrowbandModel => "es-AR_NarrowbandModel",
        EsClBroadbandModel => "es-CL_BroadbandModel",
        EsClNarrowbandModel => "es-CL_NarrowbandModel",
        EsCoBroadbandModel => "es-CO_BroadbandModel",
        EsCoNarrowbandModel => "es-CO_NarrowbandModel",
        EsEsBroadbandModel => "es-ES_BroadbandModel",
        EsEsNarrowbandModel => "es-ES_NarrowbandModel",
        EsEsTelephony => "es-ES_Telephony",
        EsMxBroadbandModel => "es-MX_BroadbandModel",
        EsMxNarrowbandModel => "es-MX_NarrowbandModel",
        EsPeBroadbandModel => "es-PE_BroadbandModel",
        EsPeNarrowbandModel => "es-PE_NarrowbandModel",
        FrCaBroadbandModel => "fr-CA_BroadbandModel",
        FrCaNarrowbandModel => "fr-CA_NarrowbandModel",
        FrCaTelephony => "fr-CA_Telephony",
        FrFrBroadbandModel => "fr-FR_BroadbandModel",
        FrFrMultimedia => "fr-FR_Multimedia",
        FrFrNarrowbandModel => "fr-FR_NarrowbandModel",
        FrFrTelephony => "fr-FR_Telephony",
        HiInTelephony => "hi-IN_Telephony",
        ItItBroadbandModel => "it-IT_BroadbandModel",
        ItItNarrowbandModel => "it-IT_NarrowbandModel",
        ItItTelephony => "it-IT_Telephony",
        JaJpBroadbandModel => "ja-JP_BroadbandModel",
        JaJpMultimedia => "ja-JP_Multimedia",
        JaJpNarrowbandModel => "ja-JP_NarrowbandModel",
        KoKrBroadbandModel => "ko-KR_BroadbandModel",
        KoKrMultimedia => "ko-KR_Multimedia",
        KoKrNarrowbandModel => "ko-KR_NarrowbandModel",
        KoKrTelephony => "ko-KR_Telephony",
        NlBeTelephony => "nl-BE_Telephony",
        NlNlBroadbandModel => "nl-NL_BroadbandModel",
        NlNlNarrowbandModel => "nl-NL_NarrowbandModel",
        PtBrBroadbandModel => "pt-BR_BroadbandModel",
        PtBrNarrowbandModel => "pt-BR_NarrowbandModel",
        PtBrTelephony => "pt-BR_Telephony",
    }
}

options_model! {
    /// Lists the speech models available for recognition.
    pub struct ListModelsOptions => ListModelsOptionsBuilder;
    Get "/v1/models"
    {}
}

options_model! {
    pub struct GetModelOptions => GetModelOptionsBuilder;
    Get "/v1/models/{model_id}"
    {
        model_id: String [required, path "model_id"],
    }
}

options_model! {
    /// Creates a custom language model on top of a base model.
    pub struct CreateLanguageModelOptions => CreateLanguageModelOptionsBuilder;
    Post "/v1/customizations"
    {
        /// User-defined name; unique names are recommended.
        name: String [required, body "name"],
        base_model_name: BaseModelName [required, body "base_model_name"],
        /// Dialect of the base model language, e.g. `es-LA` for Spanish models.
        dialect: String [optional, body "dialect"],
        description: String [optional, body "description"],
    }
}

options_model! {
    pub struct ListLanguageModelsOptions => ListLanguageModelsOptionsBuilder;
    Get "/v1/customizations"
    {
        /// Only return models for this language, e.g. `en-US`.
        language: String [optional, query "language"],
    }
}

options_model! {
    pub struct GetLanguageModelOptions => GetLanguageModelOptionsBuilder;
    Get "/v1/customizations/{customization_id}"
    {
        customization_id: String [required, path "customization_id"],
    }
}

options_model! {
    pub struct DeleteLanguageModelOptions => DeleteLanguageModelOptionsBuilder;
    Delete "/v1/customizations/{customization_id}"
    {
        customization_id: String [required, path "customization_id"],
    }
}

options_model! {
    /// Adds or replaces one custom word in a custom language model.
    pub struct AddWordOptions => AddWordOptionsBuilder;
    Put "/v1/customizations/{customization_id}/words/{word_name}"
    {
        customization_id: String [required, path "customization_id"],
        /// The word as it appears in the URL path.
        word_name: String [required, path "word_name"],
        /// Spelling of the word, when it differs from `word_name`.
        word: String [optional, body "word"],
        /// Up to five alternative pronunciations.
        sounds_like: Vec<String> [list(add_sounds_like: String), body "sounds_like"],
        /// Spelling used in transcripts.
        display_as: String [optional, body "display_as"],
    }
}

options_model! {
    /// One custom word for a bulk [`AddWordsOptions`] request.
    pub struct CustomWord => CustomWordBuilder
    {
        word: String [optional, body "word"],
        sounds_like: Vec<String> [list(add_sounds_like: String), body "sounds_like"],
        display_as: String [optional, body "display_as"],
    }
}

options_model! {
    pub struct AddWordsOptions => AddWordsOptionsBuilder;
    Post "/v1/customizations/{customization_id}/words"
    {
        customization_id: String [required, path "customization_id"],
        words: Vec<CustomWord> [required(add_word: CustomWord), body "words"],
    }
}

options_model! {
    pub struct DeleteWordOptions => DeleteWordOptionsBuilder;
    Delete "/v1/customizations/{customization_id}/words/{word_name}"
    {
        customization_id: String [required, path "customization_id"],
        word_name: String [required, path "word_name"],
    }
}

options_model! {
    /// Features that a speech model supports.
    pub struct SupportedFeatures => SupportedFeaturesBuilder
    {
        custom_language_model: bool [optional, body "custom_language_model"],
        speaker_labels: bool [optional, body "speaker_labels"],
        low_latency: bool [optional, body "low_latency"],
    }
}

options_model! {
    pub struct SpeechModel => SpeechModelBuilder
    {
        name: String [required, body "name"],
        language: String [optional, body "language"],
        /// Sampling rate in Hz.
        rate: i64 [optional, body "rate"],
        url: String [optional, body "url"],
        supported_features: SupportedFeatures [optional, body "supported_features"],
        description: String [optional, body "description"],
    }
}

options_model! {
    pub struct SpeechModels => SpeechModelsBuilder
    {
        models: Vec<SpeechModel> [required(add_model: SpeechModel), body "models"],
    }
}

options_model! {
    /// A custom language model as reported by the service.
    pub struct LanguageModel => LanguageModelBuilder
    {
        customization_id: String [required, body "customization_id"],
        created: String [optional, body "created"],
        updated: String [optional, body "updated"],
        language: String [optional, body "language"],
        dialect: String [optional, body "dialect"],
        versions: Vec<String> [list(add_version: String), body "versions"],
        owner: String [optional, body "owner"],
        name: String [optional, body "name"],
        description: String [optional, body "description"],
        base_model_name: String [optional, body "base_model_name"],
        /// `pending`, `ready`, `training`, `failed`, `upgrading` or `available`.
        status: String [optional, body "status"],
        progress: i64 [optional, body "progress"],
        error: String [optional, body "error"],
        warnings: String [optional, body "warnings"],
    }
}

options_model! {
    pub struct LanguageModels => LanguageModelsBuilder
    {
        customizations: Vec<LanguageModel> [required(add_customization: LanguageModel), body "customizations"],
    }
}
