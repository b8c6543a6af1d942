//! Request-shape tests: options rendered by a ServiceClient into recorded requests.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use watson_sdk::model::RequestBody;
use watson_sdk::transport::{Dispatcher, ServiceRequest, ServiceResponse};
use watson_sdk::{Error, ServiceClient};

/// Records every request and answers with a canned response.
struct RecordingDispatcher {
    requests: Mutex<Vec<ServiceRequest>>,
    status: u16,
    body: &'static str,
}

impl RecordingDispatcher {
    fn replying(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            status,
            body,
        })
    }

    fn last(&self) -> ServiceRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was dispatched")
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: ServiceRequest) -> watson_sdk::Result<ServiceResponse> {
        self.requests.lock().unwrap().push(request);
        if (200..300).contains(&self.status) {
            Ok(ServiceResponse::new(self.status, self.body))
        } else {
            Err(Error::remote(self.status, self.body))
        }
    }
}

#[cfg(feature = "speech-to-text")]
mod speech_to_text {
    use super::*;
    use watson_sdk::model::HttpMethod;
    use watson_sdk::speech_to_text::{
        AddWordOptions, BaseModelName, CreateLanguageModelOptions, ListLanguageModelsOptions,
        SpeechToText,
    };

    fn client(dispatcher: Arc<RecordingDispatcher>) -> SpeechToText {
        SpeechToText::new(
            SpeechToText::builder()
                .service_url("https://stt.example.test/instances/abc/")
                .header("X-Watson-Learning-Opt-Out", "true")
                .dispatcher(dispatcher)
                .build()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn add_word_encodes_path_segments() {
        let dispatcher = RecordingDispatcher::replying(201, "");
        let stt = client(dispatcher.clone());

        let options = AddWordOptions::builder()
            .customization_id("cust-1")
            .word_name("HHonors/2")
            .add_sounds_like("hilton honors")
            .display_as("HHonors")
            .build()
            .unwrap();
        stt.add_word(options).await.unwrap();

        let request = dispatcher.last();
        assert_eq!(request.operation, "AddWordOptions");
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(
            request.url.as_str(),
            "https://stt.example.test/instances/abc/v1/customizations/cust-1/words/HHonors%2F2"
        );
        assert_eq!(request.header("x-watson-learning-opt-out"), Some("true"));
        assert!(request.header("X-Request-ID").is_some());
        assert_eq!(
            request.body,
            RequestBody::Json(json!({
                "sounds_like": ["hilton honors"],
                "display_as": "HHonors"
            }))
        );
    }

    #[tokio::test]
    async fn unversioned_service_sends_only_option_query() {
        let dispatcher = RecordingDispatcher::replying(200, r#"{"customizations": []}"#);
        let stt = client(dispatcher.clone());

        let models = stt
            .list_language_models(
                ListLanguageModelsOptions::builder()
                    .language("en-US")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(models.customizations().is_empty());
        assert_eq!(dispatcher.last().url.query(), Some("language=en-US"));

        stt.list_language_models(ListLanguageModelsOptions::builder().build().unwrap())
            .await
            .unwrap();
        assert_eq!(dispatcher.last().url.query(), None);
    }

    #[tokio::test]
    async fn create_language_model_decodes_response() {
        let dispatcher = RecordingDispatcher::replying(
            201,
            r#"{"customization_id": "74f4807e-b5ff-4866-824e-6bba1a84fe96"}"#,
        );
        let stt = client(dispatcher.clone());

        let model = stt
            .create_language_model(
                CreateLanguageModelOptions::builder()
                    .name("Example model")
                    .base_model_name(BaseModelName::EnUsBroadbandModel)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(model.customization_id(), "74f4807e-b5ff-4866-824e-6bba1a84fe96");
        assert_eq!(
            dispatcher.last().body,
            RequestBody::Json(json!({
                "name": "Example model",
                "base_model_name": "en-US_BroadbandModel"
            }))
        );
    }

    #[tokio::test]
    async fn remote_errors_surface_unchanged() {
        let dispatcher = RecordingDispatcher::replying(404, "Customization not found");
        let stt = client(dispatcher);

        let err = stt
            .add_word(
                AddWordOptions::builder()
                    .customization_id("missing")
                    .word_name("IEEE")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Remote { status: 404, .. }));
        assert!(!err.is_retryable());
    }
}

#[cfg(feature = "tone-analyzer")]
mod tone_analyzer {
    use super::*;
    use watson_sdk::tone_analyzer::{Tone, ToneAnalyzer, ToneOptions};

    #[tokio::test]
    async fn versioned_service_puts_version_first() {
        let dispatcher = RecordingDispatcher::replying(
            200,
            r#"{"document_tone": {"tones": [{"score": 0.6, "tone_id": "analytical", "tone_name": "Analytical"}]}}"#,
        );
        let tone = ToneAnalyzer::new(
            ToneAnalyzer::builder()
                .version("2017-09-21")
                .dispatcher(dispatcher.clone())
                .build()
                .unwrap(),
        );

        let analysis = tone
            .tone(
                ToneOptions::builder()
                    .text("We need to acknowledge and fix our sales challenges.")
                    .add_tone(Tone::Emotion)
                    .add_tone(Tone::Social)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            analysis.document_tone().tones().map(|t| t[0].tone_id()),
            Some("analytical")
        );

        let request = dispatcher.last();
        assert_eq!(
            request.url.as_str(),
            "https://api.us-south.tone-analyzer.watson.cloud.ibm.com/v3/tone?version=2017-09-21&tones=emotion%2Csocial"
        );
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[test]
    fn versioned_service_without_version_is_a_configuration_error() {
        let err = ToneAnalyzer::builder()
            .dispatcher(RecordingDispatcher::replying(200, "{}"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("version cannot be null"));
    }
}

#[cfg(feature = "personality-insights")]
mod personality_insights {
    use super::*;
    use watson_sdk::personality_insights::{PersonalityInsights, ProfileOptions};

    #[tokio::test]
    async fn profile_as_csv_asks_for_csv() {
        let dispatcher = RecordingDispatcher::replying(200, "big5_openness,big5_neuroticism\n0.9,0.2\n");
        let insights = PersonalityInsights::new(
            PersonalityInsights::builder()
                .version("2017-10-13")
                .dispatcher(dispatcher.clone())
                .build()
                .unwrap(),
        );

        let csv = insights
            .profile_as_csv(
                ProfileOptions::builder()
                    .html("<p>Call me Ishmael.</p>")
                    .csv_headers(true)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(csv.lines().count(), 2);

        let request = dispatcher.last();
        assert_eq!(request.header("Accept"), Some("text/csv"));
        assert_eq!(request.header("Content-Type"), Some("text/html"));
        assert_eq!(request.body, RequestBody::Text("<p>Call me Ishmael.</p>".to_string()));
        assert_eq!(
            request.url.query(),
            Some("version=2017-10-13&csv_headers=true")
        );
    }
}

#[cfg(feature = "assistant")]
mod assistant {
    use super::*;
    use watson_sdk::assistant::v2::{CreateSessionOptions, DeleteSessionOptions};
    use watson_sdk::assistant::AssistantV2;

    #[tokio::test]
    async fn session_lifecycle() {
        let dispatcher = RecordingDispatcher::replying(201, r#"{"session_id": "sess-9"}"#);
        let assistant = AssistantV2::new(
            ServiceClient::builder(watson_sdk::assistant::SERVICE)
                .version("2021-06-14")
                .dispatcher(dispatcher.clone())
                .build()
                .unwrap(),
        );

        let session = assistant
            .create_session(
                CreateSessionOptions::builder()
                    .assistant_id("asst-1")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(session.session_id(), "sess-9");
        assert_eq!(
            dispatcher.last().url.path(),
            "/v2/assistants/asst-1/sessions"
        );
        assert_eq!(dispatcher.last().body, RequestBody::Empty);

        assistant
            .delete_session(
                DeleteSessionOptions::builder()
                    .assistant_id("asst-1")
                    .session_id(session.session_id())
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            dispatcher.last().url.path(),
            "/v2/assistants/asst-1/sessions/sess-9"
        );
    }
}
