//! Builder contract across services: required fields, reuse, copy-and-rebuild,
//! wire-name serialization and validated deserialization.

#![cfg(feature = "full")]

use serde_json::json;
use std::collections::HashMap;
use watson_sdk::assistant::v1::{ListValuesOptions, ListValuesSort, UpdateValueOptions, ValueType};
use watson_sdk::assistant::v2::{MessageInput, MessageType, RuntimeEntity, RuntimeIntent};
use watson_sdk::natural_language_understanding::{
    AnalyzeOptions, CategoriesOptions, ConceptsOptions, Features,
};
use watson_sdk::personality_insights::{
    Content, ContentBuilder, ContentItem, ContentItemBuilder, ProfileOptions,
};
use watson_sdk::speech_to_text::{
    AddWordOptions, AddWordOptionsBuilder, AddWordsOptions, BaseModelName,
    CreateLanguageModelOptionsBuilder, CustomWord,
};
use watson_sdk::tone_analyzer::{ToneChatOptions, Utterance};
use watson_sdk::{ArgumentError, Error};

fn intent(name: &str) -> RuntimeIntent {
    RuntimeIntent::builder().intent(name).build().unwrap()
}

#[test]
fn send_message_scenario() {
    let input = MessageInput::builder()
        .message_type(MessageType::Text)
        .text("hello")
        .add_intent(intent("greeting"))
        .build()
        .unwrap();

    assert_eq!(input.message_type().unwrap().as_str(), "text");
    assert_eq!(input.text(), Some("hello"));
    assert_eq!(input.intents().unwrap(), &[intent("greeting")]);
    assert_eq!(input.intents().unwrap()[0].intent(), "greeting");
}

#[test]
fn add_custom_word_scenario() {
    let err = AddWordOptions::builder()
        .customization_id("cust-1")
        .build()
        .unwrap_err();
    match err {
        Error::InvalidArgument { reason, context } => {
            assert_eq!(reason, ArgumentError::MissingField { field: "word_name" });
            assert_eq!(context.field_path.as_deref(), Some("AddWordOptions.word_name"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn supplying_every_required_field_succeeds() {
    assert!(AddWordsOptions::builder()
        .customization_id("c")
        .add_word(CustomWord::builder().word("IEEE").build().unwrap())
        .build()
        .is_ok());
    assert!(ToneChatOptions::builder()
        .utterances(vec![Utterance::builder().text("hi").build().unwrap()])
        .build()
        .is_ok());
    assert!(AnalyzeOptions::builder()
        .features(Features::builder().build().unwrap())
        .build()
        .is_ok());
    assert!(Content::builder()
        .add_content_item(ContentItem::builder().content("text").build().unwrap())
        .build()
        .is_ok());
    assert!(ProfileOptions::builder().build().is_ok());
}

#[test]
fn builders_can_start_from_required_fields() {
    let options = AddWordOptionsBuilder::with_required("cust-1", "IEEE")
        .add_sounds_like("I. triple E.")
        .build()
        .unwrap();
    assert_eq!(options.customization_id(), "cust-1");
    assert_eq!(options.word_name(), "IEEE");
    assert_eq!(options.sounds_like(), Some(&["I. triple E.".to_string()][..]));

    let model = CreateLanguageModelOptionsBuilder::with_required(
        "First example language model",
        BaseModelName::EnUsBroadbandModel,
    )
    .description("First custom language model example")
    .build()
    .unwrap();
    assert_eq!(model.base_model_name(), BaseModelName::EnUsBroadbandModel);

    let item = ContentItemBuilder::with_required("Call me Ishmael.").build().unwrap();
    let content = ContentBuilder::with_required(vec![item.clone()]).build().unwrap();
    assert_eq!(content.content_items(), &[item]);

    let err = AddWordOptionsBuilder::with_required("cust-1", "").build().unwrap_err();
    assert_eq!(err.missing_field(), Some("word_name"));
}

#[test]
fn copy_and_rebuild_preserves_every_field() {
    let options = UpdateValueOptions::builder()
        .workspace_id("ws")
        .entity("beverage")
        .value("soda")
        .new_value("pop")
        .new_metadata(HashMap::from([("region".to_string(), json!("midwest"))]))
        .new_type(ValueType::Synonyms)
        .add_new_synonyms("soft drink")
        .append(true)
        .build()
        .unwrap();

    let rebuilt = options.new_builder().build().unwrap();
    assert_eq!(rebuilt, options);

    let changed = options.new_builder().append(false).build().unwrap();
    assert_ne!(changed, options);
    assert_eq!(changed.new_synonyms(), options.new_synonyms());
    assert_eq!(options.append(), Some(true));
}

#[test]
fn builder_reuse_and_try_from() {
    let builder = ListValuesOptions::builder()
        .workspace_id("ws")
        .entity("beverage")
        .sort(ListValuesSort::Value);
    let first = builder.build().unwrap();
    let second = ListValuesOptions::try_from(builder).unwrap();
    assert_eq!(first, second);
}

#[test]
fn built_options_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MessageInput>();
    assert_send_sync::<AnalyzeOptions>();
    assert_send_sync::<ProfileOptions>();
}

#[test]
fn nested_values_serialize_under_wire_names() {
    let features = Features::builder()
        .concepts(ConceptsOptions::builder().limit(5).build().unwrap())
        .categories(CategoriesOptions::builder().explanation(true).build().unwrap())
        .build()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&features).unwrap(),
        json!({ "concepts": { "limit": 5 }, "categories": { "explanation": true } })
    );
}

#[test]
fn wire_json_goes_through_validation() {
    let entity: RuntimeEntity = serde_json::from_value(json!({
        "entity": "sys-date",
        "location": [0, 8],
        "value": "2024-05-01",
        "confidence": 1.0
    }))
    .unwrap();
    assert_eq!(entity.value(), "2024-05-01");

    let err = serde_json::from_value::<RuntimeEntity>(json!({ "entity": "sys-date" })).unwrap_err();
    assert!(err.to_string().contains("value cannot be null"));

    let err = serde_json::from_value::<MessageInput>(json!({ "message_type": "voice" })).unwrap_err();
    assert!(err.is_data());
}

#[test]
fn wire_enums_reject_unknown_strings() {
    let err = "voice".parse::<MessageType>().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            reason: ArgumentError::UnknownValue { kind: "MessageType", .. },
            ..
        }
    ));
}
