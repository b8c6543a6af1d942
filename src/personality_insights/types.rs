//! Personality Insights options and profile models.

use crate::{options_model, wire_enum};

wire_enum! {
    /// Media type of the profile request body.
    pub enum ProfileContentType {
        ApplicationJson => "application/json",
        TextHtml => "text/html",
        TextPlain => "text/plain",
    }
}

wire_enum! {
    /// Language of the input text.
    pub enum ContentLanguage {
        Ar => "ar",
        En => "en",
        Es => "es",
        Ja => "ja",
        Ko => "ko",
    }
}

wire_enum! {
    /// Language for trait names and descriptions in the response.
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

wire_enum! {
    pub enum ContentItemLanguage {
        Ar => "ar",
        En => "en",
        Es => "es",
        Ja => "ja",
        Ko => "ko",
    }
}

wire_enum! {
    pub enum ContentItemContentType {
        TextPlain => "text/plain",
        TextHtml => "text/html",
    }
}

options_model! {
    /// One piece of authored content, e.g. a post or a message.
    pub struct ContentItem => ContentItemBuilder
    {
        content: String [required, body "content"],
        id: String [optional, body "id"],
        /// Creation time in milliseconds since the UNIX epoch.
        created: i64 [optional, body "created"],
        updated: i64 [optional, body "updated"],
        contenttype: ContentItemContentType [optional, body "contenttype"],
        language: ContentItemLanguage [optional, body "language"],
        parentid: String [optional, body "parentid"],
        reply: bool [optional, body "reply"],
        forward: bool [optional, body "forward"],
    }
}

options_model! {
    pub struct Content => ContentBuilder
    {
        content_items: Vec<ContentItem> [required(add_content_item: ContentItem), body "contentItems"],
    }
}

options_model! {
    /// Generates a personality profile for the author of the input.
    ///
    /// Supply the input with [`text`](ProfileOptionsBuilder::text),
    /// [`html`](ProfileOptionsBuilder::html) or
    /// [`content`](ProfileOptionsBuilder::content).
    pub struct ProfileOptions => ProfileOptionsBuilder;
    Post "/v3/profile"
    {
        content: Content [managed, payload "content"],
        body: String [managed, raw "body"],
        content_type: ProfileContentType [optional, header "Content-Type"],
        content_language: ContentLanguage [optional, header "Content-Language"],
        accept_language: AcceptLanguage [optional, header "Accept-Language"],
        raw_scores: bool [optional, query "raw_scores"],
        /// Include a header row in CSV output.
        csv_headers: bool [optional, query "csv_headers"],
        consumption_preferences: bool [optional, query "consumption_preferences"],
    }
}

impl ProfileOptionsBuilder {
    /// JSON content items; replaces any text or HTML body.
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self.body = None;
        self.content_type(ProfileContentType::ApplicationJson)
    }

    /// Plain-text input; replaces any JSON content.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.raw_body(text.into(), ProfileContentType::TextPlain)
    }

    /// HTML input; tags are stripped by the service.
    pub fn html(self, html: impl Into<String>) -> Self {
        self.raw_body(html.into(), ProfileContentType::TextHtml)
    }

    fn raw_body(mut self, body: String, content_type: ProfileContentType) -> Self {
        self.body = Some(body);
        self.content = None;
        self.content_type(content_type)
    }
}

options_model! {
    /// A personality, needs or values characteristic.
    pub struct Trait => TraitBuilder
    {
        trait_id: String [required, body "trait_id"],
        name: String [required, body "name"],
        /// `personality`, `needs` or `values`.
        category: String [required, body "category"],
        percentile: f64 [required, body "percentile"],
        raw_score: f64 [optional, body "raw_score"],
        significant: bool [optional, body "significant"],
        children: Vec<Trait> [list(add_child: Trait), body "children"],
    }
}

options_model! {
    pub struct Behavior => BehaviorBuilder
    {
        trait_id: String [required, body "trait_id"],
        name: String [required, body "name"],
        category: String [required, body "category"],
        /// Share of content created in this time slot.
        percentage: f64 [required, body "percentage"],
    }
}

options_model! {
    pub struct ConsumptionPreferences => ConsumptionPreferencesBuilder
    {
        consumption_preference_id: String [required, body "consumption_preference_id"],
        name: String [required, body "name"],
        /// `0.0` unlikely, `0.5` neutral, `1.0` likely.
        score: f64 [required, body "score"],
    }
}

options_model! {
    pub struct ConsumptionPreferencesCategory => ConsumptionPreferencesCategoryBuilder
    {
        consumption_preference_category_id: String [required, body "consumption_preference_category_id"],
        name: String [required, body "name"],
        consumption_preferences: Vec<ConsumptionPreferences> [required(add_consumption_preferences: ConsumptionPreferences), body "consumption_preferences"],
    }
}

options_model! {
    pub struct Warning => WarningBuilder
    {
        warning_id: String [required, body "warning_id"],
        message: String [required, body "message"],
    }
}

options_model! {
    pub struct Profile => ProfileBuilder
    {
        processed_language: String [required, body "processed_language"],
        word_count: i64 [required, body "word_count"],
        word_count_message: String [optional, body "word_count_message"],
        personality: Vec<Trait> [required(add_personality: Trait), body "personality"],
        needs: Vec<Trait> [required(add_needs: Trait), body "needs"],
        values: Vec<Trait> [required(add_values: Trait), body "values"],
        behavior: Vec<Behavior> [list(add_behavior: Behavior), body "behavior"],
        consumption_preferences: Vec<ConsumptionPreferencesCategory> [list(add_consumption_preferences: ConsumptionPreferencesCategory), body "consumption_preferences"],
        warnings: Vec<Warning> [required(add_warnings: Warning), body "warnings"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Operation, RequestBody};
    use serde_json::json;

    fn item() -> ContentItem {
        ContentItem::builder()
            .content("Call me Ishmael.")
            .language(ContentItemLanguage::En)
            .contenttype(ContentItemContentType::TextPlain)
            .created(1_447_639_154_000i64)
            .forward(false)
            .reply(false)
            .build()
            .unwrap()
    }

    #[test]
    fn content_uses_camel_case_wire_name() {
        let content = Content::builder().add_content_item(item()).build().unwrap();
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value["contentItems"][0]["content"], json!("Call me Ishmael."));
        assert_eq!(value["contentItems"][0]["contenttype"], json!("text/plain"));
        assert!(value["contentItems"][0].get("parentid").is_none());
    }

    #[test]
    fn content_requires_items() {
        let err = Content::builder().build().unwrap_err();
        assert_eq!(err.missing_field(), Some("content_items"));
        let err = ContentItem::builder().content("").build().unwrap_err();
        assert!(err.to_string().contains("content cannot be empty"));
    }

    #[test]
    fn text_input_becomes_plain_text_body() {
        let options = ProfileOptions::builder()
            .text("Call me Ishmael.")
            .csv_headers(true)
            .build()
            .unwrap();
        assert_eq!(options.body(), Some("Call me Ishmael."));
        assert_eq!(options.content_type(), Some(ProfileContentType::TextPlain));

        let parts = options.to_request().unwrap();
        assert_eq!(parts.body, RequestBody::Text("Call me Ishmael.".to_string()));
        assert_eq!(parts.header("content-type"), Some("text/plain"));
        assert_eq!(parts.query_value("csv_headers"), Some("true"));
    }

    #[test]
    fn content_input_becomes_json_payload() {
        let content = Content::builder().add_content_item(item()).build().unwrap();
        let options = ProfileOptions::builder()
            .content(content.clone())
            .consumption_preferences(true)
            .raw_scores(true)
            .accept_language(AcceptLanguage::PtBr)
            .build()
            .unwrap();
        let parts = options.to_request().unwrap();

        assert_eq!(
            parts.body,
            RequestBody::Json(serde_json::to_value(&content).unwrap())
        );
        assert_eq!(parts.header("Content-Type"), Some("application/json"));
        assert_eq!(parts.header("Accept-Language"), Some("pt-br"));
        assert_eq!(parts.query_value("raw_scores"), Some("true"));
        assert_eq!(parts.query_value("consumption_preferences"), Some("true"));
        // Payload-located fields are not part of the options' own wire form.
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({}));
    }

    #[test]
    fn each_input_setter_replaces_the_previous_body() {
        let content = Content::builder().add_content_item(item()).build().unwrap();

        let options = ProfileOptions::builder()
            .text("Call me Ishmael.")
            .content(content.clone())
            .build()
            .unwrap();
        assert_eq!(options.body(), None);
        let parts = options.to_request().unwrap();
        assert_eq!(parts.body, RequestBody::Json(serde_json::to_value(&content).unwrap()));
        assert_eq!(parts.header("Content-Type"), Some("application/json"));

        let options = ProfileOptions::builder()
            .content(content)
            .html("<p>Call me Ishmael.</p>")
            .build()
            .unwrap();
        assert!(options.content().is_none());
        let parts = options.to_request().unwrap();
        assert_eq!(parts.body, RequestBody::Text("<p>Call me Ishmael.</p>".to_string()));
        assert_eq!(parts.header("Content-Type"), Some("text/html"));
    }

    #[test]
    fn content_loads_from_fixture_json() {
        let content: Content = serde_json::from_value(json!({
            "contentItems": [
                { "content": "Wow, I liked @TheRock before , now I really SEE how special he is.",
                  "contenttype": "text/plain",
                  "created": 1447639154000i64,
                  "id": "666073008692314113",
                  "language": "en" }
            ]
        }))
        .unwrap();
        let first = &content.content_items()[0];
        assert_eq!(first.id(), Some("666073008692314113"));
        assert_eq!(first.language(), Some(ContentItemLanguage::En));
    }

    #[test]
    fn profile_deserializes_nested_traits() {
        let profile: Profile = serde_json::from_value(json!({
            "processed_language": "en",
            "word_count": 1365,
            "personality": [{
                "trait_id": "big5_openness",
                "name": "Openness",
                "category": "personality",
                "percentile": 0.99,
                "raw_score": 0.86,
                "children": [{
                    "trait_id": "facet_adventurousness",
                    "name": "Adventurousness",
                    "category": "personality",
                    "percentile": 0.78
                }]
            }],
            "needs": [],
            "values": [],
            "warnings": []
        }))
        .unwrap();

        assert_eq!(profile.word_count(), 1365);
        let openness = &profile.personality()[0];
        assert_eq!(openness.raw_score(), Some(0.86));
        assert_eq!(openness.children().map(|c| c[0].name()), Some("Adventurousness"));
        assert_eq!(profile.behavior(), None);
    }
}
