//! Assistant v2 session and message options.

use crate::{options_model, wire_enum};
use serde_json::Value;
use std::collections::HashMap;

wire_enum! {
    pub enum MessageType {
        Text => "text",
        Search => "search",
    }
}

options_model! {
    /// An intent recognized in user input, or supplied by the caller to
    /// override recognition.
    pub struct RuntimeIntent => RuntimeIntentBuilder
    {
        intent: String [required, body "intent"],
        confidence: f64 [optional, body "confidence"],
    }
}

options_model! {
    /// An entity mention in user input.
    pub struct RuntimeEntity => RuntimeEntityBuilder
    {
        entity: String [required, body "entity"],
        /// Zero-based character offsets `[start, end)` of the mention.
        location: Vec<i64> [optional, body "location"],
        value: String [required, body "value"],
        confidence: f64 [optional, body "confidence"],
        metadata: HashMap<String, Value> [optional, body "metadata"],
    }
}

options_model! {
    pub struct MessageInputOptions => MessageInputOptionsBuilder
    {
        /// Restart the conversation from the beginning.
        restart: bool [optional, body "restart"],
        alternate_intents: bool [optional, body "alternate_intents"],
        debug: bool [optional, body "debug"],
        return_context: bool [optional, body "return_context"],
        export: bool [optional, body "export"],
    }
}

options_model! {
    /// User input for a message request.
    pub struct MessageInput => MessageInputBuilder
    {
        message_type: MessageType [optional, body "message_type"],
        /// At most 2048 characters.
        text: String [optional, body "text"],
        intents: Vec<RuntimeIntent> [list(add_intent: RuntimeIntent), body "intents"],
        entities: Vec<RuntimeEntity> [list(add_entity: RuntimeEntity), body "entities"],
        suggestion_id: String [optional, body "suggestion_id"],
        options: MessageInputOptions [optional, body "options"],
    }
}

options_model! {
    pub struct CreateSessionOptions => CreateSessionOptionsBuilder;
    Post "/v2/assistants/{assistant_id}/sessions"
    {
        assistant_id: String [required, path "assistant_id"],
    }
}

options_model! {
    pub struct DeleteSessionOptions => DeleteSessionOptionsBuilder;
    Delete "/v2/assistants/{assistant_id}/sessions/{session_id}"
    {
        assistant_id: String [required, path "assistant_id"],
        session_id: String [required, path "session_id"],
    }
}

options_model! {
    /// Sends user input to an assistant within a session.
    pub struct MessageOptions => MessageOptionsBuilder;
    Post "/v2/assistants/{assistant_id}/sessions/{session_id}/message"
    {
        assistant_id: String [required, path "assistant_id"],
        session_id: String [required, path "session_id"],
        input: MessageInput [optional, body "input"],
        /// Dialog and skill context; passed through untouched.
        context: Value [optional, body "context"],
    }
}

options_model! {
    pub struct SessionResponse => SessionResponseBuilder
    {
        session_id: String [required, body "session_id"],
    }
}

options_model! {
    pub struct MessageResponse => MessageResponseBuilder
    {
        output: Value [required, body "output"],
        context: Value [optional, body "context"],
        user_id: String [optional, body "user_id"],
    }
}
