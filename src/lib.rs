//! # watson-sdk
//!
//! Typed request options for IBM Watson cloud services.
//!
//! ## Overview
//!
//! Every API operation takes its parameters as an immutable *options* value.
//! Options are assembled with a chaining builder and frozen by `build()`, which
//! rejects missing or empty required fields. A built value is valid by
//! construction: the only way to change it is to derive a new builder with
//! `new_builder()` and build again.
//!
//! A [`client::ServiceClient`] renders options into an HTTP request (path,
//! query, headers and JSON or text body, under the API's wire names) and sends
//! it through a pluggable [`transport::Dispatcher`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use watson_sdk::assistant::v2::{MessageInput, MessageOptions, MessageType, RuntimeIntent};
//! use watson_sdk::assistant::AssistantV2;
//!
//! #[tokio::main]
//! async fn main() -> watson_sdk::Result<()> {
//!     let assistant = AssistantV2::from_env("2021-06-14")?;
//!
//!     let input = MessageInput::builder()
//!         .message_type(MessageType::Text)
//!         .text("hello")
//!         .add_intent(RuntimeIntent::builder().intent("greeting").build()?)
//!         .build()?;
//!
//!     let options = MessageOptions::builder()
//!         .assistant_id("my-assistant")
//!         .session_id("my-session")
//!         .input(input)
//!         .build()?;
//!
//!     let response = assistant.message(options).await?;
//!     println!("{:?}", response.output());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Options-model core: generators, field traits, request mapping |
//! | [`client`] | Service client and its builder |
//! | [`transport`] | Dispatcher seam and the reqwest transport |
//! | [`config`] | Service URL, version, credentials and environment lookup |
//! | [`error`] | Error types |
//! | `assistant` | Assistant v1 entity values, v2 sessions and messages |
//! | `natural_language_understanding` | Text analysis |
//! | `personality_insights` | Personality profiles |
//! | `speech_to_text` | Speech models and custom language models |
//! | `tone_analyzer` | Document and chat tone |

pub mod client;
pub mod config;
pub mod error_code;
pub mod model;
pub mod transport;

#[cfg(feature = "assistant")]
pub mod assistant;

#[cfg(feature = "natural-language-understanding")]
pub mod natural_language_understanding;

#[cfg(feature = "personality-insights")]
pub mod personality_insights;

#[cfg(feature = "speech-to-text")]
pub mod speech_to_text;

#[cfg(feature = "tone-analyzer")]
pub mod tone_analyzer;

// Re-export main types for convenience
pub use client::{ServiceClient, ServiceClientBuilder, ServiceSpec};
pub use config::{Credentials, ServiceConfig};
pub use model::{FieldValue, Operation};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ArgumentError, Error, ErrorContext};
