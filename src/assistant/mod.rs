//! Watson Assistant: v1 entity values and v2 sessions and messages.

mod client;
pub mod v1;
pub mod v2;

pub use client::{AssistantV1, AssistantV2, SERVICE};
