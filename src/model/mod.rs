//! Options-model core: validated, immutable request parameters.
//!
//! Each API operation's parameters are collected by a builder, checked by
//! `build()`, and frozen into an options value that a [`ServiceClient`]
//! consumes when it dispatches the call.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`options_model!`](crate::options_model) | Generates an options struct, builder, accessors and wire mapping |
//! | [`wire_enum!`](crate::wire_enum) | Generates a closed enum serialized as the API's wire string |
//! | [`FieldValue`] | Accessor view and emptiness rules for field types |
//! | [`ParamValue`] | Rendering for path, query and header parameters |
//! | [`Operation`] | Maps an options value onto method, path, query, headers and body |
//!
//! [`ServiceClient`]: crate::client::ServiceClient

mod field;
mod macros;
mod request;

pub use field::{check_required, permit, require, FieldValue, ParamValue};
pub use request::{HttpMethod, Operation, RequestBody, RequestParts, RequestTemplate};
