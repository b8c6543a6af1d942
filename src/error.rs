use crate::error_code::StandardErrorCode;
use crate::transport::TransportError;
use thiserror::Error;

/// Where a rejected value came from, attached to argument and configuration errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// `<Model>.<field>` for builder rejections, `<SERVICE>.version` for clients.
    pub field_path: Option<String>,
    /// The offending input, e.g. a malformed service URL.
    pub details: Option<String>,
    /// Component that raised the error: `options_builder`, `service_config`,
    /// `service_client_builder`, `request_template` or `wire_enum`.
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.field_path.is_none() && self.details.is_none() && self.source.is_none()
    }
}

/// Why an argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("{field} cannot be null")]
    MissingField { field: &'static str },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("'{value}' is not a valid {kind}")]
    UnknownValue { kind: &'static str, value: String },

    #[error("no value for path parameter {{{name}}}")]
    UnresolvedPathParam { name: String },
}

impl ArgumentError {
    /// Name of the field this error refers to, when it refers to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ArgumentError::MissingField { field } | ArgumentError::EmptyField { field } => {
                Some(*field)
            }
            ArgumentError::UnresolvedPathParam { name } => Some(name.as_str()),
            ArgumentError::UnknownValue { .. } => None,
        }
    }
}

/// Unified error type for the Watson SDK.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {reason}{}", format_context(.context))]
    InvalidArgument {
        reason: ArgumentError,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote error: HTTP {status} ({}): {message}", .code.name())]
    Remote {
        status: u16,
        code: StandardErrorCode,
        message: String,
        retryable: bool,
    },
}

/// ` (field: .., details: .., source: ..)`, or nothing for an empty context.
fn format_context(ctx: &ErrorContext) -> String {
    if ctx.is_empty() {
        return String::new();
    }
    let labelled = [
        ("field", &ctx.field_path),
        ("details", &ctx.details),
        ("source", &ctx.source),
    ];
    let parts: Vec<String> = labelled
        .iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| format!("{}: {}", label, v)))
        .collect();
    format!(" ({})", parts.join(", "))
}

impl Error {
    /// Create an invalid-argument error with structured context
    pub fn invalid_argument(reason: ArgumentError, context: ErrorContext) -> Self {
        Error::InvalidArgument { reason, context }
    }

    /// Create a configuration error without context
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Build a remote error from an HTTP status and the service's error message.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        let code = StandardErrorCode::from_http_status(status);
        Error::Remote {
            status,
            code,
            message: message.into(),
            retryable: code.retryable(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// The required field a failed `build()` reported, if that is what this error is.
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            Error::InvalidArgument {
                reason: ArgumentError::MissingField { field } | ArgumentError::EmptyField { field },
                ..
            } => Some(*field),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidArgument { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Remote { retryable, .. } => *retryable,
            Error::Transport(TransportError::Http(e)) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_includes_field_path() {
        let err = Error::invalid_argument(
            ArgumentError::EmptyField { field: "word_name" },
            ErrorContext::new()
                .with_field_path("AddWordOptions.word_name")
                .with_source("options_builder"),
        );
        let text = err.to_string();
        assert!(text.contains("word_name cannot be empty"));
        assert!(text.contains("field: AddWordOptions.word_name"));
        assert_eq!(err.missing_field(), Some("word_name"));
    }

    #[test]
    fn empty_context_adds_nothing_to_display() {
        let err = Error::invalid_argument(
            ArgumentError::UnknownValue {
                kind: "Tone",
                value: "anger".to_string(),
            },
            ErrorContext::new(),
        );
        assert_eq!(err.to_string(), "Invalid argument: 'anger' is not a valid Tone");

        let err = Error::invalid_argument(
            ArgumentError::UnknownValue {
                kind: "Tone",
                value: "anger".to_string(),
            },
            ErrorContext::new().with_source("wire_enum"),
        );
        assert!(err.to_string().ends_with("(source: wire_enum)"));
    }

    #[test]
    fn remote_error_carries_classification() {
        let err = Error::remote(429, "Too many requests");
        match &err {
            Error::Remote { code, retryable, .. } => {
                assert_eq!(*code, StandardErrorCode::RateLimited);
                assert!(*retryable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_retryable());
        assert!(!Error::remote(404, "not found").is_retryable());
    }
}
