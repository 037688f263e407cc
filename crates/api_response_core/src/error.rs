use thiserror::Error;

use crate::kind::ResponseKind;
use crate::method::SupportedMethod;

/// Raised when a builder is bound to a method it cannot serve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("HTTP method is missing")]
    MissingMethod,

    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Errors produced while building a response envelope.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The kind exists but is outside the bound method's vocabulary.
    #[error("response kind {kind} is not supported for {method} responses")]
    UnsupportedResponseKind {
        kind: ResponseKind,
        method: SupportedMethod,
    },

    /// The kind name does not match any known response kind.
    #[error("unknown response kind: {0}")]
    UnknownResponseKind(String),

    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BuildError {
    /// True for both flavours of caller mistake: an unknown kind name, or a
    /// known kind that the method does not accept.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedResponseKind { .. } | Self::UnknownResponseKind(_)
        )
    }
}
