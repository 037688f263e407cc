use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::kind::ResponseKind;

const GET_VOCABULARY: &[ResponseKind] = &[
    ResponseKind::Success,
    ResponseKind::SuccessFunctionalError,
    ResponseKind::BadRequest,
    ResponseKind::Forbidden,
    ResponseKind::NotFound,
    ResponseKind::InternalServerError,
];

const POST_VOCABULARY: &[ResponseKind] = &[
    ResponseKind::Success,
    ResponseKind::SuccessCreated,
    ResponseKind::SuccessNoContent,
    ResponseKind::SuccessFunctionalError,
    ResponseKind::BadRequest,
    ResponseKind::Forbidden,
    ResponseKind::NotFound,
    ResponseKind::Conflict,
    ResponseKind::InternalServerError,
];

// Shared by PUT, PATCH and DELETE.
const MUTATION_VOCABULARY: &[ResponseKind] = &[
    ResponseKind::Success,
    ResponseKind::SuccessNoContent,
    ResponseKind::SuccessFunctionalError,
    ResponseKind::BadRequest,
    ResponseKind::Forbidden,
    ResponseKind::NotFound,
    ResponseKind::Conflict,
    ResponseKind::InternalServerError,
];

/// HTTP methods a response builder can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupportedMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl SupportedMethod {
    pub const ALL: [SupportedMethod; 5] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Response kinds a handler bound to this method may report.
    pub fn vocabulary(self) -> &'static [ResponseKind] {
        match self {
            Self::Get => GET_VOCABULARY,
            Self::Post => POST_VOCABULARY,
            Self::Put | Self::Patch | Self::Delete => MUTATION_VOCABULARY,
        }
    }

    pub fn supports(self, kind: ResponseKind) -> bool {
        self.vocabulary().contains(&kind)
    }
}

impl fmt::Display for SupportedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportedMethod {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(ConfigurationError::MissingMethod);
        }

        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| ConfigurationError::UnsupportedMethod(value.to_string()))
    }
}
