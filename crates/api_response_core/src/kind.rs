use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// Outcome categories a handler can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseKind {
    Success,
    SuccessCreated,
    SuccessNoContent,
    SuccessFunctionalError,
    BadRequest,
    Forbidden,
    NotFound,
    Conflict,
    InternalServerError,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 9] = [
        Self::Success,
        Self::SuccessCreated,
        Self::SuccessNoContent,
        Self::SuccessFunctionalError,
        Self::BadRequest,
        Self::Forbidden,
        Self::NotFound,
        Self::Conflict,
        Self::InternalServerError,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::SuccessCreated => "SUCCESS_CREATED",
            Self::SuccessNoContent => "SUCCESS_NO_CONTENT",
            Self::SuccessFunctionalError => "SUCCESS_FUNCTIONAL_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// HTTP status for the kind. The mapping does not depend on the method;
    /// only vocabulary membership does.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Success | Self::SuccessFunctionalError => 200,
            Self::SuccessCreated => 201,
            Self::SuccessNoContent => 204,
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::InternalServerError => 500,
        }
    }

    /// Error-family kinds travel through the completion error slot.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Self::BadRequest
                | Self::Forbidden
                | Self::NotFound
                | Self::Conflict
                | Self::InternalServerError
        )
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = BuildError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| BuildError::UnknownResponseKind(value.to_string()))
    }
}
