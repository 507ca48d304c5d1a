// Error catalog of the students resource.
//
// Every failure maps to exactly one ErrorKind, and every ErrorKind to exactly one
// HTTP status. Both mappings live here and nowhere else.

use crate::modules::students::core::ports::RegistryError;
use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Ok,
    BadRequest,
    NotFound,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(self) -> u16 {
        self.status_code().as_u16()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad request",
            Self::NotFound => "Not found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.label())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StudentError {
    #[error("resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("student name not specified")]
    NameNotSpecified,

    #[error("'{0}' parameter missing")]
    ParameterMissing(&'static str),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl StudentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ResourceNotFound { .. } | Self::NameNotSpecified => ErrorKind::NotFound,
            Self::ParameterMissing(_) => ErrorKind::BadRequest,
            Self::Registry(RegistryError::AlreadyExists { .. }) => ErrorKind::BadRequest,
            Self::Registry(RegistryError::DoesNotExist { .. }) => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod student_errors_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::Ok, 200, "200: OK")]
    #[case(ErrorKind::BadRequest, 400, "400: Bad request")]
    #[case(ErrorKind::NotFound, 404, "404: Not found")]
    fn it_should_carry_the_status_and_label(
        #[case] kind: ErrorKind,
        #[case] code: u16,
        #[case] display: &str,
    ) {
        assert_eq!(kind.code(), code);
        assert_eq!(kind.to_string(), display);
    }

    #[rstest]
    #[case(
        StudentError::ResourceNotFound { path: "/x".into() },
        ErrorKind::NotFound,
        "resource not found: /x"
    )]
    #[case(
        StudentError::NameNotSpecified,
        ErrorKind::NotFound,
        "student name not specified"
    )]
    #[case(
        StudentError::ParameterMissing("name"),
        ErrorKind::BadRequest,
        "'name' parameter missing"
    )]
    #[case(
        StudentError::ParameterMissing("group"),
        ErrorKind::BadRequest,
        "'group' parameter missing"
    )]
    #[case(
        RegistryError::AlreadyExists { name: "alice".into() }.into(),
        ErrorKind::BadRequest,
        "student alice already exists; choose a unique name"
    )]
    #[case(
        RegistryError::DoesNotExist { name: "bob".into() }.into(),
        ErrorKind::NotFound,
        "student bob does not exist"
    )]
    fn it_should_map_each_error_to_its_kind_and_reason(
        #[case] error: StudentError,
        #[case] kind: ErrorKind,
        #[case] reason: &str,
    ) {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.to_string(), reason);
    }
}
