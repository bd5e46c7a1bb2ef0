use crate::{dto::output, store};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jwt_auth::error::{IdentityError, MissingRoleError};
use strum::{AsRefStr, IntoStaticStr};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unauthenticated: {0}")]
    Unauthenticated(#[from] IdentityError),

    #[error("auth error: {0}")]
    Auth(#[from] MissingRoleError),

    #[error("permission denied: {0}")]
    PermissionDenied(&'static str),

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("{0}")]
    Store(#[from] store::Error),
}

///
/// Category of the failure visible to the caller
///
#[derive(AsRefStr, IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
    Unauthenticated,
    PermissionDenied,
    InvalidArgument,
    NotFound,
    AlreadyExists,
    ResourceExhausted,
    PayloadTooLarge,
}

impl ErrorCode {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorCode::PermissionDenied => StatusCode::FORBIDDEN,
            ErrorCode::InvalidArgument => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyExists => StatusCode::CONFLICT,
            ErrorCode::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Unauthenticated(_) => ErrorCode::Unauthenticated,
            Error::Auth(_) | Error::PermissionDenied(_) => ErrorCode::PermissionDenied,
            Error::Validation(_) | Error::MalformedRequest(_) => ErrorCode::InvalidArgument,
            Error::PayloadTooLarge => ErrorCode::PayloadTooLarge,
            Error::Store(err) => match err {
                store::Error::NotFound => ErrorCode::NotFound,
                store::Error::AlreadyHasTicket => ErrorCode::AlreadyExists,
                store::Error::Full => ErrorCode::ResourceExhausted,
                store::Error::SeatOccupied => ErrorCode::AlreadyExists,
                store::Error::InvalidSeat(_) => ErrorCode::InvalidArgument,
            },
        }
    }
}

///
/// Body that can't be read because of [tower_http::limit] stays 413,
/// any other unreadable body is an invalid argument.
///
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge,
            _ => Error::MalformedRequest(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let code = self.code();
        let body = output::ErrorBody {
            code: code.into(),
            message: self.to_string(),
        };

        (code.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn store_errors_mapped() {
        let cases = [
            (store::Error::NotFound, StatusCode::NOT_FOUND),
            (store::Error::AlreadyHasTicket, StatusCode::CONFLICT),
            (store::Error::Full, StatusCode::TOO_MANY_REQUESTS),
            (store::Error::SeatOccupied, StatusCode::CONFLICT),
            (
                store::Error::InvalidSeat("invalid section C".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, status_code) in cases {
            let response = Error::from(err).into_response();

            assert_eq!(response.status(), status_code);
        }
    }

    #[test]
    fn command_errors_mapped() {
        let cases = [
            (
                Error::Unauthenticated(IdentityError::NoCredential),
                StatusCode::UNAUTHORIZED,
            ),
            (
                Error::Auth(MissingRoleError {
                    missing_role: "admin".to_string(),
                }),
                StatusCode::FORBIDDEN,
            ),
            (Error::PermissionDenied("nope"), StatusCode::FORBIDDEN),
            (Error::Validation("nope"), StatusCode::UNPROCESSABLE_ENTITY),
            (
                Error::MalformedRequest("expected value".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (Error::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
        ];

        for (err, status_code) in cases {
            let response = err.into_response();

            assert_eq!(response.status(), status_code);
        }
    }

    #[test]
    fn error_code_snake_case() {
        assert_eq!(ErrorCode::ResourceExhausted.as_ref(), "resource_exhausted");
        assert_eq!(ErrorCode::AlreadyExists.as_ref(), "already_exists");
        assert_eq!(ErrorCode::PayloadTooLarge.as_ref(), "payload_too_large");
    }
}
