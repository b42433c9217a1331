//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the single translator that
//! turns any error into the JSON error envelope. Handlers return `Result<_, AppError>` and
//! never build error responses themselves.
//!
//! Status mapping:
//! - `NotFound` → 404 with `{success: false, message}`
//! - `Validation` → 400 with `errorsArray`
//! - every other client-side failure (bad id, unknown reference, malformed body,
//!   rejected database operation) → 400 with `errorObj`
//! - configuration, I/O and internal failures → 500 with a generic message

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::{
        api::{ErrorDto, ErrorObjDto, FieldErrorDto},
        validate::wire_name,
    },
    server::error::config::ConfigError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM, e.g. a unique constraint violation.
    ///
    /// Results in 400 Bad Request with the error wrapped in `errorObj`.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding the listener or opening the log file.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One or more request fields broke their declared rules.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Request body is not valid JSON or misses a required field.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameter could not be parsed, e.g. a non-numeric id.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// A lookup or delete was asked for a record without identity (zero key).
    ///
    /// # Fields
    /// - Resource name, e.g. `"car"`
    #[error("invalid {0} id")]
    InvalidKey(&'static str),

    /// A reservation names a car or user that does not exist.
    ///
    /// Results in 400 Bad Request; the referencing request is at fault.
    #[error("entity not found: {0} id")]
    UnknownReference(&'static str),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with `message` set to `entity not found: <resource> id`.
    #[error("entity not found: {0} id")]
    NotFound(&'static str),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is logged but a generic
    /// message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Name reported as `errorObj.kind` for client-side failures.
    fn kind(&self) -> &'static str {
        match self {
            Self::DbErr(_) => "DatabaseError",
            Self::JsonRejection(_) => "InvalidBody",
            Self::PathRejection(_) => "InvalidPath",
            Self::InvalidKey(_) => "InvalidKey",
            Self::UnknownReference(_) => "UnknownReference",
            Self::Validation(_) => "ValidationError",
            Self::NotFound(_) => "NotFound",
            Self::ConfigErr(_) | Self::IoErr(_) | Self::InternalError(_) => "InternalError",
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation, invalid key, unknown reference, malformed request
///   and database errors
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For configuration, I/O and internal errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    success: false,
                    code: None,
                    message: Some(self.to_string()),
                    error_obj: None,
                    errors_array: None,
                }),
            )
                .into_response(),
            Self::Validation(errors) => {
                tracing::debug!("Request failed validation: {}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        success: false,
                        code: Some(StatusCode::BAD_REQUEST.as_u16()),
                        message: None,
                        error_obj: None,
                        errors_array: Some(field_errors(&errors)),
                    }),
                )
                    .into_response()
            }
            err @ (Self::ConfigErr(_) | Self::IoErr(_) | Self::InternalError(_)) => {
                InternalServerError(err).into_response()
            }
            err => {
                tracing::debug!("Request failed: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        success: false,
                        code: Some(StatusCode::BAD_REQUEST.as_u16()),
                        message: None,
                        error_obj: Some(ErrorObjDto {
                            kind: err.kind().to_string(),
                            message: err.to_string(),
                        }),
                        errors_array: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Flattens validator output into one entry per failed rule, ordered by JSON field name.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldErrorDto> {
    let mut entries: Vec<FieldErrorDto> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let param = wire_name(&field).to_string();
            field_errors.iter().map(move |error| FieldErrorDto {
                location: "body".to_string(),
                param: param.clone(),
                value: error.params.get("value").cloned(),
                msg: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect();

    entries.sort_by(|a, b| a.param.cmp(&b.param));
    entries
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                success: false,
                code: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
                message: Some("Internal server error".to_string()),
                error_obj: None,
                errors_array: None,
            }),
        )
            .into_response()
    }
}
