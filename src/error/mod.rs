//! Error types for the Holocron server.
//!
//! One unified error enum covers the whole data-model contract: rows that do
//! not exist, constraint violations (uniqueness, dangling foreign keys,
//! duplicate association edges), and deletes blocked by dependent rows. Raw
//! `sea_orm::DbErr` values are classified on conversion so callers and HTTP
//! responses see the logical failure, not the driver message.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum Error {
    /// The requested row does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Uniqueness, required-field, or foreign-key failure on a write, or a
    /// duplicate many-to-many edge.
    #[error("Constraint violation: {0}")]
    Conflict(String),
    /// Delete blocked because dependent rows still reference the target.
    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error that is not a recognized constraint failure.
    #[error(transparent)]
    DbErr(DbErr),
    /// Socket error while binding or serving the HTTP listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Error::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Error::Conflict(msg),
            _ => Error::DbErr(err),
        }
    }
}

impl Error {
    /// Classifies driver errors on delete paths, where a foreign-key failure
    /// means dependents still reference the row rather than a bad write.
    pub(crate) fn on_delete(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                Error::ReferentialIntegrity(msg)
            }
            _ => Error::from(err),
        }
    }
}

/// Maps errors to HTTP responses for the admin API.
///
/// - 404 Not Found for missing rows
/// - 409 Conflict for constraint and referential-integrity failures
/// - 500 Internal Server Error for everything else (logged, generic body)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{what} not found"),
                }),
            )
                .into_response(),
            Self::Conflict(msg) => (
                StatusCode::CONFLICT,
                Json(ErrorDto { error: msg }),
            )
                .into_response(),
            Self::ReferentialIntegrity(msg) => (
                StatusCode::CONFLICT,
                Json(ErrorDto { error: msg }),
            )
                .into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body, logging the full message server-side.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
