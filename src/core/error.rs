//! Typed error handling for the game-reviews service
//!
//! Errors are grouped by category so callers can match on the specific case
//! instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`EntityError`]: lookups, inserts and relationship navigation
//! - [`ValidationError`]: rejected mutation input
//! - [`StorageError`]: failures of the in-memory store itself
//! - [`ConfigError`]: configuration and seed file loading
//!
//! # Example
//!
//! ```rust,ignore
//! use game_reviews::prelude::*;
//!
//! match mutations.edit_game("42", GamePatch::default()) {
//!     Ok(game) => println!("edited {}", game.id),
//!     Err(GameReviewsError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("no game {}", id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use async_graphql::ErrorExtensions;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum GameReviewsError {
    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl GameReviewsError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GameReviewsError::Entity(e) => e.status_code(),
            GameReviewsError::Validation(_) => StatusCode::BAD_REQUEST,
            GameReviewsError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GameReviewsError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code, also exposed as `extensions.code` on GraphQL errors
    pub fn error_code(&self) -> &'static str {
        match self {
            GameReviewsError::Entity(e) => e.error_code(),
            GameReviewsError::Validation(e) => e.error_code(),
            GameReviewsError::Storage(_) => "STORAGE_ERROR",
            GameReviewsError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            GameReviewsError::Entity(EntityError::NotFound { entity_type, id })
            | GameReviewsError::Entity(EntityError::AlreadyExists { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id,
                }))
            }
            GameReviewsError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }

    /// Shorthand for the not-found case
    pub fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
        .into()
    }
}

impl IntoResponse for GameReviewsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl ErrorExtensions for GameReviewsError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.error_code().to_string();
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", code))
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups and relationship navigation
#[derive(Debug, Error)]
pub enum EntityError {
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} with id '{id}' already exists")]
    AlreadyExists { entity_type: String, id: String },

    #[error("'{entity_type}' has no relationship named '{relation}'")]
    UnknownRelation {
        entity_type: String,
        relation: String,
    },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::AlreadyExists { .. } => StatusCode::CONFLICT,
            EntityError::UnknownRelation { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
            EntityError::UnknownRelation { .. } => "UNKNOWN_RELATION",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when mutation input is rejected
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Validation failed for field '{field}': {message}")]
    FieldError { field: String, message: String },

    #[error("Validation failed: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    #[error("Missing required argument: {argument}")]
    MissingArgument { argument: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn format_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldError { .. } | ValidationError::FieldErrors(_) => {
                "VALIDATION_ERROR"
            }
            ValidationError::MissingArgument { .. } => "MISSING_ARGUMENT",
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldValidationError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        // field_errors() is backed by a HashMap
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

impl From<validator::ValidationErrors> for GameReviewsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        GameReviewsError::Validation(errors.into())
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Lock on the {collection} collection is poisoned")]
    LockPoisoned { collection: String },
}

// =============================================================================
// Config Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {}: {message}", .file.as_deref().unwrap_or("configuration"))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

/// A specialized Result type for game-reviews operations
pub type GameReviewsResult<T> = Result<T, GameReviewsError>;
