//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors map to the right HTTP status and error code
//! - Error responses are properly formatted
//! - validator failures convert into field errors
//! - GraphQL errors carry the error code as an extension

use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use game_reviews::prelude::*;
use validator::Validate;

fn not_found() -> GameReviewsError {
    GameReviewsError::not_found("game", "42")
}

// =============================================================================
// Status and code mapping
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_entity_not_found_returns_404() {
        let err = not_found();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_entity_already_exists_returns_409() {
        let err = GameReviewsError::Entity(EntityError::AlreadyExists {
            entity_type: "game".to_string(),
            id: "1".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "ENTITY_ALREADY_EXISTS");
    }

    #[test]
    fn test_unknown_relation_returns_400() {
        let err = GameReviewsError::Entity(EntityError::UnknownRelation {
            entity_type: "game".to_string(),
            relation: "author".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "UNKNOWN_RELATION");
    }

    #[test]
    fn test_missing_argument_returns_400() {
        let err = GameReviewsError::Validation(ValidationError::MissingArgument {
            argument: "game".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "MISSING_ARGUMENT");
    }

    #[test]
    fn test_storage_error_returns_500() {
        let err = GameReviewsError::Storage(StorageError::LockPoisoned {
            collection: "games".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_config_error_returns_500() {
        let err = GameReviewsError::Config(ConfigError::InvalidValue {
            field: "server.port".to_string(),
            value: "abc".to_string(),
            message: "not a port".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}

// =============================================================================
// Response formatting
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_not_found_response_details() {
        let response = not_found().to_response();
        assert_eq!(response.code, "ENTITY_NOT_FOUND");
        assert!(response.message.contains("42"));

        let details = response.details.unwrap();
        assert_eq!(details["entity_type"], "game");
        assert_eq!(details["id"], "42");
    }

    #[test]
    fn test_storage_response_has_no_details() {
        let err = GameReviewsError::Storage(StorageError::LockPoisoned {
            collection: "reviews".to_string(),
        });
        let json = serde_json::to_value(err.to_response()).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// Validation conversion
// =============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_validator_errors_become_field_errors() {
        let input = NewGame {
            title: String::new(),
            platform: vec![],
        };
        let err: GameReviewsError = input.validate().unwrap_err().into();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        match &err {
            GameReviewsError::Validation(ValidationError::FieldErrors(fields)) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["platform", "title"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let details = err.to_response().details.unwrap();
        assert_eq!(details["fields"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_valid_input_passes() {
        let input = NewGame {
            title: "T".to_string(),
            platform: vec!["PC".to_string()],
        };
        assert!(input.validate().is_ok());
    }
}

// =============================================================================
// GraphQL extensions
// =============================================================================

mod graphql_extension_tests {
    use super::*;

    #[test]
    fn test_extend_sets_code() {
        let err = not_found().extend();
        assert_eq!(err.message, not_found().to_string());

        let code = err.extensions.as_ref().and_then(|ext| ext.get("code")).cloned();
        assert_eq!(
            code,
            Some(async_graphql::Value::String("ENTITY_NOT_FOUND".to_string()))
        );
    }
}

// =============================================================================
// Matching
// =============================================================================

mod matching_tests {
    use super::*;

    #[test]
    fn test_callers_can_match_not_found() {
        let handled = match not_found() {
            GameReviewsError::Entity(EntityError::NotFound { entity_type, id }) => {
                format!("{}:{}", entity_type, id)
            }
            _ => String::new(),
        };
        assert_eq!(handled, "game:42");
    }
}
