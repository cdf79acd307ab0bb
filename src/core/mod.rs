//! Core building blocks: entity trait, errors, id allocation and the
//! read/write entry points over the store

pub mod entity;
pub mod error;
pub mod field;
pub mod id;
pub mod mutation;
pub mod query;

pub use entity::Entity;
pub use error::{
    ConfigError, EntityError, FieldValidationError, GameReviewsError, GameReviewsResult,
    StorageError, ValidationError,
};
pub use field::FieldValue;
pub use id::IdGenerator;
pub use mutation::MutationHandler;
pub use query::QueryFacade;
