//! Common types and traits for all entities

pub mod entity;
pub mod entity_id;
pub mod validate;

// Re-exports
pub use entity::Entity;
pub use entity_id::EntityId;
pub use validate::{rules, FieldError, Validate, ValidationErrors};
