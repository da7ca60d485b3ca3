use clx_core::models::entity::{ComponentField, EntityType};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UwaError {
    #[error("missing required component '{field}' for entity type '{entity_type}'")]
    MissingComponent {
        entity_type: EntityType,
        field: ComponentField,
    },
}
