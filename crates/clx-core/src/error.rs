use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid entity type: {0}")]
    InvalidEntityType(String),

    #[error("unknown component field: {0}")]
    UnknownComponentField(String),

    #[error("unknown scorecard pillar: {0}")]
    UnknownPillar(String),
}
