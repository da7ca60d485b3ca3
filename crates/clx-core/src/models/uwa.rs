use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::entity::{EntityType, UwaComponents};

/// A generated identifier together with the inputs it was derived from.
///
/// `uwa` is a pure function of `entity_type` and `components`; `id` and
/// `created_at` only describe this particular record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UwaRecord {
    pub id: Uuid,
    pub uwa: String,
    pub entity_type: EntityType,
    pub components: UwaComponents,
    pub created_at: jiff::Timestamp,
}

impl UwaRecord {
    pub fn new(uwa: String, entity_type: EntityType, components: UwaComponents) -> Self {
        Self {
            id: Uuid::new_v4(),
            uwa,
            entity_type,
            components,
            created_at: jiff::Timestamp::now(),
        }
    }
}
