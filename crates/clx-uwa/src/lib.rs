//! clx-uwa
//!
//! Universal Wallet Address derivation. Pure and deterministic: the same
//! entity type and components always yield the same identifier, with no
//! clock or randomness involved.

pub mod error;
pub mod generator;
pub mod location;
pub mod normalize;
pub mod validate;

use clx_core::models::entity::{EntityType, UwaComponents};
use clx_core::models::uwa::UwaRecord;

pub use error::UwaError;
pub use generator::{
    generate_account_uwa, generate_business_owner_uwa, generate_individual_uwa,
    generate_physical_machine_uwa, generate_virtual_machine_uwa,
};
pub use location::location_code;
pub use validate::validate_uwa;

/// Derive the UWA for `components` using the rules of `entity_type`.
pub fn generate_uwa(
    entity_type: EntityType,
    components: &UwaComponents,
) -> Result<String, UwaError> {
    match entity_type {
        EntityType::PhysicalMachine => generate_physical_machine_uwa(components),
        EntityType::VirtualMachine => generate_virtual_machine_uwa(components),
        EntityType::BusinessOwner => generate_business_owner_uwa(components),
        EntityType::Individual => generate_individual_uwa(components),
        EntityType::Account => generate_account_uwa(components),
    }
}

/// Generate a UWA and wrap it in a fresh [`UwaRecord`].
pub fn generate_record(
    entity_type: EntityType,
    components: UwaComponents,
) -> Result<UwaRecord, UwaError> {
    let uwa = generate_uwa(entity_type, &components)?;
    let record = UwaRecord::new(uwa, entity_type, components);
    tracing::info!(
        record_id = %record.id,
        entity_type = %entity_type,
        uwa = %record.uwa,
        "generated UWA record"
    );
    Ok(record)
}
