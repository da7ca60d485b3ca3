//! Per-entity UWA derivation.
//!
//! Each generator folds fixed-width slices of its required components, in a
//! fixed order, behind the entity's two-character code. Whatever width is
//! left of [`BODY_LEN`] is filled with a digest of the full component values,
//! then [`format_uwa`] groups the result.

use clx_core::models::entity::{ComponentField, EntityType, UwaComponents};

use crate::error::UwaError;
use crate::location::location_code;
use crate::normalize::{digest_tail, leading, normalize, pad_right, trailing};

pub const PREFIX: &str = "CLX";
pub const GROUP_LEN: usize = 7;
pub const GROUP_COUNT: usize = 6;
pub const BODY_LEN: usize = GROUP_LEN * GROUP_COUNT;

/// A required component. Only absent or blank values are missing.
fn require<'a>(
    components: &'a UwaComponents,
    entity_type: EntityType,
    field: ComponentField,
) -> Result<&'a str, UwaError> {
    components
        .get(field)
        .ok_or(UwaError::MissingComponent { entity_type, field })
}

/// Entity code, then `slices`, then a digest of `sources` up to [`BODY_LEN`].
fn assemble(entity_type: EntityType, slices: &[String], sources: &[&str]) -> String {
    let mut body = entity_type.code().to_string();
    for slice in slices {
        body.push_str(slice);
    }
    let spare = BODY_LEN.saturating_sub(body.len());
    let mut digested = vec![entity_type.code()];
    digested.extend_from_slice(sources);
    body.push_str(&digest_tail(&digested, spare));
    format_uwa(&body)
}

/// `CLX-` followed by six hyphen-separated groups of seven.
pub fn format_uwa(body: &str) -> String {
    let mut body: String = normalize(body).chars().take(BODY_LEN).collect();
    pad_right(&mut body, BODY_LEN);

    let groups: Vec<&str> = (0..GROUP_COUNT)
        .map(|i| &body[i * GROUP_LEN..(i + 1) * GROUP_LEN])
        .collect();
    format!("{PREFIX}-{}", groups.join("-"))
}

/// Server UUID, serial number, location, OS and (optionally) MAC address.
pub fn generate_physical_machine_uwa(components: &UwaComponents) -> Result<String, UwaError> {
    let ty = EntityType::PhysicalMachine;
    let server_id = require(components, ty, ComponentField::ServerId)?;
    let serial = require(components, ty, ComponentField::SerialNumber)?;
    let os_name = require(components, ty, ComponentField::OsName)?;
    let address = require(components, ty, ComponentField::Address)?;
    let mac = components.get(ComponentField::MacAddress).unwrap_or_default();

    let slices = [
        trailing(&normalize(server_id), 8),
        trailing(&normalize(serial), 8),
        location_code(address),
        leading(&normalize(os_name), 4),
        trailing(&normalize(mac), 6),
    ];
    Ok(assemble(ty, &slices, &[server_id, serial, os_name, address, mac]))
}

/// Instance UUID, environment, location and OS.
pub fn generate_virtual_machine_uwa(components: &UwaComponents) -> Result<String, UwaError> {
    let ty = EntityType::VirtualMachine;
    let instance = require(components, ty, ComponentField::InstanceUuid)?;
    let environment = require(components, ty, ComponentField::Environment)?;
    let address = require(components, ty, ComponentField::Address)?;
    let os_name = require(components, ty, ComponentField::OsName)?;

    let slices = [
        trailing(&normalize(instance), 12),
        leading(&normalize(environment), 4),
        location_code(address),
        leading(&normalize(os_name), 4),
    ];
    Ok(assemble(ty, &slices, &[instance, environment, address, os_name]))
}

pub fn generate_business_owner_uwa(components: &UwaComponents) -> Result<String, UwaError> {
    let ty = EntityType::BusinessOwner;
    let business = require(components, ty, ComponentField::BusinessName)?;
    let owner = require(components, ty, ComponentField::OwnerName)?;
    let tax_id = require(components, ty, ComponentField::TaxId)?;
    let address = require(components, ty, ComponentField::Address)?;

    let slices = [
        leading(&normalize(business), 8),
        leading(&normalize(owner), 6),
        trailing(&normalize(tax_id), 4),
        location_code(address),
    ];
    Ok(assemble(ty, &slices, &[business, owner, tax_id, address]))
}

/// Name, date of birth and location of a human individual.
pub fn generate_individual_uwa(components: &UwaComponents) -> Result<String, UwaError> {
    let ty = EntityType::Individual;
    let first = require(components, ty, ComponentField::FirstName)?;
    let last = require(components, ty, ComponentField::LastName)?;
    let birthdate = require(components, ty, ComponentField::Birthdate)?;
    let address = require(components, ty, ComponentField::Address)?;

    let slices = [
        leading(&normalize(first), 4),
        leading(&normalize(last), 6),
        leading(&normalize(birthdate), 8),
        location_code(address),
    ];
    Ok(assemble(ty, &slices, &[first, last, birthdate, address]))
}

/// User or service account: username, platform and creation date.
pub fn generate_account_uwa(components: &UwaComponents) -> Result<String, UwaError> {
    let ty = EntityType::Account;
    let username = require(components, ty, ComponentField::Username)?;
    let platform = require(components, ty, ComponentField::Platform)?;
    let created = require(components, ty, ComponentField::CreatedDate)?;

    let slices = [
        leading(&normalize(username), 10),
        leading(&normalize(platform), 6),
        leading(&normalize(created), 8),
    ];
    Ok(assemble(ty, &slices, &[username, platform, created]))
}
