use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The kind of entity a UWA identifies. Determines which components are
/// required and the order they are folded into the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntityType {
    PhysicalMachine,
    VirtualMachine,
    BusinessOwner,
    Individual,
    Account,
}

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        EntityType::PhysicalMachine,
        EntityType::VirtualMachine,
        EntityType::BusinessOwner,
        EntityType::Individual,
        EntityType::Account,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::PhysicalMachine => "physical_machine",
            EntityType::VirtualMachine => "virtual_machine",
            EntityType::BusinessOwner => "business_owner",
            EntityType::Individual => "individual",
            EntityType::Account => "account",
        }
    }

    /// Two-character code leading every identifier of this type.
    pub fn code(&self) -> &'static str {
        match self {
            EntityType::PhysicalMachine => "PM",
            EntityType::VirtualMachine => "VM",
            EntityType::BusinessOwner => "BO",
            EntityType::Individual => "HI",
            EntityType::Account => "AC",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "physical_machine" | "machine" | "pm" => Ok(EntityType::PhysicalMachine),
            "virtual_machine" | "vm" => Ok(EntityType::VirtualMachine),
            "business_owner" | "business" | "bo" => Ok(EntityType::BusinessOwner),
            "individual" | "human" | "hi" => Ok(EntityType::Individual),
            "account" | "service_account" | "ac" => Ok(EntityType::Account),
            _ => Err(CoreError::InvalidEntityType(s.to_string())),
        }
    }
}

/// Names of the attributes a caller may supply in [`UwaComponents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ComponentField {
    ServerId,
    SerialNumber,
    MacAddress,
    InstanceUuid,
    Environment,
    OsName,
    Address,
    BusinessName,
    OwnerName,
    TaxId,
    FirstName,
    LastName,
    Birthdate,
    Username,
    Platform,
    CreatedDate,
}

impl ComponentField {
    pub const ALL: [ComponentField; 16] = [
        ComponentField::ServerId,
        ComponentField::SerialNumber,
        ComponentField::MacAddress,
        ComponentField::InstanceUuid,
        ComponentField::Environment,
        ComponentField::OsName,
        ComponentField::Address,
        ComponentField::BusinessName,
        ComponentField::OwnerName,
        ComponentField::TaxId,
        ComponentField::FirstName,
        ComponentField::LastName,
        ComponentField::Birthdate,
        ComponentField::Username,
        ComponentField::Platform,
        ComponentField::CreatedDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentField::ServerId => "server_id",
            ComponentField::SerialNumber => "serial_number",
            ComponentField::MacAddress => "mac_address",
            ComponentField::InstanceUuid => "instance_uuid",
            ComponentField::Environment => "environment",
            ComponentField::OsName => "os_name",
            ComponentField::Address => "address",
            ComponentField::BusinessName => "business_name",
            ComponentField::OwnerName => "owner_name",
            ComponentField::TaxId => "tax_id",
            ComponentField::FirstName => "first_name",
            ComponentField::LastName => "last_name",
            ComponentField::Birthdate => "birthdate",
            ComponentField::Username => "username",
            ComponentField::Platform => "platform",
            ComponentField::CreatedDate => "created_date",
        }
    }
}

impl fmt::Display for ComponentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentField {
    type Err = CoreError;

    /// Accepts both `snake_case` and `camelCase` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        ComponentField::ALL
            .into_iter()
            .find(|f| f.as_str().replace('_', "") == wanted)
            .ok_or_else(|| CoreError::UnknownComponentField(s.to_string()))
    }
}

/// Attribute bag supplied by the caller for one UWA derivation.
///
/// Every field is optional; which ones are required depends on the
/// [`EntityType`]. Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UwaComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

impl UwaComponents {
    fn slot(&self, field: ComponentField) -> &Option<String> {
        match field {
            ComponentField::ServerId => &self.server_id,
            ComponentField::SerialNumber => &self.serial_number,
            ComponentField::MacAddress => &self.mac_address,
            ComponentField::InstanceUuid => &self.instance_uuid,
            ComponentField::Environment => &self.environment,
            ComponentField::OsName => &self.os_name,
            ComponentField::Address => &self.address,
            ComponentField::BusinessName => &self.business_name,
            ComponentField::OwnerName => &self.owner_name,
            ComponentField::TaxId => &self.tax_id,
            ComponentField::FirstName => &self.first_name,
            ComponentField::LastName => &self.last_name,
            ComponentField::Birthdate => &self.birthdate,
            ComponentField::Username => &self.username,
            ComponentField::Platform => &self.platform,
            ComponentField::CreatedDate => &self.created_date,
        }
    }

    fn slot_mut(&mut self, field: ComponentField) -> &mut Option<String> {
        match field {
            ComponentField::ServerId => &mut self.server_id,
            ComponentField::SerialNumber => &mut self.serial_number,
            ComponentField::MacAddress => &mut self.mac_address,
            ComponentField::InstanceUuid => &mut self.instance_uuid,
            ComponentField::Environment => &mut self.environment,
            ComponentField::OsName => &mut self.os_name,
            ComponentField::Address => &mut self.address,
            ComponentField::BusinessName => &mut self.business_name,
            ComponentField::OwnerName => &mut self.owner_name,
            ComponentField::TaxId => &mut self.tax_id,
            ComponentField::FirstName => &mut self.first_name,
            ComponentField::LastName => &mut self.last_name,
            ComponentField::Birthdate => &mut self.birthdate,
            ComponentField::Username => &mut self.username,
            ComponentField::Platform => &mut self.platform,
            ComponentField::CreatedDate => &mut self.created_date,
        }
    }

    /// The trimmed value of `field`, or `None` when absent or blank.
    pub fn get(&self, field: ComponentField) -> Option<&str> {
        self.slot(field)
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, field: ComponentField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn with(mut self, field: ComponentField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}
