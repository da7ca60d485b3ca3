//! clx-core
//!
//! Shared vocabulary of the CyberLockX scoring toolkit: entity types, UWA
//! components, and the record shapes persisted verbatim in assessment JSON
//! columns. No scoring logic lives here.

pub mod error;
pub mod models;
