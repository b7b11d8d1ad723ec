//! Domain services for the Waste Manager.
//!
//! Services contain business logic that operates on domain models.

pub mod authorization;

pub use authorization::{
    capability_catalog, Action, Capability, CapabilityParseError, EffectivePermissions, Resource,
};
