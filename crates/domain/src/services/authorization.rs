//! Capability-based authorization.
//!
//! Permissions are stored as plain names. The ones the server enforces follow
//! the `<resource>:<action>` form, e.g. `wastebin:write`. A caller may act on
//! a resource when the union of their role's permissions contains the
//! matching capability.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Protected resource groups, one per API mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    User,
    Role,
    Permission,
    Wastebin,
    Truck,
    Route,
    Schedule,
    Collection,
    Request,
    Activity,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Role => "role",
            Resource::Permission => "permission",
            Resource::Wastebin => "wastebin",
            Resource::Truck => "truck",
            Resource::Route => "route",
            Resource::Schedule => "schedule",
            Resource::Collection => "collection",
            Resource::Request => "request",
            Resource::Activity => "activity",
        }
    }

    pub fn all() -> &'static [Resource] {
        &[
            Resource::User,
            Resource::Role,
            Resource::Permission,
            Resource::Wastebin,
            Resource::Truck,
            Resource::Route,
            Resource::Schedule,
            Resource::Collection,
            Resource::Request,
            Resource::Activity,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Resource::User => "users",
            Resource::Role => "roles and role grants",
            Resource::Permission => "permissions",
            Resource::Wastebin => "waste bins",
            Resource::Truck => "garbage trucks",
            Resource::Route => "routes",
            Resource::Schedule => "collection schedules",
            Resource::Collection => "collections",
            Resource::Request => "service requests",
            Resource::Activity => "activity logs",
        }
    }
}

impl FromStr for Resource {
    type Err = CapabilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CapabilityParseError::UnknownResource(s.to_string()))
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller wants to do with a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Write,
}

impl Action {
    /// Safe HTTP methods read; everything else writes.
    pub fn for_method(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "GET" | "HEAD" | "OPTIONS" => Action::Read,
            _ => Action::Write,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
        }
    }
}

impl FromStr for Action {
    type Err = CapabilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Action::Read),
            "write" => Ok(Action::Write),
            other => Err(CapabilityParseError::UnknownAction(other.to_string())),
        }
    }
}

/// Errors parsing a capability slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityParseError {
    #[error("Capability must have the form <resource>:<action>: {0}")]
    Malformed(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// A `(resource, action)` pair, written `resource:action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capability {
    pub resource: Resource,
    pub action: Action,
}

impl Capability {
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    /// Human-readable description stored alongside seeded permissions.
    pub fn description(&self) -> String {
        match self.action {
            Action::Read => format!("View {}", self.resource.label()),
            Action::Write => format!("Create, update and delete {}", self.resource.label()),
        }
    }
}

impl FromStr for Capability {
    type Err = CapabilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s
            .split_once(':')
            .ok_or_else(|| CapabilityParseError::Malformed(s.to_string()))?;
        Ok(Self::new(resource.parse()?, action.parse()?))
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

/// Every capability the server enforces, in a stable order.
pub fn capability_catalog() -> Vec<Capability> {
    Resource::all()
        .iter()
        .flat_map(|&resource| {
            [
                Capability::new(resource, Action::Read),
                Capability::new(resource, Action::Write),
            ]
        })
        .collect()
}

/// The union of permission names attached to a caller's role.
///
/// Names that are not capability slugs are kept so they can be reported back
/// to clients, but they never grant access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectivePermissions {
    names: BTreeSet<String>,
}

impl EffectivePermissions {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.names.contains(&capability.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Sorted permission names.
    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}
