//! Domain layer for the Waste Manager backend.
//!
//! This crate contains:
//! - Domain models (users, roles, bins, trucks, schedules, collections, requests)
//! - Request/response DTOs with validation rules
//! - Authorization model (resources, capabilities, effective permissions)

pub mod models;
pub mod services;
