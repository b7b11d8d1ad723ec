//! Shared utilities for the Waste Manager backend.
//!
//! This crate provides functionality used by every other crate:
//! - Password hashing with Argon2id
//! - Access token issuing and verification
//! - Common validation rules

pub mod jwt;
pub mod password;
pub mod validation;
