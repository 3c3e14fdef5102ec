//! Core types for Pawly.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::{FLAT_TAX, format_amount};
pub use role::UserRole;
