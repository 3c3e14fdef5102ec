//! Pawly Core - Shared types library.
//!
//! This crate provides common types used across all Pawly components:
//! - `client` - State managers and the REST API gateway
//! - `cli` - Command-line storefront binding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, money, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
