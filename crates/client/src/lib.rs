//! Pawly client library.
//!
//! This crate holds everything stateful about the Pawly storefront client:
//!
//! - [`store`] - durable local key/value persistence
//! - [`cart`] - the shopping cart state manager
//! - [`session`] - the auth/session state manager and field normalization
//! - [`api`] - the REST gateway to the Pawly backend
//! - [`config`] - environment-driven client configuration
//!
//! The managers own their state exclusively; consumers mutate through their
//! methods and observe through snapshots and explicit subscriptions. Every
//! mutation persists synchronously, so a process restart never loses the
//! last known state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod session;
pub mod store;

pub use api::{ApiClient, ApiError};
pub use cart::{CartLineItem, CartManager, CartSnapshot};
pub use config::{ClientConfig, ConfigError};
pub use session::{SessionManager, UserSession};
pub use store::{JsonFileStore, MemoryStore, StateStore};
