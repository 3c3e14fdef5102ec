//! Integration tests for the Pawly client.
//!
//! These tests exercise whole flows across crates:
//!
//! - `cart_persistence` - cart state surviving a simulated process restart
//! - `auth_flow` - login/logout/restore against a mocked backend
//! - `checkout_flow` - cart to order placement against a mocked backend
//!
//! The backend is mocked with `httpmock`; durable state lives in per-test
//! temp directories, so tests are fully isolated and run in parallel.

#![cfg_attr(not(test), forbid(unsafe_code))]
