//! IntraSphere Core - Shared types library.
//!
//! This crate provides common types used across all IntraSphere components:
//! - `portal` - Data-model and access-rule library (repositories, views)
//! - `cli` - Command-line tools for seeding and intern management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no access
//! to the backing datastore. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, roles, statuses, and
//!   validated display names

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
