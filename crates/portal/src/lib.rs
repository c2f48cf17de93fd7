//! IntraSphere portal library.
//!
//! A small internal portal for a team to manage interns: name-based login,
//! task assignment and completion tracking, and a two-way notes feed between
//! a single founder-admin and multiple interns. All state lives in a hosted
//! table-query datastore accessed directly from the client; there is no
//! custom server.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration for the hosted datastore
//! - [`error`] - Application-level error taxonomy
//! - [`store`] - The table-query boundary: filter combinators, the REST
//!   client, and an in-memory store for tests
//! - [`models`] - Wire row types and the session identity
//! - [`db`] - Per-entity repositories (directory, tasks, notes)
//! - [`services`] - The login flow
//! - [`views`] - Role-gated dashboard composition
//!
//! # Data flow
//!
//! Every view mutation issues a direct write to the relevant table, then
//! triggers a full refetch of the dependent read set. Failures surface as
//! transient user-facing notices and leave the previous snapshot unchanged.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod views;

pub use error::PortalError;
