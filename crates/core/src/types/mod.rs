//! Core types for IntraSphere.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod name;
pub mod role;
pub mod status;

pub use id::*;
pub use name::{DisplayName, NameError};
pub use role::Role;
pub use status::TaskStatus;
