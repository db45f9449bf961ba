//! Core types for the iSmartPay console.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod email;
pub mod id;
pub mod status;

pub use catalog::{permission_label, service_display_name, PERMISSIONS, SERVICES};
pub use email::{Email, EmailError};
pub use id::*;
pub use status::*;
