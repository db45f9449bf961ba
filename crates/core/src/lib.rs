//! iSmartPay Core - Shared types library.
//!
//! This crate provides common types used across all iSmartPay console
//! components:
//! - `client` - HTTP client for the iSmartPay admin REST service
//! - `cli` - Terminal admin console built on the client
//!
//! # Architecture
//!
//! The core crate contains only types and catalogs - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses,
//!   plus the fixed permission and service catalogs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
