//! iSmartPay admin console client.
//!
//! Talks to the iSmartPay admin REST service: sign-in, admin accounts,
//! roles, fee configuration, and KYC applications. The service wraps list
//! payloads in several envelope shapes and has shipped multiple field-name
//! generations; this crate normalizes all of them into canonical records
//! so consumers iterate unconditionally.
//!
//! # Synchronization model
//!
//! Mutations follow mutate-then-refresh: after a successful write the
//! list endpoint is re-queried and the refreshed server state is returned.
//! The in-memory list is never patched optimistically.
//!
//! # Sessions
//!
//! The bearer token lives in an explicit [`session::Session`] with a
//! defined lifecycle (begin on login, end on logout). Logout cancels
//! requests still in flight. Storage is injected via
//! [`session::SessionStore`].
//!
//! # Example
//!
//! ```no_run
//! use ismartpay_client::{ConsoleClient, ConsoleConfig};
//! use url::Url;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConsoleConfig::new(Url::parse("https://api.ismartpay.example")?);
//! let client = ConsoleClient::new(&config)?;
//!
//! client.login("ops@ismartpay.example", "password").await?;
//! for admin in client.admins().list().await? {
//!     println!("{} <{}>", admin.username, admin.email);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod envelope;
pub mod error;
pub mod resources;
pub mod session;

mod auth;
mod fields;
mod http;

pub use auth::NewAdmin;
pub use config::{ConfigError, ConsoleConfig};
pub use error::ApiError;
pub use http::ConsoleClient;
pub use resources::{
    AdminRecord, AdminsApi, FeeDraft, FeeForm, FeeKind, FeeRecord, FeeValue, FeesApi, KycApi,
    KycApplication, RoleRecord, RoleRef, RolesApi,
};
pub use session::{MemorySessionStore, PersistedSession, Session, SessionStore};
