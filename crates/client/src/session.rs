//! Session lifecycle and persistence.
//!
//! The session is an explicit object with a defined lifecycle: `begin` on
//! login installs the bearer token, `end` on logout clears it, cancels any
//! work still in flight, and wipes the backing store. Consumers inject a
//! [`SessionStore`] implementation; the in-memory default covers tests and
//! embedding, while the CLI contributes a file-backed store so the token
//! and last active view survive between invocations.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::ApiError;

/// The serializable portion of a session.
///
/// Stored verbatim by [`SessionStore`] implementations. The token is kept
/// in the clear here; in-memory copies are wrapped in [`SecretString`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Bearer token obtained from login, if a session is active.
    #[serde(default)]
    pub access_token: Option<String>,
    /// The last view the operator had open.
    #[serde(default)]
    pub last_view: Option<String>,
}

/// Backing storage for session state.
///
/// Semantics follow browser local storage: best-effort, no error
/// reporting to callers. Implementations log failures and carry on.
pub trait SessionStore: Send + Sync {
    /// Load the persisted session; empty if nothing was stored.
    fn load(&self) -> PersistedSession;
    /// Persist the session, replacing whatever was stored.
    fn save(&self, session: &PersistedSession);
    /// Remove the persisted session entirely.
    fn clear(&self);
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: Mutex<PersistedSession>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> PersistedSession {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, session: &PersistedSession) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = session.clone();
    }

    fn clear(&self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = PersistedSession::default();
    }
}

/// Live session handle shared by a client and all of its resource handles.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    store: Arc<dyn SessionStore>,
    token: RwLock<Option<SecretString>>,
    last_view: RwLock<Option<String>>,
    /// Cancelled on `end`; a fresh token is installed for the next session.
    cancel: RwLock<CancellationToken>,
}

impl Session {
    /// Create a session handle, restoring any state the store holds.
    #[must_use]
    pub fn restore(store: Arc<dyn SessionStore>) -> Self {
        let persisted = store.load();
        Self {
            inner: Arc::new(SessionInner {
                store,
                token: RwLock::new(persisted.access_token.map(SecretString::from)),
                last_view: RwLock::new(persisted.last_view),
                cancel: RwLock::new(CancellationToken::new()),
            }),
        }
    }

    /// Install a bearer token after a successful login and persist it.
    pub fn begin(&self, token: SecretString) {
        *write(&self.inner.token) = Some(token);
        self.persist();
    }

    /// Tear the session down: clear the token, wipe the store, and cancel
    /// anything still in flight. A fresh cancellation token is installed
    /// so a subsequent login starts clean.
    pub fn end(&self) {
        *write(&self.inner.token) = None;
        *write(&self.inner.last_view) = None;
        self.inner.store.clear();

        let mut cancel = write(&self.inner.cancel);
        cancel.cancel();
        *cancel = CancellationToken::new();
    }

    /// Whether a bearer token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        read(&self.inner.token).is_some()
    }

    /// The current bearer token, if any.
    #[must_use]
    pub fn bearer(&self) -> Option<SecretString> {
        read(&self.inner.token).clone()
    }

    /// The current bearer token, or `NotAuthenticated`.
    ///
    /// Callers of authenticated endpoints check this before issuing any
    /// request, so a missing token never produces a network call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] when no token is present.
    pub fn require_token(&self) -> Result<SecretString, ApiError> {
        self.bearer().ok_or(ApiError::NotAuthenticated)
    }

    /// Record the view the operator currently has open and persist it.
    pub fn set_last_view(&self, view: &str) {
        *write(&self.inner.last_view) = Some(view.to_string());
        self.persist();
    }

    /// The last recorded view, if any.
    #[must_use]
    pub fn last_view(&self) -> Option<String> {
        read(&self.inner.last_view).clone()
    }

    /// A clone of the cancellation token guarding in-flight requests for
    /// the current session generation.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        read(&self.inner.cancel).clone()
    }

    fn persist(&self) {
        let snapshot = PersistedSession {
            access_token: read(&self.inner.token)
                .as_ref()
                .map(|t| t.expose_secret().to_string()),
            last_view: read(&self.inner.last_view).clone(),
        };
        self.inner.store.save(&snapshot);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("last_view", &self.last_view())
            .finish_non_exhaustive()
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
