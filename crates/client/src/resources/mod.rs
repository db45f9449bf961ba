//! Per-resource adapters over the remote-list synchronizer.
//!
//! Every resource follows the same shape: an ordered envelope policy, a
//! total raw-record mapper, and operations that end in a full list
//! re-fetch. Mutations never patch the in-memory list optimistically; the
//! refreshed server state is the only source of truth
//! (mutate-then-refresh).

pub mod admins;
pub mod fees;
pub mod kyc;
pub mod roles;

pub use admins::{AdminRecord, AdminsApi, RoleRef};
pub use fees::{FeeDraft, FeeForm, FeeKind, FeeRecord, FeeValue, FeesApi};
pub use kyc::{KycApi, KycApplication};
pub use roles::{RoleRecord, RolesApi};

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;

use crate::envelope::{extract_list, ExtractRule};
use crate::error::ApiError;
use crate::http::ConsoleClient;

/// A list resource the synchronizer knows how to fetch and normalize.
pub(crate) trait ListResource {
    /// Canonical record type produced by the mapper.
    type Record;

    /// GET path of the list endpoint.
    const LIST_PATH: &'static str;
    /// Operation name used in fallback error messages.
    const LIST_OP: &'static str;
    /// Envelope probe policy for this endpoint.
    const ENVELOPE: &'static [ExtractRule];

    /// Project one raw record into its canonical form. Total: never fails,
    /// never drops a record.
    fn from_raw(raw: &Value) -> Self::Record;
}

/// Fetch, normalize, and map a list resource.
///
/// Requires an active session token before any request is issued.
pub(crate) async fn fetch_list<R: ListResource>(
    client: &ConsoleClient,
) -> Result<Vec<R::Record>, ApiError> {
    client.session().require_token()?;
    let body = client.get_json(R::LIST_PATH, R::LIST_OP).await?;
    Ok(extract_list(&body, R::ENVELOPE).iter().map(R::from_raw).collect())
}

/// Reject HTTP-success responses whose body is error-shaped.
///
/// The backend sometimes answers 200 with `{"error": true}` or
/// `{"success": false}`; status-code-only checking would misclassify
/// those as successes. This check is a best-effort heuristic over
/// observed backend behavior, not a confirmed contract.
pub(crate) fn reject_error_body(body: &Value, op: &str) -> Result<(), ApiError> {
    let error_flag = body.get("error").and_then(Value::as_bool).unwrap_or(false);
    let success_flag = body.get("success").and_then(Value::as_bool).unwrap_or(true);

    if error_flag || !success_flag {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|msg| !msg.is_empty())
            .map_or_else(|| format!("{op} failed"), str::to_string);
        return Err(ApiError::Rejected { message });
    }

    Ok(())
}

/// In-flight guard for mutating submissions.
///
/// One guard per resource handle; acquiring while a permit is live fails
/// fast instead of issuing a duplicate request.
#[derive(Debug, Default)]
pub(crate) struct SubmitGuard {
    busy: AtomicBool,
}

impl SubmitGuard {
    /// Acquire the guard for one submission.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SubmissionInFlight`] when a permit is already
    /// outstanding.
    pub(crate) fn try_begin(&self) -> Result<SubmitPermit<'_>, ApiError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ApiError::SubmissionInFlight)?;
        Ok(SubmitPermit { guard: self })
    }
}

/// RAII permit; releases the guard on drop, including on error paths.
pub(crate) struct SubmitPermit<'a> {
    guard: &'a SubmitGuard,
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reject_error_body_error_true() {
        let body = json!({"error": true, "message": "duplicate fee"});
        let err = reject_error_body(&body, "create fee").expect_err("rejected");
        assert_eq!(err.to_string(), "duplicate fee");
    }

    #[test]
    fn test_reject_error_body_success_false() {
        let body = json!({"success": false});
        let err = reject_error_body(&body, "create fee").expect_err("rejected");
        assert_eq!(err.to_string(), "create fee failed");
    }

    #[test]
    fn test_reject_error_body_accepts_success_shapes() {
        assert!(reject_error_body(&json!({"success": true}), "op").is_ok());
        assert!(reject_error_body(&json!({"id": "fee-1"}), "op").is_ok());
        assert!(reject_error_body(&Value::Null, "op").is_ok());
        // Non-boolean "error" payloads are not treated as failures.
        assert!(reject_error_body(&json!({"error": "code-7"}), "op").is_ok());
    }

    #[test]
    fn test_submit_guard_blocks_second_submit() {
        let guard = SubmitGuard::default();
        let permit = guard.try_begin().expect("first permit");
        assert!(matches!(
            guard.try_begin(),
            Err(ApiError::SubmissionInFlight)
        ));
        drop(permit);
        assert!(guard.try_begin().is_ok());
    }

    #[test]
    fn test_submit_guard_releases_on_drop_in_error_path() {
        let guard = SubmitGuard::default();
        {
            let _permit = guard.try_begin().expect("permit");
            // Simulated failure: permit dropped while unwinding the call.
        }
        assert!(guard.try_begin().is_ok());
    }
}
