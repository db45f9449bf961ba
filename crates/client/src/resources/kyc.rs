//! KYC applications resource (read-only).

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::instrument;

use ismartpay_core::{KycId, KycStatus};

use crate::envelope::ExtractRule;
use crate::error::ApiError;
use crate::fields::{pick_str, pick_timestamp};
use crate::http::ConsoleClient;

use super::{fetch_list, ListResource};

/// Canonical KYC application record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KycApplication {
    pub id: KycId,
    pub applicant: String,
    pub email: String,
    /// Kind of document submitted (passport, national id, ...), as the
    /// backend spells it.
    pub document_kind: String,
    pub status: KycStatus,
    pub submitted_at: Option<DateTime<Utc>>,
}

pub(crate) struct KycResource;

impl ListResource for KycResource {
    type Record = KycApplication;

    const LIST_PATH: &'static str = "/api/auth/profile/kyc-docs";
    const LIST_OP: &'static str = "load KYC applications";
    const ENVELOPE: &'static [ExtractRule] = &[
        ExtractRule::BareArray,
        ExtractRule::Field("docs"),
        ExtractRule::Field("data"),
    ];

    fn from_raw(raw: &Value) -> KycApplication {
        KycApplication {
            id: KycId::new(pick_str(raw, &["id", "_id"]).unwrap_or_default()),
            applicant: pick_str(raw, &["applicant_name", "applicantName", "full_name", "name"])
                .unwrap_or_default(),
            email: pick_str(raw, &["email"]).unwrap_or_default(),
            document_kind: pick_str(raw, &["document_type", "documentType", "doc_type", "kind"])
                .unwrap_or_else(|| "unknown".to_string()),
            status: pick_str(raw, &["status"])
                .map(|s| KycStatus::from_wire(&s))
                .unwrap_or_default(),
            submitted_at: pick_timestamp(
                raw,
                &["submitted_at", "submittedAt", "created_at", "createdAt"],
            ),
        }
    }
}

/// Handle for the KYC applications resource (read-only).
pub struct KycApi {
    client: ConsoleClient,
}

impl KycApi {
    pub(crate) fn new(client: ConsoleClient) -> Self {
        Self { client }
    }

    /// Fetch the KYC application list.
    ///
    /// # Errors
    ///
    /// Fails without a network call when no session token is present.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<KycApplication>, ApiError> {
        fetch_list::<KycResource>(&self.client).await
    }
}
