//! Fee configuration resource.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tracing::instrument;

use ismartpay_core::{service_display_name, FeeChannel, FeeId, RecordStatus, ServiceId};

use crate::envelope::ExtractRule;
use crate::error::ApiError;
use crate::fields::{pick_decimal, pick_str, pick_timestamp};
use crate::http::ConsoleClient;

use super::{fetch_list, reject_error_body, ListResource, SubmitGuard};

const FEES_PATH: &str = "/api/adminFees/fees";

/// Fee type discriminator as the operator selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeeKind {
    /// Percentage of the transaction amount.
    #[default]
    Rate,
    /// Fixed amount per transaction.
    Flat,
}

impl FeeKind {
    /// The wire token expected by the service (`type` field).
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::Flat => "flat_fee",
        }
    }

    /// Parse a wire token. Unknown input maps to `Rate`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "flat_fee" | "flat" => Self::Flat,
            _ => Self::Rate,
        }
    }
}

/// The fee's value: a percentage rate or a flat amount, never both.
///
/// The wire format keeps `rate` and `amount` as separate fields with the
/// inactive one nulled; this enum is the canonical in-memory form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeValue {
    /// Percentage of the transaction amount.
    Rate(Decimal),
    /// Fixed amount per transaction, in the platform currency.
    Flat(Decimal),
}

impl FeeValue {
    /// The discriminator for this value.
    #[must_use]
    pub const fn kind(&self) -> FeeKind {
        match self {
            Self::Rate(_) => FeeKind::Rate,
            Self::Flat(_) => FeeKind::Flat,
        }
    }

    /// Short human rendering: `1.5%` or `5.00 flat`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Rate(rate) => format!("{rate}%"),
            Self::Flat(amount) => format!("{amount} flat"),
        }
    }
}

/// Canonical fee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeRecord {
    pub id: FeeId,
    pub name: String,
    pub description: String,
    pub value: FeeValue,
    /// Opaque service the fee applies to; resolved for display via the
    /// static catalog.
    pub service: ServiceId,
    pub channel: FeeChannel,
    pub status: RecordStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl FeeRecord {
    /// Display name of the service, falling back to the raw id.
    #[must_use]
    pub fn service_name(&self) -> &str {
        service_display_name(self.service.as_str())
    }
}

pub(crate) struct FeeResource;

impl ListResource for FeeResource {
    type Record = FeeRecord;

    const LIST_PATH: &'static str = FEES_PATH;
    const LIST_OP: &'static str = "load fees";
    const ENVELOPE: &'static [ExtractRule] = &[
        ExtractRule::BareArray,
        ExtractRule::Field("fees"),
        ExtractRule::Field("data"),
    ];

    fn from_raw(raw: &Value) -> FeeRecord {
        // Absent or unknown type tokens canonicalize to a zero rate,
        // keeping the mapper total.
        let kind = pick_str(raw, &["type", "feeType", "fee_type"])
            .map(|t| FeeKind::from_wire(&t))
            .unwrap_or_default();
        let value = match kind {
            FeeKind::Rate => FeeValue::Rate(pick_decimal(raw, &["rate"])),
            FeeKind::Flat => FeeValue::Flat(pick_decimal(raw, &["amount"])),
        };

        FeeRecord {
            id: FeeId::new(pick_str(raw, &["id", "_id"]).unwrap_or_default()),
            name: pick_str(raw, &["name"]).unwrap_or_default(),
            description: pick_str(raw, &["description"]).unwrap_or_default(),
            value,
            service: ServiceId::new(
                pick_str(raw, &["service_id", "serviceId", "applied_to", "appliedTo"])
                    .unwrap_or_default(),
            ),
            channel: pick_str(raw, &["channel"])
                .map(|c| FeeChannel::from_wire(&c))
                .unwrap_or_default(),
            status: pick_str(raw, &["status"])
                .map(|s| RecordStatus::from_wire(&s))
                .unwrap_or_default(),
            created_at: pick_timestamp(raw, &["created_at", "createdAt"]),
        }
    }
}

/// Input for a new fee, field-for-field what the create form collects.
///
/// `rate` and `amount` stay strings here, exactly as typed; parsing and
/// exclusivity are settled by [`FeeDraft::validate`] and the payload
/// builder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeeDraft {
    pub name: String,
    pub description: String,
    pub fee_type: FeeKind,
    pub rate: String,
    pub amount: String,
    /// Service id the fee applies to (wire field `service_id`).
    pub applied_to: String,
    pub channel: FeeChannel,
    pub status: RecordStatus,
}

impl FeeDraft {
    /// Check required fields: name, description, and the one value field
    /// matching the fee type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("name is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(ApiError::Validation("description is required".to_string()));
        }
        match self.fee_type {
            FeeKind::Rate => {
                self.parsed(&self.rate, "rate")?;
            }
            FeeKind::Flat => {
                self.parsed(&self.amount, "amount")?;
            }
        }
        Ok(())
    }

    fn parsed(&self, input: &str, field: &str) -> Result<Decimal, ApiError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Validation(format!("{field} is required")));
        }
        trimmed
            .parse()
            .map_err(|_| ApiError::Validation(format!("{field} must be a number")))
    }

    /// Build the wire payload with the server's field names: internal
    /// `fee_type` becomes `type`, internal `applied_to` becomes
    /// `service_id`. The rate travels as a JSON number, the amount as the
    /// string the operator typed; whichever does not apply is an explicit
    /// null.
    ///
    /// # Errors
    ///
    /// Validates first; see [`FeeDraft::validate`].
    pub(crate) fn to_payload(&self) -> Result<Value, ApiError> {
        self.validate()?;

        let (rate, amount) = match self.fee_type {
            FeeKind::Rate => {
                let rate = self.parsed(&self.rate, "rate")?;
                (json!(rate.to_f64().unwrap_or_default()), Value::Null)
            }
            FeeKind::Flat => (Value::Null, json!(self.amount.trim())),
        };

        Ok(json!({
            "type": self.fee_type.as_wire(),
            "rate": rate,
            "amount": amount,
            "name": self.name.trim(),
            "description": self.description.trim(),
            "service_id": self.applied_to.trim(),
            "status": self.status.as_wire(),
            "channel": self.channel.as_wire(),
        }))
    }
}

/// Create-fee form state: draft plus the inline error, mirroring what the
/// operator sees.
///
/// One submission at a time; success resets the draft to defaults,
/// failure keeps the typed input intact for retry.
#[derive(Debug, Default)]
pub struct FeeForm {
    pub draft: FeeDraft,
    pub error: Option<String>,
}

impl FeeForm {
    /// Submit the draft through [`FeesApi::create`].
    ///
    /// On success the form resets and the refreshed list is returned; on
    /// failure the error message is retained alongside the untouched
    /// draft.
    ///
    /// # Errors
    ///
    /// Propagates the failure from [`FeesApi::create`].
    pub async fn submit(&mut self, fees: &FeesApi) -> Result<Vec<FeeRecord>, ApiError> {
        match fees.create(&self.draft).await {
            Ok(records) => {
                self.draft = FeeDraft::default();
                self.error = None;
                Ok(records)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

/// Handle for the fees resource.
pub struct FeesApi {
    client: ConsoleClient,
    guard: SubmitGuard,
}

impl FeesApi {
    pub(crate) fn new(client: ConsoleClient) -> Self {
        Self {
            client,
            guard: SubmitGuard::default(),
        }
    }

    /// Fetch the fee list.
    ///
    /// # Errors
    ///
    /// Fails without a network call when no session token is present.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<FeeRecord>, ApiError> {
        fetch_list::<FeeResource>(&self.client).await
    }

    /// Create a fee, then re-fetch the list.
    ///
    /// # Errors
    ///
    /// Returns the first failure of: in-flight guard, validation, missing
    /// token, the POST itself, an error-shaped success body, or the
    /// refresh GET.
    #[instrument(skip(self, draft), fields(fee_name = %draft.name))]
    pub async fn create(&self, draft: &FeeDraft) -> Result<Vec<FeeRecord>, ApiError> {
        let _permit = self.guard.try_begin()?;
        let payload = draft.to_payload()?;
        self.client.session().require_token()?;

        let body = self
            .client
            .post_json(FEES_PATH, &payload, "create fee")
            .await?;
        reject_error_body(&body, "create fee")?;

        self.list().await
    }
}
