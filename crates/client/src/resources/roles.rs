//! Roles and permissions resource.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::instrument;

use ismartpay_core::{permission_label, PermissionId, RecordStatus, RoleId};

use crate::envelope::ExtractRule;
use crate::error::ApiError;
use crate::fields::{pick_bool, pick_str, pick_str_list, pick_timestamp, pick_u64};
use crate::http::ConsoleClient;

use super::{fetch_list, ListResource};

/// Canonical role record.
///
/// Permission ids are expected to be members of the fixed catalog in
/// `ismartpay_core::catalog`; membership is not enforced, matching the
/// service's own consoles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRecord {
    pub id: RoleId,
    pub name: String,
    pub description: String,
    pub permissions: Vec<PermissionId>,
    pub user_count: u64,
    pub status: RecordStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl RoleRecord {
    /// Human labels for the role's permissions, unknown ids rendered as
    /// their raw id.
    #[must_use]
    pub fn permission_labels(&self) -> Vec<&str> {
        self.permissions
            .iter()
            .map(|p| permission_label(p.as_str()))
            .collect()
    }
}

pub(crate) struct RoleResource;

impl ListResource for RoleResource {
    type Record = RoleRecord;

    const LIST_PATH: &'static str = "/api/admin/roles";
    const LIST_OP: &'static str = "load roles";
    const ENVELOPE: &'static [ExtractRule] = &[
        ExtractRule::BareArray,
        ExtractRule::Field("roles"),
        ExtractRule::Field("data"),
    ];

    fn from_raw(raw: &Value) -> RoleRecord {
        let status = pick_str(raw, &["status"]).map_or_else(
            || {
                if pick_bool(raw, &["is_active", "isActive"], true) {
                    RecordStatus::Active
                } else {
                    RecordStatus::Inactive
                }
            },
            |s| RecordStatus::from_wire(&s),
        );

        RoleRecord {
            id: RoleId::new(pick_str(raw, &["id", "_id"]).unwrap_or_default()),
            name: pick_str(raw, &["name"]).unwrap_or_default(),
            description: pick_str(raw, &["description"]).unwrap_or_default(),
            permissions: pick_str_list(raw, &["permissions", "permission_ids", "permissionIds"])
                .into_iter()
                .map(PermissionId::new)
                .collect(),
            user_count: pick_u64(raw, &["user_count", "userCount", "users"]).unwrap_or(0),
            status,
            created_at: pick_timestamp(raw, &["created_at", "createdAt"]),
            updated_at: pick_timestamp(raw, &["updated_at", "updatedAt"]),
        }
    }
}

/// Handle for the roles resource (read-only).
pub struct RolesApi {
    client: ConsoleClient,
}

impl RolesApi {
    pub(crate) fn new(client: ConsoleClient) -> Self {
        Self { client }
    }

    /// Fetch the role list.
    ///
    /// # Errors
    ///
    /// Fails without a network call when no session token is present.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<RoleRecord>, ApiError> {
        fetch_list::<RoleResource>(&self.client).await
    }
}
