//! Admin accounts resource.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::instrument;

use ismartpay_core::{AdminId, RoleId};

use crate::envelope::ExtractRule;
use crate::error::ApiError;
use crate::fields::{pick, pick_bool, pick_str, pick_timestamp};
use crate::http::ConsoleClient;

use super::{fetch_list, reject_error_body, ListResource, SubmitGuard};

const LIST_PATH: &str = "/api/admin/admins";

/// Reference to the role an admin holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRef {
    pub id: RoleId,
    pub name: String,
}

/// Canonical admin account record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRecord {
    pub id: AdminId,
    /// Display name derived from first/last name, falling back to the
    /// email address.
    pub username: String,
    pub email: String,
    pub role: Option<RoleRef>,
    pub created_at: Option<DateTime<Utc>>,
    /// Defaults to true when the backend omits the flag.
    pub active: bool,
}

pub(crate) struct AdminResource;

impl ListResource for AdminResource {
    type Record = AdminRecord;

    const LIST_PATH: &'static str = LIST_PATH;
    const LIST_OP: &'static str = "load admins";
    const ENVELOPE: &'static [ExtractRule] = &[
        ExtractRule::BareArray,
        ExtractRule::Field("admins"),
        ExtractRule::Field("data"),
    ];

    fn from_raw(raw: &Value) -> AdminRecord {
        let email = pick_str(raw, &["email"]).unwrap_or_default();

        let first = pick_str(raw, &["first_name", "firstName"]).unwrap_or_default();
        let last = pick_str(raw, &["last_name", "lastName"]).unwrap_or_default();
        let full_name = format!("{} {}", first.trim(), last.trim())
            .trim()
            .to_string();
        let username = if full_name.is_empty() {
            if email.is_empty() {
                "unknown".to_string()
            } else {
                email.clone()
            }
        } else {
            full_name
        };

        AdminRecord {
            id: AdminId::new(pick_str(raw, &["id", "_id"]).unwrap_or_default()),
            username,
            email,
            role: role_ref(raw),
            created_at: pick_timestamp(raw, &["created_at", "createdAt"]),
            active: pick_bool(raw, &["is_active", "isActive"], true),
        }
    }
}

/// Role reference from a raw admin record.
///
/// Tolerates the nested `{"id", "name"}` object as well as a bare role id
/// under `role`, `roleId`, or `role_id`; a bare id doubles as the name.
fn role_ref(raw: &Value) -> Option<RoleRef> {
    match pick(raw, &["role", "roleId", "role_id"])? {
        Value::Object(_) => {
            let role = pick(raw, &["role"])?;
            let id = pick_str(role, &["id", "_id"])?;
            let name = pick_str(role, &["name"]).unwrap_or_else(|| id.clone());
            Some(RoleRef {
                id: RoleId::new(id),
                name,
            })
        }
        Value::String(s) if !s.is_empty() => Some(RoleRef {
            id: RoleId::new(s.clone()),
            name: s.clone(),
        }),
        Value::Number(n) => Some(RoleRef {
            id: RoleId::new(n.to_string()),
            name: n.to_string(),
        }),
        _ => None,
    }
}

/// Handle for the admins resource.
///
/// Carries its own in-flight guard; two handles on the same client do not
/// share one.
pub struct AdminsApi {
    client: ConsoleClient,
    guard: SubmitGuard,
}

impl AdminsApi {
    pub(crate) fn new(client: ConsoleClient) -> Self {
        Self {
            client,
            guard: SubmitGuard::default(),
        }
    }

    /// Fetch the admin list.
    ///
    /// # Errors
    ///
    /// Fails without a network call when no session token is present.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<AdminRecord>, ApiError> {
        fetch_list::<AdminResource>(&self.client).await
    }

    /// Reassign an admin's role, then re-fetch the list.
    ///
    /// # Errors
    ///
    /// Returns the first failure of: in-flight guard, missing token, the
    /// PUT itself, an error-shaped success body, or the refresh GET.
    #[instrument(skip(self), fields(admin_id = %admin_id, role_id = %role_id))]
    pub async fn assign_role(
        &self,
        admin_id: &AdminId,
        role_id: &RoleId,
    ) -> Result<Vec<AdminRecord>, ApiError> {
        let _permit = self.guard.try_begin()?;
        self.client.session().require_token()?;

        let path = format!("{LIST_PATH}/{admin_id}/role");
        let body = self
            .client
            .put_json(&path, &json!({ "roleId": role_id }), "update admin role")
            .await?;
        reject_error_body(&body, "update admin role")?;

        self.list().await
    }

    /// Delete an admin account, then re-fetch the list.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`Self::assign_role`].
    #[instrument(skip(self), fields(admin_id = %admin_id))]
    pub async fn remove(&self, admin_id: &AdminId) -> Result<Vec<AdminRecord>, ApiError> {
        let _permit = self.guard.try_begin()?;
        self.client.session().require_token()?;

        let path = format!("{LIST_PATH}/{admin_id}");
        let body = self.client.delete_json(&path, "delete admin").await?;
        reject_error_body(&body, "delete admin")?;

        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_full_record() {
        let raw = json!({
            "id": "adm-1",
            "first_name": "Ada",
            "last_name": "Obi",
            "email": "ada@ismartpay.test",
            "role": {"id": "r-2", "name": "Compliance"},
            "created_at": "2025-01-10T08:30:00Z",
            "is_active": false
        });

        let record = AdminResource::from_raw(&raw);
        assert_eq!(record.id.as_str(), "adm-1");
        assert_eq!(record.username, "Ada Obi");
        assert_eq!(record.email, "ada@ismartpay.test");
        let role = record.role.expect("role");
        assert_eq!(role.id.as_str(), "r-2");
        assert_eq!(role.name, "Compliance");
        assert!(!record.active);
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_from_raw_camel_case_variants() {
        let raw = json!({
            "_id": 42,
            "firstName": "Seyi",
            "lastName": "Banjo",
            "email": "seyi@ismartpay.test",
            "createdAt": "2025-02-01T00:00:00Z",
            "isActive": true
        });

        let record = AdminResource::from_raw(&raw);
        assert_eq!(record.id.as_str(), "42");
        assert_eq!(record.username, "Seyi Banjo");
        assert!(record.active);
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_username_falls_back_to_email() {
        let raw = json!({"id": "adm-2", "email": "ops@ismartpay.test"});
        let record = AdminResource::from_raw(&raw);
        assert_eq!(record.username, "ops@ismartpay.test");
    }

    #[test]
    fn test_empty_record_never_fails() {
        let record = AdminResource::from_raw(&json!({}));
        assert!(record.id.is_empty());
        assert_eq!(record.username, "unknown");
        assert_eq!(record.email, "");
        assert!(record.role.is_none());
        assert!(record.created_at.is_none());
        assert!(record.active);
    }

    #[test]
    fn test_role_ref_from_bare_string() {
        let raw = json!({"id": "adm-3", "roleId": "r-7"});
        let role = AdminResource::from_raw(&raw).role.expect("role");
        assert_eq!(role.id.as_str(), "r-7");
        assert_eq!(role.name, "r-7");
    }

    #[test]
    fn test_role_ref_object_without_name() {
        let raw = json!({"id": "adm-4", "role": {"id": "r-9"}});
        let role = AdminResource::from_raw(&raw).role.expect("role");
        assert_eq!(role.id.as_str(), "r-9");
        assert_eq!(role.name, "r-9");
    }

    #[test]
    fn test_non_record_input_degrades_to_defaults() {
        // A scalar in the list still maps to exactly one canonical record.
        let record = AdminResource::from_raw(&json!("garbage"));
        assert!(record.id.is_empty());
        assert!(record.active);
    }
}
