//! Fixed client-known catalogs.
//!
//! The remote service hands out opaque permission and service identifiers
//! without any accompanying metadata. Display names for both live in these
//! static tables, mirroring what the service's own consoles ship. Unknown
//! identifiers resolve to themselves so rendering never fails on a catalog
//! gap.

/// Permission catalog: (permission id, human label).
///
/// Role records carry sequences of these ids. Membership is not enforced
/// anywhere client-side; a role may reference an id missing from this
/// table and it will simply render as the raw id.
pub const PERMISSIONS: &[(&str, &str)] = &[
    ("users.view", "View users"),
    ("users.manage", "Manage users"),
    ("kyc.review", "Review KYC applications"),
    ("settlements.approve", "Approve settlements"),
    ("reconciliation.view", "View reconciliation"),
    ("fees.manage", "Configure fees"),
    ("roles.manage", "Manage roles and permissions"),
    ("transactions.monitor", "Monitor transactions"),
    ("fraud.monitor", "Monitor fraud and AML alerts"),
    ("disputes.manage", "Manage disputes"),
    ("reports.view", "View reports"),
];

/// Service lookup table: (service id, display name).
///
/// Fee records reference services by these opaque ids.
pub const SERVICES: &[(&str, &str)] = &[
    ("airtime", "Airtime top-up"),
    ("data_bundle", "Data bundles"),
    ("electricity", "Electricity"),
    ("cable_tv", "Cable TV"),
    ("money_transfer", "Money transfer"),
    ("bank_transfer", "Bank transfer"),
    ("bill_payment", "Bill payment"),
    ("merchant_payment", "Merchant payment"),
];

/// Resolve a permission id to its human label.
///
/// Unknown ids fall back to the raw id.
#[must_use]
pub fn permission_label(id: &str) -> &str {
    PERMISSIONS
        .iter()
        .find(|(pid, _)| *pid == id)
        .map_or(id, |(_, label)| *label)
}

/// Resolve a service id to its display name.
///
/// Unknown ids fall back to the raw id.
#[must_use]
pub fn service_display_name(id: &str) -> &str {
    SERVICES
        .iter()
        .find(|(sid, _)| *sid == id)
        .map_or(id, |(_, name)| *name)
}
