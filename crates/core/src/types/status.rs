//! Status enums shared by console resources.
//!
//! The remote service is loose about casing and spelling for these values,
//! so every enum carries a tolerant `from_wire` constructor with a
//! documented fallback. Serialization always emits the canonical lowercase
//! wire token.

use serde::{Deserialize, Serialize};

/// Activation status of a record (admin, role, fee).
///
/// Falls back to `Active` for unknown input: the backend omits the field
/// on records it considers live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    /// Parse a wire token ("active"/"inactive", any case) or a boolean-ish
    /// string ("true"/"false"). Unknown input maps to `Active`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "inactive" | "disabled" | "false" => Self::Inactive,
            _ => Self::Active,
        }
    }

    /// The lowercase wire token.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Whether the record is active.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Payment channel a fee applies to.
///
/// Unknown or absent input maps to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeeChannel {
    #[default]
    All,
    App,
    Ussd,
    Web,
    Pos,
}

impl FeeChannel {
    /// Parse a wire token, case-insensitively. Unknown input maps to `All`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "app" | "mobile" => Self::App,
            "ussd" => Self::Ussd,
            "web" => Self::Web,
            "pos" | "agent" => Self::Pos,
            _ => Self::All,
        }
    }

    /// The lowercase wire token.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::App => "app",
            Self::Ussd => "ussd",
            Self::Web => "web",
            Self::Pos => "pos",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All channels",
            Self::App => "Mobile app",
            Self::Ussd => "USSD",
            Self::Web => "Web",
            Self::Pos => "POS",
        }
    }
}

/// Review status of a KYC application.
///
/// Unknown or absent input maps to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl KycStatus {
    /// Parse a wire token, case-insensitively. Unknown input maps to
    /// `Pending`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "approved" | "verified" => Self::Approved,
            "rejected" | "declined" => Self::Rejected,
            _ => Self::Pending,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}
