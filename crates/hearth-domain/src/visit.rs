//! Visit domain types.

use serde::{Deserialize, Serialize};

/// Scheduling state of a site visit.
///
/// Canonical vocabulary is {pending, confirmed, rejected}. The upstream data
/// used "completed"/"cancelled" in some surfaces; [`VisitStatus::parse`]
/// accepts those as aliases so stored rows and older callers keep working,
/// but the wire format always emits the canonical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl VisitStatus {
    /// Parse a status string, mapping legacy aliases onto the canonical set.
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "pending" => Some(Self::Pending),
            "confirmed" | "completed" => Some(Self::Confirmed),
            "rejected" | "cancelled" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        }
    }
}
