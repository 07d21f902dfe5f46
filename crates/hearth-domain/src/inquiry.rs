//! Inquiry domain types.

use serde::{Deserialize, Serialize};

/// Review state of a property inquiry.
///
/// An inquiry starts at `Pending` and transitions at most once to a terminal
/// state (`Approved` or `Rejected`). The transition itself lives in the api
/// service; this type only defines the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    Pending,
    Approved,
    Rejected,
}

impl InquiryStatus {
    pub fn from_str_value(v: &str) -> Option<Self> {
        match v {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// A terminal status accepts no further transitions.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}
