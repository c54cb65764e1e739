//! Document approval domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three independently tracked document categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSlot {
    /// Profile photo.
    Photo,
    /// Front side of the identity document.
    IdFront,
    /// Back side of the identity document.
    IdBack,
}

impl DocumentSlot {
    /// All slots, in upload-form order.
    pub const ALL: [Self; 3] = [Self::Photo, Self::IdFront, Self::IdBack];

    /// Returns the wire name of the slot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::IdFront => "document_front",
            Self::IdBack => "document_back",
        }
    }

    /// Parses a slot from its wire name.
    ///
    /// The legacy backend used `foto` / `documentFrom` / `documentBack`;
    /// those names are accepted as aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "photo" | "foto" => Some(Self::Photo),
            "document_front" | "documentFrom" => Some(Self::IdFront),
            "document_back" | "documentBack" => Some(Self::IdBack),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approval status of a single document slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotStatus {
    /// No document has been uploaded yet.
    #[default]
    Unsubmitted,
    /// A document is awaiting an admin decision.
    Pending,
    /// The document was approved.
    Approved,
    /// The document was rejected; the user may re-upload.
    Rejected,
}

impl SlotStatus {
    /// Returns the wire string, or `None` for the unsubmitted state.
    ///
    /// The backend stores no value at all until the first upload.
    #[must_use]
    pub const fn to_wire(self) -> Option<&'static str> {
        match self {
            Self::Unsubmitted => None,
            Self::Pending => Some("PENDING"),
            Self::Approved => Some("APPROVED"),
            Self::Rejected => Some("REJECTED"),
        }
    }

    /// Parses the wire representation; absent means unsubmitted.
    #[must_use]
    pub fn from_wire(s: Option<&str>) -> Self {
        match s {
            Some("PENDING") => Self::Pending,
            Some("APPROVED") => Self::Approved,
            Some("REJECTED") => Self::Rejected,
            _ => Self::Unsubmitted,
        }
    }

    /// Returns true if the slot holds a terminal admin decision.
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

/// Outcome of an admin decision on a document slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DecisionOutcome {
    /// Approve the document.
    Approved,
    /// Reject the document.
    Rejected,
}

impl From<DecisionOutcome> for SlotStatus {
    fn from(outcome: DecisionOutcome) -> Self {
        match outcome {
            DecisionOutcome::Approved => Self::Approved,
            DecisionOutcome::Rejected => Self::Rejected,
        }
    }
}

/// The three-slot approval state embedded on a user record.
///
/// The slots are independent: mutating one never touches the other two.
/// The whole structure is persisted as a single field on the user record,
/// so every change must go through one read-modify-write update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentApprovalState {
    /// Profile photo slot.
    #[serde(default)]
    pub photo: SlotStatus,
    /// Identity document, front side.
    #[serde(default)]
    pub id_front: SlotStatus,
    /// Identity document, back side.
    #[serde(default)]
    pub id_back: SlotStatus,
}

impl DocumentApprovalState {
    /// Returns the status of one slot.
    #[must_use]
    pub const fn slot(&self, slot: DocumentSlot) -> SlotStatus {
        match slot {
            DocumentSlot::Photo => self.photo,
            DocumentSlot::IdFront => self.id_front,
            DocumentSlot::IdBack => self.id_back,
        }
    }

    /// Sets the status of exactly one slot.
    pub const fn set_slot(&mut self, slot: DocumentSlot, status: SlotStatus) {
        match slot {
            DocumentSlot::Photo => self.photo = status,
            DocumentSlot::IdFront => self.id_front = status,
            DocumentSlot::IdBack => self.id_back = status,
        }
    }

    /// Returns true if any slot is awaiting a decision.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        DocumentSlot::ALL
            .iter()
            .any(|&s| self.slot(s) == SlotStatus::Pending)
    }

    /// Counts the slots currently in the given status.
    #[must_use]
    pub fn count(&self, status: SlotStatus) -> usize {
        DocumentSlot::ALL
            .iter()
            .filter(|&&s| self.slot(s) == status)
            .count()
    }
}

/// Aggregate document counts across all users, for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of user records inspected.
    pub total_users: usize,
    /// Slots awaiting a decision.
    pub pending: usize,
    /// Approved slots.
    pub approved: usize,
    /// Rejected slots.
    pub rejected: usize,
}
