//! Person record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique, caller-supplied member identifier
pub type MemberId = u64;

/// A dated free-form event attached to a member (birthday, anniversary, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Free-form label
    pub label: String,
}

/// One person record.
///
/// The registry entry keyed by `id` is the canonical instance. All
/// relationship fields store ids, never copies, so a rename on one member
/// never requires a propagation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Full name (required, non-empty)
    pub name: String,

    /// Gender (required, non-empty)
    pub gender: String,

    /// Birth date, `YYYY-MM-DD`
    pub birth_date: NaiveDate,

    /// Death date, `YYYY-MM-DD`, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,

    /// Phone number, 10-15 digits, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Parent ids (0..N entries; exactly-two is deliberately not enforced)
    #[serde(default)]
    pub parents: Vec<MemberId>,

    /// Child ids in link order
    #[serde(default)]
    pub children: Vec<MemberId>,

    /// Sibling ids in link order
    #[serde(default)]
    pub siblings: Vec<MemberId>,

    /// Spouse id; symmetric (a.spouse == b  <=>  b.spouse == a)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<MemberId>,

    /// Attached events in insertion order
    #[serde(default)]
    pub events: Vec<LifeEvent>,
}

/// Attributes a caller supplies to create a member.
///
/// Dates arrive as strings and are parsed during validation; relationship
/// fields are never caller-supplied — they are wired by the relationship
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDraft {
    pub id: MemberId,
    pub name: String,
    pub gender: String,
    pub birth_date: String,
    #[serde(default)]
    pub death_date: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl MemberDraft {
    /// Convenience constructor for the required fields
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        gender: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            gender: gender.into(),
            birth_date: birth_date.into(),
            death_date: None,
            phone: None,
        }
    }

    /// Sets the death date
    pub fn with_death_date(mut self, death_date: impl Into<String>) -> Self {
        self.death_date = Some(death_date.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Partial update for a member.
///
/// Only the fields listed here are updatable; any other key in a
/// deserialized patch document is silently ignored. Identity and
/// relationship fields are never patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub death_date: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl MemberPatch {
    /// True when no updatable field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.birth_date.is_none()
            && self.death_date.is_none()
            && self.phone.is_none()
    }
}
