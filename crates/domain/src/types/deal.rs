//! Deal record and pipeline stage types

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline stage of a deal.
///
/// The pipeline is a fixed linear ordering of five working stages followed
/// by three terminal stages. The terminal stages share one ordinal position
/// (one past `Negotiation`) so no terminal is "earlier" than another, and
/// they are reachable only from `Negotiation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    Incoming,
    Discussions,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
    Abandoned,
}

impl DealStage {
    /// Every stage, in pipeline order.
    pub const ALL: [Self; 8] = [
        Self::Incoming,
        Self::Discussions,
        Self::Qualified,
        Self::Proposal,
        Self::Negotiation,
        Self::Won,
        Self::Lost,
        Self::Abandoned,
    ];

    /// Wire name used in persistence and CSV import/export.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Discussions => "discussions",
            Self::Qualified => "qualified",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Abandoned => "abandoned",
        }
    }

    /// Parse a wire name. Unknown strings yield `None`; callers treat an
    /// unknown stage as having no required fields and no successor.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == value)
    }

    /// Ordinal position in the pipeline. All terminals share one position.
    pub const fn position(self) -> u8 {
        match self {
            Self::Incoming => 0,
            Self::Discussions => 1,
            Self::Qualified => 2,
            Self::Proposal => 3,
            Self::Negotiation => 4,
            Self::Won | Self::Lost | Self::Abandoned => 5,
        }
    }

    /// The single linear successor. `None` for `Negotiation` (its three
    /// successors are the terminal stages, entered via an explicit move)
    /// and for the terminal stages themselves.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Incoming => Some(Self::Discussions),
            Self::Discussions => Some(Self::Qualified),
            Self::Qualified => Some(Self::Proposal),
            Self::Proposal => Some(Self::Negotiation),
            Self::Negotiation | Self::Won | Self::Lost | Self::Abandoned => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Abandoned)
    }

    /// The one stage terminal stages are reachable from.
    pub const fn is_pre_terminal(self) -> bool {
        matches!(self, Self::Negotiation)
    }
}

impl fmt::Display for DealStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a stage-scoped deal field.
///
/// Presence semantics differ by type: text must be non-blank, while a
/// boolean counts as present once it is set at all — an explicit `false`
/// is a value, not an absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl FieldValue {
    /// Whether this value satisfies a required-field check.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::Bool(_) | Self::Number(_) | Self::Date(_) => true,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// A deal record.
///
/// Fields required by earlier stages stay on the record after advancing;
/// nothing is deleted on a transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub title: String,
    pub stage: DealStage,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    /// Create a deal in the first pipeline stage.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            stage: DealStage::Incoming,
            fields: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style helper for seeding fields.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
        self.updated_at = Utc::now();
    }

    /// Whether the named field is set to a non-empty value.
    pub fn field_present(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(FieldValue::is_present)
    }
}
