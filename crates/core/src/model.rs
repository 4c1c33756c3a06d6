//! Career log documents and their derived views
//!
//! Field names serialize in camelCase, matching the documents the client
//! application posts and reads back.

use crate::types::{RecordId, Token};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point in time used throughout the model
pub type Timestamp = DateTime<Utc>;

/// Free-form per-period or per-event attributes
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// One time-bounded period of a career
///
/// Everything besides the bounds (funds, reputation, science earned, ...) is
/// carried opaquely in `metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerLogEntry {
    /// Start of the period
    pub start_date: Timestamp,
    /// End of the period
    pub end_date: Timestamp,
    /// Remaining period fields
    #[serde(flatten)]
    pub metadata: Metadata,
}

impl CareerLogEntry {
    /// Create a period with no metadata
    pub fn new(start_date: Timestamp, end_date: Timestamp) -> Self {
        Self {
            start_date,
            end_date,
            metadata: Metadata::new(),
        }
    }

    /// Attach a metadata field
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// True for a zero-length period whose metadata carries nothing
    ///
    /// Nulls, zeros, `false`, empty strings and empty containers are blank.
    /// A period spanning any time is never empty.
    pub fn is_empty(&self) -> bool {
        self.start_date == self.end_date && self.metadata.values().all(is_blank)
    }
}

fn is_blank(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Contract lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractEventType {
    /// Contract accepted
    Accept,
    /// Contract completed
    Complete,
    /// Contract failed
    Fail,
    /// Contract cancelled
    Cancel,
}

/// A recorded contract event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEventEntry {
    /// Contract key, compared to the milestone catalog ignoring case
    pub internal_name: String,
    /// Transition kind
    #[serde(rename = "type")]
    pub event_type: ContractEventType,
    /// When the transition happened
    pub date: Timestamp,
}

impl ContractEventEntry {
    /// Create a contract event
    pub fn new(internal_name: impl Into<String>, event_type: ContractEventType, date: Timestamp) -> Self {
        Self {
            internal_name: internal_name.into(),
            event_type,
            date,
        }
    }
}

/// A recorded facility event, stored and returned as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityEventEntry {
    /// Facility name
    pub facility: String,
    /// When the event happened
    pub date: Timestamp,
    /// Remaining event fields
    #[serde(flatten)]
    pub attributes: Metadata,
}

impl FacilityEventEntry {
    /// Create a facility event with no attributes
    pub fn new(facility: impl Into<String>, date: Timestamp) -> Self {
        Self {
            facility: facility.into(),
            date,
            attributes: Metadata::new(),
        }
    }
}

/// The persisted career log document
///
/// `id` and `token` are unset on inbound documents and always set on stored
/// ones. `start_date`/`end_date` mirror the first and last entry at the time
/// of the last write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub career_log_entries: Option<Vec<CareerLogEntry>>,
    #[serde(default)]
    pub contract_event_entries: Option<Vec<ContractEventEntry>>,
    #[serde(default)]
    pub facility_event_entries: Option<Vec<FacilityEventEntry>>,
}

impl CareerLog {
    /// Shape an inbound document into a new record under `token`
    ///
    /// Entries are trusted to be in chronological order. With no entries the
    /// bounds stay unset. Events are copied without checking them against the
    /// milestone catalog. The id is left for the store to assign.
    pub fn shape_new(input: CareerLog, token: Token) -> CareerLog {
        let mut log = CareerLog {
            id: None,
            token: Some(token),
            name: input.name,
            contract_event_entries: input.contract_event_entries,
            facility_event_entries: input.facility_event_entries,
            ..CareerLog::default()
        };

        if let Some(entries) = input.career_log_entries {
            if let Some((start, end)) = crate::timeline::timeline_bounds(&entries) {
                log.start_date = Some(start);
                log.end_date = Some(end);
                log.career_log_entries = Some(entries);
            }
        }

        log
    }

    /// Entries as a slice, empty when absent
    pub fn entries(&self) -> &[CareerLogEntry] {
        self.career_log_entries.as_deref().unwrap_or_default()
    }
}

/// Inbound update payload
///
/// Periods, contract events and facility events replace the stored ones
/// wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerLogDto {
    #[serde(default)]
    pub periods: Vec<CareerLogEntry>,
    #[serde(default)]
    pub contract_events: Option<Vec<ContractEventEntry>>,
    #[serde(default)]
    pub facility_events: Option<Vec<FacilityEventEntry>>,
}

impl CareerLogDto {
    /// Drop a single leading period that carries no content
    ///
    /// Client-side editing leaves such a placeholder in front of the real
    /// periods. Returns whether one was removed.
    pub fn trim_empty_period(&mut self) -> bool {
        match self.periods.first() {
            Some(first) if first.is_empty() => {
                self.periods.remove(0);
                true
            }
            _ => false,
        }
    }
}

/// A completed milestone on a career's timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEvent {
    /// Catalog key as spelled in the catalog
    pub contract_internal_name: String,
    /// Human-readable milestone name
    pub contract_display_name: String,
    /// Completion date
    pub date: Timestamp,
}

/// Summary row for career listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

impl From<&CareerLog> for CareerListItem {
    fn from(log: &CareerLog) -> Self {
        Self {
            id: log.id,
            name: log.name.clone(),
            start_date: log.start_date,
            end_date: log.end_date,
        }
    }
}
