//! # careerlog
//!
//! Career logs for a simulated space-program career: timestamped periods,
//! contract events and facility events, stored as documents and served back
//! with derived views.
//!
//! ## Quick Start
//!
//! ```ignore
//! use careerlog::prelude::*;
//!
//! let db = CareerLogs::ephemeral()?;
//!
//! // Create: bounds are derived, a token is issued
//! let created = db.careers.create(input)?;
//! let id = created.id.unwrap();
//! let token = created.token.clone().unwrap();
//!
//! // Read
//! let log = db.careers.get_by_id(&id)?;
//! let milestones = db.careers.get_milestone_timeline(&id)?;
//! let rows = db.careers.list_summaries()?;
//!
//! // Token-scoped update: periods and events are replaced wholesale
//! let updated = db.careers.update(&token, dto)?;
//! ```
//!
//! ## Derived data
//!
//! - `startDate`/`endDate` mirror the first and last period at write time
//! - The milestone timeline lists catalog milestones with a recorded
//!   completion, oldest first
//! - Summary rows are projected inside the store

#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod repository;

pub mod prelude;

// Re-export main entry points
pub use config::CareerLogDatabaseSettings;
pub use database::{CareerLogs, CareerLogsBuilder};
pub use error::{Error, Result};
pub use repository::CareerLogRepository;

// Re-export model types
pub use careerlog_core::{
    CareerListItem, CareerLog, CareerLogDto, CareerLogEntry, ContractEvent, ContractEventEntry,
    ContractEventType, FacilityEventEntry, Metadata, Milestone, MilestoneCatalog, RecordId,
    Timestamp, Token,
};

// Re-export storage
pub use careerlog_storage::{CareerLogStore, DurabilityMode, JournalStore, MemoryStore, ReplayStats};
