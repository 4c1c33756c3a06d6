//! Convenient imports for careerlog.
//!
//! ```ignore
//! use careerlog::prelude::*;
//!
//! let db = CareerLogs::ephemeral()?;
//! let rows = db.careers.list_summaries()?;
//! ```

// Main entry point
pub use crate::database::{CareerLogs, CareerLogsBuilder};
pub use crate::config::CareerLogDatabaseSettings;

// Error handling
pub use crate::error::{Error, Result};

// Repository
pub use crate::repository::CareerLogRepository;

// Model
pub use careerlog_core::{
    CareerListItem, CareerLog, CareerLogDto, CareerLogEntry, ContractEvent, ContractEventEntry,
    ContractEventType, FacilityEventEntry, MilestoneCatalog, RecordId, Token,
};

// Re-export serde_json for convenience
pub use serde_json::json;
