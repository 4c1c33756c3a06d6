//! Career log model and derivations
//!
//! This crate defines the record model shared by every layer:
//! - [`CareerLog`]: the persisted document and its inbound update payload
//! - [`MilestoneCatalog`]: the fixed table of interesting milestones
//! - [`milestone_timeline`] / [`timeline_bounds`]: pure derivations
//! - [`CareerLogUpdate`]: the field set written by a token-scoped update

#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod timeline;
pub mod types;
pub mod update;

pub use catalog::{Milestone, MilestoneCatalog};
pub use error::{Error, Result};
pub use model::{
    CareerListItem, CareerLog, CareerLogDto, CareerLogEntry, ContractEvent, ContractEventEntry,
    ContractEventType, FacilityEventEntry, Metadata, Timestamp,
};
pub use timeline::{milestone_timeline, timeline_bounds};
pub use types::{RecordId, Token};
pub use update::CareerLogUpdate;
