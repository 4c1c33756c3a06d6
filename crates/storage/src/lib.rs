//! Storage layer for career logs
//!
//! This crate implements the document store behind the repository:
//! - CareerLogStore: the store contract (find, insert, atomic find-and-update)
//! - MemoryStore: RwLock-guarded in-memory collection
//! - JournalStore: MemoryStore semantics plus an append-only JSON-lines journal
//! - DurabilityMode: fsync policy for journal writes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod durability;
pub mod journal;
pub mod memory;
pub mod store;

pub use durability::DurabilityMode;
pub use journal::{JournalStore, ReplayStats};
pub use memory::MemoryStore;
pub use store::{project, CareerLogStore, Filter};
