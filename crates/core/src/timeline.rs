//! Timeline derivations
//!
//! Pure functions over record contents; nothing here touches storage.

use crate::catalog::MilestoneCatalog;
use crate::model::{CareerLogEntry, ContractEvent, ContractEventEntry, ContractEventType, Timestamp};

/// Career bounds from chronologically ordered entries
///
/// Returns the first entry's start and the last entry's end, or `None` when
/// there are no entries. Order is not checked.
pub fn timeline_bounds(entries: &[CareerLogEntry]) -> Option<(Timestamp, Timestamp)> {
    let first = entries.first()?;
    let last = entries.last()?;
    Some((first.start_date, last.end_date))
}

/// Completed catalog milestones, oldest first
///
/// For every catalog entry the first `Complete` event whose internal name
/// matches the key (ignoring case) supplies the date. Catalog entries with no
/// such event are left out, as are events for contracts the catalog does not
/// list. Equal dates keep catalog order.
pub fn milestone_timeline(
    catalog: &MilestoneCatalog,
    events: Option<&[ContractEventEntry]>,
) -> Vec<ContractEvent> {
    let Some(events) = events else {
        return Vec::new();
    };

    let mut timeline: Vec<ContractEvent> = catalog
        .iter()
        .filter_map(|milestone| {
            events
                .iter()
                .find(|e| {
                    e.event_type == ContractEventType::Complete
                        && e.internal_name.eq_ignore_ascii_case(&milestone.key)
                })
                .map(|e| ContractEvent {
                    contract_internal_name: milestone.key.clone(),
                    contract_display_name: milestone.display_name.clone(),
                    date: e.date,
                })
        })
        .collect();

    timeline.sort_by_key(|e| e.date);
    timeline
}
