//! Token-scoped update sets
//!
//! An update replaces a record's periods and events wholesale and re-derives
//! its bounds. Building the set validates the payload; applying it is a pure
//! field assignment the store performs under its write lock.

use crate::error::{Error, Result};
use crate::model::{
    CareerLog, CareerLogDto, CareerLogEntry, ContractEventEntry, FacilityEventEntry, Timestamp,
};
use crate::timeline::timeline_bounds;
use serde::{Deserialize, Serialize};

/// Fields written by an update
///
/// `id`, `token` and `name` are never part of the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerLogUpdate {
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub career_log_entries: Vec<CareerLogEntry>,
    pub contract_event_entries: Option<Vec<ContractEventEntry>>,
    pub facility_event_entries: Option<Vec<FacilityEventEntry>>,
}

impl CareerLogUpdate {
    /// Normalize `dto` and build the update set
    ///
    /// A single leading empty period is trimmed first. If no period remains the
    /// payload is rejected with [`Error::MalformedInput`].
    pub fn from_dto(mut dto: CareerLogDto) -> Result<Self> {
        dto.trim_empty_period();

        let (start_date, end_date) = timeline_bounds(&dto.periods).ok_or_else(|| {
            Error::MalformedInput("update carries no periods after trimming".to_string())
        })?;

        Ok(Self {
            start_date,
            end_date,
            career_log_entries: dto.periods,
            contract_event_entries: dto.contract_events,
            facility_event_entries: dto.facility_events,
        })
    }

    /// Overwrite the update's fields on `log`
    ///
    /// Prior entries and events are discarded, not merged.
    pub fn apply(&self, log: &mut CareerLog) {
        log.start_date = Some(self.start_date);
        log.end_date = Some(self.end_date);
        log.career_log_entries = Some(self.career_log_entries.clone());
        log.contract_event_entries = self.contract_event_entries.clone();
        log.facility_event_entries = self.facility_event_entries.clone();
    }
}

impl TryFrom<CareerLogDto> for CareerLogUpdate {
    type Error = Error;

    fn try_from(dto: CareerLogDto) -> Result<Self> {
        Self::from_dto(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContractEventType;
    use crate::types::{RecordId, Token};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn day(d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(1955, 3, d, 0, 0, 0).unwrap()
    }

    fn stored() -> CareerLog {
        CareerLog {
            id: Some(RecordId::new()),
            token: Some(Token::generate()),
            name: "stored".into(),
            start_date: Some(day(1)),
            end_date: Some(day(2)),
            career_log_entries: Some(vec![CareerLogEntry::new(day(1), day(2))]),
            contract_event_entries: Some(vec![ContractEventEntry::new(
                "first_Downrange",
                ContractEventType::Complete,
                day(2),
            )]),
            facility_event_entries: Some(vec![FacilityEventEntry::new("LaunchPad", day(1))]),
        }
    }

    #[test]
    fn test_bounds_come_from_trimmed_periods() {
        let dto = CareerLogDto {
            periods: vec![
                CareerLogEntry::new(day(1), day(1)),
                CareerLogEntry::new(day(3), day(4)).with_field("currentFunds", json!(1)),
                CareerLogEntry::new(day(4), day(9)),
            ],
            ..CareerLogDto::default()
        };

        let update = CareerLogUpdate::from_dto(dto).unwrap();
        assert_eq!(update.start_date, day(3));
        assert_eq!(update.end_date, day(9));
        assert_eq!(update.career_log_entries.len(), 2);
    }

    #[test]
    fn test_single_plain_period_is_accepted() {
        let dto = CareerLogDto {
            periods: vec![CareerLogEntry::new(day(1), day(2))],
            ..CareerLogDto::default()
        };

        let update = CareerLogUpdate::from_dto(dto).unwrap();
        assert_eq!(update.start_date, day(1));
        assert_eq!(update.end_date, day(2));
        assert_eq!(update.career_log_entries.len(), 1);
    }

    #[test]
    fn test_plain_leading_period_is_kept() {
        let dto = CareerLogDto {
            periods: vec![
                CareerLogEntry::new(day(1), day(2)),
                CareerLogEntry::new(day(2), day(3)),
            ],
            ..CareerLogDto::default()
        };

        let update = CareerLogUpdate::from_dto(dto).unwrap();
        assert_eq!(update.start_date, day(1));
        assert_eq!(update.end_date, day(3));
        assert_eq!(update.career_log_entries.len(), 2);
    }

    #[test]
    fn test_no_periods_is_rejected() {
        let err = CareerLogUpdate::from_dto(CareerLogDto::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_only_an_empty_period_is_rejected() {
        let dto = CareerLogDto {
            periods: vec![CareerLogEntry::new(day(1), day(1))],
            ..CareerLogDto::default()
        };
        assert!(matches!(
            CareerLogUpdate::try_from(dto),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_apply_replaces_wholesale_and_keeps_identity() {
        let mut log = stored();
        let before = log.clone();
        let dto = CareerLogDto {
            periods: vec![CareerLogEntry::new(day(5), day(6)).with_field("reputation", json!(12))],
            contract_events: Some(vec![]),
            facility_events: None,
        };

        CareerLogUpdate::from_dto(dto).unwrap().apply(&mut log);

        assert_eq!(log.id, before.id);
        assert_eq!(log.token, before.token);
        assert_eq!(log.name, before.name);
        assert_eq!(log.start_date, Some(day(5)));
        assert_eq!(log.end_date, Some(day(6)));
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.contract_event_entries, Some(vec![]));
        assert_eq!(log.facility_event_entries, None);
    }
}
