use crate::errors::ValidationError;
use crate::models::Incident;
use crate::store::IncidentStore;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::fmt;

/// The six inputs of the report form, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Time,
    Location,
    PeopleInvolved,
    PeopleInjured,
    Summary,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Date,
        Field::Time,
        Field::Location,
        Field::PeopleInvolved,
        Field::PeopleInjured,
        Field::Summary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Date => "Date of Incident",
            Field::Time => "Time of Incident",
            Field::Location => "Location",
            Field::PeopleInvolved => "Number of People Involved",
            Field::PeopleInjured => "Number of People Injured",
            Field::Summary => "Incident Summary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Working copy of the report form. Every field is kept as the raw string the
/// user typed until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IncidentDraft {
    pub date: String,
    pub time: String,
    pub location: String,
    pub people_involved: String,
    pub people_injured: String,
    pub summary: String,
}

impl IncidentDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Location => &self.location,
            Field::PeopleInvolved => &self.people_involved,
            Field::PeopleInjured => &self.people_injured,
            Field::Summary => &self.summary,
        }
    }

    /// Validates the draft and builds the incident it describes, without
    /// touching any store.
    pub fn build(&self, id: u64, now: DateTime<Utc>) -> Result<Incident, ValidationError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
        {
            return Err(ValidationError::MissingField(field));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;
        let time = parse_time(self.time.trim())
            .ok_or_else(|| ValidationError::InvalidTime(self.time.clone()))?;
        let people_involved = parse_count(Field::PeopleInvolved, &self.people_involved)?;
        let people_injured = parse_count(Field::PeopleInjured, &self.people_injured)?;

        if people_involved == 0 {
            return Err(ValidationError::NoPeopleInvolved);
        }
        if people_injured > people_involved {
            return Err(ValidationError::InjuredExceedsInvolved {
                injured: people_injured,
                involved: people_involved,
            });
        }

        Ok(Incident {
            id,
            date,
            time,
            location: self.location.clone(),
            people_involved,
            people_injured,
            summary: self.summary.clone(),
            reported_at: now,
        })
    }

    /// Validates, commits the new incident to `store` and clears the draft.
    /// On error neither the store nor the draft changes.
    pub fn submit(
        &mut self,
        store: &mut IncidentStore,
        now: DateTime<Utc>,
    ) -> Result<Incident, ValidationError> {
        let incident = self.build(next_id(now, store.last_id()), now)?;
        store.add(incident.clone());
        *self = IncidentDraft::default();
        Ok(incident)
    }
}

/// Millisecond timestamp, bumped past the previous id when the clock has not
/// moved on.
pub fn next_id(now: DateTime<Utc>, last_id: Option<u64>) -> u64 {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    match last_id {
        Some(last) if millis <= last => last + 1,
        _ => millis,
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

fn parse_count(field: Field, value: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidCount {
            field,
            value: value.to_string(),
        })
}
