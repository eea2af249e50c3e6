use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A single reported safety incident. Built once by the report form and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: u64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub people_involved: u32,
    pub people_injured: u32,
    pub summary: String,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub x: u32,
    pub y: u32,
    pub id: u64,
    pub location: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStats {
    pub location: String,
    pub total_incidents: u64,
    pub total_involved: u64,
    pub total_injured: u64,
    pub injury_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineStats {
    pub total_incidents: u64,
    pub total_involved: u64,
    pub total_injured: u64,
    pub overall_injury_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub headline: HeadlineStats,
    pub points: Vec<CorrelationPoint>,
    pub locations: Vec<LocationStats>,
}

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub reported: Option<String>,
}

impl HomeQuery {
    /// Id of a just-reported incident; anything unparsable is ignored.
    pub fn reported_id(&self) -> Option<u64> {
        self.reported
            .as_deref()
            .and_then(|value| value.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn incident_serializes_plain_date_and_time() {
        let incident = Incident {
            id: 7,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            location: "Dock".to_string(),
            people_involved: 2,
            people_injured: 1,
            summary: "Crate slipped".to_string(),
            reported_at: Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&incident).unwrap();
        assert_eq!(value["date"], "2026-03-14");
        assert_eq!(value["time"], "09:30:00");
        assert_eq!(value["people_involved"], 2);
        assert_eq!(value["reported_at"], "2026-03-14T10:00:00Z");
    }

    #[test]
    fn home_query_ignores_malformed_id() {
        let query = |reported: &str| HomeQuery {
            reported: Some(reported.to_string()),
        };
        assert_eq!(query("1712345").reported_id(), Some(1712345));
        assert_eq!(query("abc").reported_id(), None);
        assert_eq!(query("").reported_id(), None);
        assert_eq!(HomeQuery { reported: None }.reported_id(), None);
    }
}
