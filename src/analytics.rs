use crate::models::{AnalyticsReport, CorrelationPoint, HeadlineStats, Incident, LocationStats};
use std::collections::HashMap;

pub fn build_analytics(incidents: &[Incident]) -> AnalyticsReport {
    AnalyticsReport {
        headline: headline_stats(incidents),
        points: correlation_points(incidents),
        locations: location_summary(incidents),
    }
}

/// One point per incident, involved on x and injured on y, in store order.
pub fn correlation_points(incidents: &[Incident]) -> Vec<CorrelationPoint> {
    incidents
        .iter()
        .map(|incident| CorrelationPoint {
            x: incident.people_involved,
            y: incident.people_injured,
            id: incident.id,
            location: incident.location.clone(),
            date: incident.date,
        })
        .collect()
}

/// Groups by exact location string. Groups come out in the order each
/// location first appears.
pub fn location_summary(incidents: &[Incident]) -> Vec<LocationStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<LocationStats> = Vec::new();

    for incident in incidents {
        let slot = *index.entry(incident.location.as_str()).or_insert_with(|| {
            groups.push(LocationStats {
                location: incident.location.clone(),
                total_incidents: 0,
                total_involved: 0,
                total_injured: 0,
                injury_rate: 0.0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_incidents += 1;
        group.total_involved += u64::from(incident.people_involved);
        group.total_injured += u64::from(incident.people_injured);
    }

    for group in &mut groups {
        group.injury_rate = injury_rate(group.total_injured, group.total_involved);
    }

    groups
}

pub fn headline_stats(incidents: &[Incident]) -> HeadlineStats {
    let (total_involved, total_injured) =
        incidents.iter().fold((0u64, 0u64), |(involved, injured), incident| {
            (
                involved + u64::from(incident.people_involved),
                injured + u64::from(incident.people_injured),
            )
        });

    HeadlineStats {
        total_incidents: incidents.len() as u64,
        total_involved,
        total_injured,
        overall_injury_rate: injury_rate(total_injured, total_involved),
    }
}

/// Percentage of involved people who were injured; 0 when nobody was involved.
pub fn injury_rate(injured: u64, involved: u64) -> f64 {
    if involved == 0 {
        return 0.0;
    }
    injured as f64 / involved as f64 * 100.0
}

pub fn format_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn incident(id: u64, location: &str, involved: u32, injured: u32) -> Incident {
        Incident {
            id,
            date: NaiveDate::from_ymd_opt(2026, 5, id as u32 % 28 + 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            location: location.to_string(),
            people_involved: involved,
            people_injured: injured,
            summary: "test".to_string(),
            reported_at: Utc.with_ymd_and_hms(2026, 5, 30, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn dock_group_totals_and_rate() {
        let incidents = vec![incident(1, "Dock", 5, 2), incident(2, "Dock", 3, 3)];

        let summary = location_summary(&incidents);

        assert_eq!(summary.len(), 1);
        let dock = &summary[0];
        assert_eq!(dock.location, "Dock");
        assert_eq!(dock.total_incidents, 2);
        assert_eq!(dock.total_involved, 8);
        assert_eq!(dock.total_injured, 5);
        assert_eq!(dock.injury_rate, 62.5);
    }

    #[test]
    fn groups_follow_first_appearance() {
        let incidents = vec![
            incident(1, "Yard", 1, 0),
            incident(2, "Dock", 2, 1),
            incident(3, "Yard", 4, 1),
            incident(4, "Office", 2, 0),
        ];

        let labels: Vec<String> = location_summary(&incidents)
            .into_iter()
            .map(|group| group.location)
            .collect();
        assert_eq!(labels, vec!["Yard", "Dock", "Office"]);
    }

    #[test]
    fn grouping_is_case_sensitive_and_untrimmed() {
        let incidents = vec![
            incident(1, "Dock", 1, 0),
            incident(2, "dock", 1, 1),
            incident(3, "Dock ", 1, 1),
        ];
        assert_eq!(location_summary(&incidents).len(), 3);
    }

    #[test]
    fn overall_rate_formats_with_one_decimal() {
        let incidents = vec![incident(1, "A", 3, 1), incident(2, "B", 7, 2)];

        let headline = headline_stats(&incidents);

        assert_eq!(headline.total_incidents, 2);
        assert_eq!(headline.total_involved, 10);
        assert_eq!(headline.total_injured, 3);
        assert_eq!(format_rate(headline.overall_injury_rate), "30.0%");
    }

    #[test]
    fn empty_set_reports_zero_rate() {
        let report = build_analytics(&[]);
        assert_eq!(report.headline.total_incidents, 0);
        assert_eq!(report.headline.overall_injury_rate, 0.0);
        assert!(report.points.is_empty());
        assert!(report.locations.is_empty());
    }

    #[test]
    fn points_keep_order_and_duplicates() {
        let incidents = vec![
            incident(9, "Dock", 2, 1),
            incident(3, "Yard", 2, 1),
        ];

        let points = correlation_points(&incidents);

        assert_eq!(points.len(), 2);
        assert_eq!((points[0].x, points[0].y), (points[1].x, points[1].y));
        assert_eq!(points[0].id, 9);
        assert_eq!(points[1].location, "Yard");
        assert_eq!(points[1].date, incidents[1].date);
    }

    #[test]
    fn repeated_runs_agree() {
        let incidents = vec![incident(1, "Dock", 5, 2), incident(2, "Yard", 3, 0)];
        assert_eq!(build_analytics(&incidents), build_analytics(&incidents));
    }

    #[test]
    fn injury_rate_guards_zero_involved() {
        assert_eq!(injury_rate(0, 0), 0.0);
        assert_eq!(injury_rate(1, 4), 25.0);
    }
}
