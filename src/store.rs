use crate::models::Incident;

/// Append-only, in-memory list of incidents for the lifetime of the process.
#[derive(Debug, Default)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends without checking for id collisions; callers hand in a fresh id.
    pub fn add(&mut self, incident: Incident) {
        self.incidents.push(incident);
    }

    /// Every incident in insertion order.
    pub fn all(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn last_id(&self) -> Option<u64> {
        self.incidents.last().map(|incident| incident.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn incident(id: u64, location: &str) -> Incident {
        Incident {
            id,
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            time: NaiveTime::from_hms_opt(8, 15, 0).unwrap(),
            location: location.to_string(),
            people_involved: 3,
            people_injured: 1,
            summary: "Forklift clipped a rack".to_string(),
            reported_at: Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn add_appends_exactly_one_record() {
        let mut store = IncidentStore::new();
        store.add(incident(1, "Dock"));
        let before: Vec<Incident> = store.all().to_vec();

        let next = incident(2, "Warehouse A");
        store.add(next.clone());

        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(store.all().last(), Some(&next));
        assert_eq!(&store.all()[..before.len()], before.as_slice());
    }

    #[test]
    fn all_keeps_insertion_order() {
        let mut store = IncidentStore::new();
        for (id, location) in [(30, "Yard"), (10, "Dock"), (20, "Office")] {
            store.add(incident(id, location));
        }

        let ids: Vec<u64> = store.all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert_eq!(store.last_id(), Some(20));
    }

    #[test]
    fn reads_do_not_mutate() {
        let mut store = IncidentStore::new();
        store.add(incident(1, "Dock"));

        let first = store.all().to_vec();
        let second = store.all().to_vec();
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_store_has_no_last_id() {
        let store = IncidentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.last_id(), None);
    }
}
