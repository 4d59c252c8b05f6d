//! Job model: placement units derived from the raw event list.
//!
//! Events sharing a non-empty group identifier merge into one group job
//! that must land in a single slot atomically (e.g., a multi-class
//! combined lecture); ungrouped events become singleton jobs. Jobs are
//! derived deterministically at trial start and discarded at trial end;
//! the trial shuffles the job order with its injected RNG, which is the
//! primary entropy source driving trial diversity.

use crate::models::Event;
use std::collections::HashSet;

/// One placement unit: a single event or a same-slot group.
#[derive(Debug, Clone)]
pub struct Job<'a> {
    /// Job identity: the shared group id, or the event id for singletons.
    pub key: String,
    /// Member events; never empty. The first member supplies the job's
    /// duration, room type, and teacher for enumeration and scoring.
    pub events: Vec<&'a Event>,
    /// Whether this job was merged from a group identifier.
    pub is_group: bool,
}

impl Job<'_> {
    /// Span used for candidate enumeration (first member's duration).
    pub fn duration(&self) -> u8 {
        self.events[0].duration
    }

    /// Room type used for mass-lecture detection (first member's).
    pub fn required_room_type(&self) -> &str {
        &self.events[0].required_room_type
    }

    /// Teacher used for load scoring (first member's).
    pub fn teacher_id(&self) -> &str {
        &self.events[0].teacher_id
    }
}

/// Builds the job list from the event set.
///
/// Group members are collected in event-list order under the first
/// occurrence of their group id, so the derivation is deterministic for
/// a given input order.
pub fn build_jobs<'a>(events: &[&'a Event]) -> Vec<Job<'a>> {
    let mut jobs = Vec::new();
    let mut seen_groups: HashSet<&str> = HashSet::new();

    for event in events {
        match event.group_id.as_deref() {
            Some(group_id) => {
                if !seen_groups.insert(group_id) {
                    continue;
                }
                let members: Vec<&Event> = events
                    .iter()
                    .copied()
                    .filter(|e| e.group_id.as_deref() == Some(group_id))
                    .collect();
                jobs.push(Job {
                    key: group_id.to_string(),
                    events: members,
                    is_group: true,
                });
            }
            None => jobs.push(Job {
                key: event.id.clone(),
                events: vec![*event],
                is_group: false,
            }),
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn events() -> Vec<Event> {
        vec![
            Event::new("E1", "7A", "T1"),
            Event::new("E2", "7B", "T2").with_group("G1").with_duration(2),
            Event::new("E3", "7C", "T3").with_group("G1").with_duration(1),
            Event::new("E4", "7D", "T4"),
        ]
    }

    #[test]
    fn test_grouping() {
        let events = events();
        let refs: Vec<&Event> = events.iter().collect();
        let jobs = build_jobs(&refs);

        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].key, "E1");
        assert!(!jobs[0].is_group);

        let group = &jobs[1];
        assert_eq!(group.key, "G1");
        assert!(group.is_group);
        assert_eq!(group.events.len(), 2);
        // First member supplies the merged attributes
        assert_eq!(group.duration(), 2);
        assert_eq!(group.teacher_id(), "T2");

        assert_eq!(jobs[2].key, "E4");
    }

    #[test]
    fn test_derivation_deterministic() {
        let events = events();
        let refs: Vec<&Event> = events.iter().collect();
        let a: Vec<String> = build_jobs(&refs).into_iter().map(|j| j.key).collect();
        let b: Vec<String> = build_jobs(&refs).into_iter().map(|j| j.key).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_seeded() {
        let events: Vec<Event> = (0..20)
            .map(|i| Event::new(format!("E{i}"), format!("C{i}"), format!("T{i}")))
            .collect();
        let refs: Vec<&Event> = events.iter().collect();

        let order = |seed: u64| -> Vec<String> {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut jobs = build_jobs(&refs);
            jobs.shuffle(&mut rng);
            jobs.into_iter().map(|j| j.key).collect()
        };

        assert_eq!(order(42), order(42));
        assert_ne!(order(42), order(43));
    }
}
