//! Schedule (solution) model.
//!
//! A schedule maps slot keys to the placements committed there; a trial
//! result pairs a schedule with the events that could not be placed and
//! the soft-constraint violation count.

use super::week::Day;
use super::Event;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use super::week::SlotKey;

/// The committed outcome for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Placed event id.
    pub event_id: String,
    /// Class attending (denormalized for rendering).
    pub class_id: String,
    /// Teacher delivering.
    pub teacher_id: String,
    /// Subject name.
    pub subject: String,
    /// Day of the placement.
    pub day: Day,
    /// Starting period.
    pub period: u8,
    /// Assigned room.
    pub room_name: String,
    /// Span in consecutive periods.
    pub duration: u8,
}

impl Placement {
    /// Creates a placement for an event at a slot.
    pub fn new(event: &Event, day: Day, period: u8, room_name: impl Into<String>) -> Self {
        Self {
            event_id: event.id.clone(),
            class_id: event.class_id.clone(),
            teacher_id: event.teacher_id.clone(),
            subject: event.subject.clone(),
            day,
            period,
            room_name: room_name.into(),
            duration: event.duration,
        }
    }
}

/// A weekly schedule: placements keyed by (day, starting period).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Placements by slot, in deterministic slot order.
    pub slots: BTreeMap<SlotKey, Vec<Placement>>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a placement under its (day, starting period) key.
    pub fn add(&mut self, placement: Placement) {
        self.slots
            .entry(SlotKey::new(placement.day, placement.period))
            .or_default()
            .push(placement);
    }

    /// Total number of placements.
    pub fn placement_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Iterates over all placements in slot order.
    pub fn all_placements(&self) -> impl Iterator<Item = &Placement> {
        self.slots.values().flatten()
    }

    /// Finds the placement for a given event.
    pub fn placement_for_event(&self, event_id: &str) -> Option<&Placement> {
        self.all_placements().find(|p| p.event_id == event_id)
    }

    /// Returns all placements for a given class.
    pub fn placements_for_class(&self, class_id: &str) -> Vec<&Placement> {
        self.all_placements()
            .filter(|p| p.class_id == class_id)
            .collect()
    }

    /// Returns all placements for a given teacher.
    pub fn placements_for_teacher(&self, teacher_id: &str) -> Vec<&Placement> {
        self.all_placements()
            .filter(|p| p.teacher_id == teacher_id)
            .collect()
    }
}

/// Outcome of one trial: the schedule, the events that found no slot,
/// and the soft-constraint violation count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Committed schedule.
    pub schedule: Schedule,
    /// Events that could not be placed (flattened from failed jobs).
    pub unplaced: Vec<Event>,
    /// Number of jobs committed at a negative-scoring slot.
    pub soft_violations: u32,
}

impl TrialResult {
    /// Whether every event was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_placement(event_id: &str, class: &str, day: Day, period: u8) -> Placement {
        let event = Event::new(event_id, class, "T1").with_subject("Math");
        Placement::new(&event, day, period, "R1")
    }

    #[test]
    fn test_add_and_query() {
        let mut schedule = Schedule::new();
        schedule.add(sample_placement("E1", "7A", Day::Monday, 1));
        schedule.add(sample_placement("E2", "7B", Day::Monday, 1));
        schedule.add(sample_placement("E3", "7A", Day::Friday, 2));

        assert_eq!(schedule.placement_count(), 3);
        assert_eq!(schedule.slots[&SlotKey::new(Day::Monday, 1)].len(), 2);
        assert_eq!(schedule.placements_for_class("7A").len(), 2);
        assert_eq!(schedule.placements_for_teacher("T1").len(), 3);
        assert_eq!(
            schedule.placement_for_event("E3").unwrap().day,
            Day::Friday
        );
        assert!(schedule.placement_for_event("E9").is_none());
    }

    #[test]
    fn test_slot_order_deterministic() {
        let mut schedule = Schedule::new();
        schedule.add(sample_placement("E1", "7A", Day::Friday, 1));
        schedule.add(sample_placement("E2", "7B", Day::Monday, 3));
        let keys: Vec<_> = schedule.slots.keys().copied().collect();
        assert_eq!(
            keys,
            vec![SlotKey::new(Day::Monday, 3), SlotKey::new(Day::Friday, 1)]
        );
    }

    #[test]
    fn test_trial_result_completeness() {
        let mut result = TrialResult::default();
        assert!(result.is_complete());
        result.unplaced.push(Event::new("E1", "7A", "T1"));
        assert!(!result.is_complete());
    }

    #[test]
    fn test_schedule_serde_roundtrip() {
        let mut schedule = Schedule::new();
        schedule.add(sample_placement("E1", "7A", Day::Wednesday, 6));
        let json = serde_json::to_string(&schedule).unwrap();
        assert!(json.contains("Wednesday_Period6"));
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
