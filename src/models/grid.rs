//! Occupancy grid: the per-trial booking substrate.
//!
//! Records, for every (day, period) pair, which classes, teachers, and
//! rooms are already committed. Rebuilt fresh at the start of every
//! trial; bookings never persist across trials. Blocked periods (the
//! daily break and the final-day tail) are enforced here and never
//! become bookable.

use super::event::ASSEMBLY_CLASS;
use super::week::{self, Day, PERIODS_PER_DAY};
use std::collections::HashSet;

/// Occupancy of one (day, period) slot.
#[derive(Debug, Clone, Default)]
struct SlotOccupancy {
    classes: HashSet<String>,
    teachers: HashSet<String>,
    rooms: HashSet<String>,
    /// Event ids occupying this slot, for reporting.
    events: Vec<String>,
}

/// Per-day, per-period record of committed bookings within one trial.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    slots: Vec<SlotOccupancy>,
}

impl OccupancyGrid {
    /// Creates an empty grid for the whole week.
    pub fn new() -> Self {
        let slot_count = Day::ALL.len() * PERIODS_PER_DAY as usize;
        Self {
            slots: vec![SlotOccupancy::default(); slot_count],
        }
    }

    fn slot(&self, day: Day, period: u8) -> &SlotOccupancy {
        debug_assert!((1..=PERIODS_PER_DAY).contains(&period));
        &self.slots[day.index() * PERIODS_PER_DAY as usize + (period - 1) as usize]
    }

    fn slot_mut(&mut self, day: Day, period: u8) -> &mut SlotOccupancy {
        debug_assert!((1..=PERIODS_PER_DAY).contains(&period));
        &mut self.slots[day.index() * PERIODS_PER_DAY as usize + (period - 1) as usize]
    }

    /// Whether a period is permanently blocked (break or final-day tail).
    #[inline]
    pub fn is_blocked(&self, day: Day, period: u8) -> bool {
        week::is_blocked(day, period)
    }

    /// Whether the slot can take a booking for the given class and teacher.
    ///
    /// False on blocked periods, class or teacher conflicts, and slots
    /// claimed by the assembly pseudo-class (which blocks every class
    /// without per-teacher enumeration).
    pub fn is_free(&self, day: Day, period: u8, class_id: &str, teacher_id: &str) -> bool {
        if self.is_blocked(day, period) {
            return false;
        }
        let slot = self.slot(day, period);
        !slot.classes.contains(class_id)
            && !slot.teachers.contains(teacher_id)
            && !slot.classes.contains(ASSEMBLY_CLASS)
    }

    /// Whether a room is unclaimed at the slot.
    pub fn room_free(&self, day: Day, period: u8, room_name: &str) -> bool {
        !self.is_blocked(day, period) && !self.slot(day, period).rooms.contains(room_name)
    }

    /// Whether the teacher already holds a booking at the slot.
    pub fn teacher_booked(&self, day: Day, period: u8, teacher_id: &str) -> bool {
        self.slot(day, period).teachers.contains(teacher_id)
    }

    /// Whether the class already holds a booking at the slot.
    pub fn class_booked(&self, day: Day, period: u8, class_id: &str) -> bool {
        self.slot(day, period).classes.contains(class_id)
    }

    /// Commits a booking for one period.
    pub fn book(
        &mut self,
        day: Day,
        period: u8,
        class_id: &str,
        teacher_id: &str,
        room_name: &str,
        event_id: &str,
    ) {
        let slot = self.slot_mut(day, period);
        slot.classes.insert(class_id.to_string());
        slot.teachers.insert(teacher_id.to_string());
        slot.rooms.insert(room_name.to_string());
        slot.events.push(event_id.to_string());
    }

    /// Event ids occupying a slot.
    pub fn occupant_events(&self, day: Day, period: u8) -> &[String] {
        &self.slot(day, period).events
    }
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::new()
    }
}
