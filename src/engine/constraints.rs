//! Hard-constraint validation and soft-constraint scoring.
//!
//! [`evaluate`] decides whether a job can start at a given (day, period)
//! and, if so, what concrete rooms the placement would use and how
//! desirable it is. It is a pure function of the grid state, the job,
//! the candidate slot, and the failure-weight snapshot, so the selector
//! can call it speculatively for every candidate without committing.

use super::job::Job;
use crate::models::week::{
    self, Day, FIRST_PERIOD, MAX_CONSECUTIVE_PERIODS, PERIODS_PER_DAY, PRAYER_BLOCK_START,
};
use crate::models::{OccupancyGrid, Room, ALL_STAFF_TEACHER, STANDARD_ROOM_TYPE};
use std::collections::HashSet;

/// Multiplier applied to a job's failure weight when scoring. Higher
/// values push repeatedly-failing jobs harder toward uncontested slots.
pub const PHEROMONE_IMPACT: f64 = 10.0;

/// Penalty when a teacher's consecutive run would exceed the maximum.
const OVERLOAD_PENALTY: f64 = 5.0;
/// Bonus for starting in the early part of the day.
const EARLY_DAY_BONUS: f64 = 3.0;
/// Last period still counted as early-day.
const EARLY_DAY_LAST: u8 = 4;
/// First period drawing the late-morning penalty.
const LATE_START_FIRST: u8 = 9;
/// Bonus when the preceding period already holds one of the job's classes.
const CONTINUITY_BONUS: f64 = 2.0;

/// A hard-feasible placement option for a job.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Day of the candidate slot.
    pub day: Day,
    /// Starting period.
    pub period: u8,
    /// Soft-constraint score (0.0 when scoring is disabled).
    pub score: f64,
    /// Assigned room per member event, parallel to `job.events`.
    pub rooms: Vec<String>,
}

/// Evaluates one (day, starting period) candidate for a job.
///
/// Returns `None` when any member event fails a hard constraint on any
/// spanned period, or when no room assignment can be completed. The
/// whole candidate fails atomically.
pub fn evaluate(
    grid: &OccupancyGrid,
    job: &Job<'_>,
    rooms: &[Room],
    day: Day,
    start: u8,
    failure_weight: f64,
    scoring: bool,
) -> Option<Candidate> {
    if !hard_feasible(grid, job, day, start) {
        return None;
    }
    let assigned = assign_rooms(grid, job, rooms, day, start)?;
    let score = if scoring {
        score_candidate(grid, job, day, start, failure_weight)
    } else {
        0.0
    };
    Some(Candidate {
        day,
        period: start,
        score,
        rooms: assigned,
    })
}

/// Every member event, over every period it spans, must stay within the
/// week, avoid blocked periods, and find its class and teacher free.
fn hard_feasible(grid: &OccupancyGrid, job: &Job<'_>, day: Day, start: u8) -> bool {
    for event in &job.events {
        for offset in 0..event.duration {
            let period = start + offset;
            if period > PERIODS_PER_DAY {
                return false;
            }
            if !grid.is_free(day, period, &event.class_id, &event.teacher_id) {
                return false;
            }
        }
    }
    true
}

fn room_span_free(grid: &OccupancyGrid, day: Day, start: u8, duration: u8, name: &str) -> bool {
    (0..duration).all(|offset| grid.room_free(day, start + offset, name))
}

/// Selects a concrete room for every member event, or `None` if any
/// member goes without.
///
/// A group job with a non-Standard room type is a mass lecture: one
/// shared room of the type serves every member. Otherwise each event
/// takes its home room (Standard type) or the first free room of its
/// required type in list order, never reusing a room already claimed by
/// another member at this slot.
fn assign_rooms(
    grid: &OccupancyGrid,
    job: &Job<'_>,
    rooms: &[Room],
    day: Day,
    start: u8,
) -> Option<Vec<String>> {
    if job.is_group && job.required_room_type() != STANDARD_ROOM_TYPE {
        let span = job.events.iter().map(|e| e.duration).max().unwrap_or(1);
        let shared = rooms.iter().find(|r| {
            r.room_type == job.required_room_type() && room_span_free(grid, day, start, span, &r.name)
        })?;
        return Some(vec![shared.name.clone(); job.events.len()]);
    }

    let mut claimed: HashSet<&str> = HashSet::new();
    let mut assigned = Vec::with_capacity(job.events.len());
    for event in &job.events {
        let found = match (&event.home_room, event.required_room_type == STANDARD_ROOM_TYPE) {
            (Some(home), true) => rooms.iter().find(|r| {
                r.name == *home
                    && !claimed.contains(r.name.as_str())
                    && room_span_free(grid, day, start, event.duration, &r.name)
            }),
            _ => rooms.iter().find(|r| {
                r.room_type == event.required_room_type
                    && !claimed.contains(r.name.as_str())
                    && room_span_free(grid, day, start, event.duration, &r.name)
            }),
        }?;
        claimed.insert(found.name.as_str());
        assigned.push(found.name.clone());
    }
    Some(assigned)
}

/// Soft-constraint score for a hard-feasible candidate.
fn score_candidate(
    grid: &OccupancyGrid,
    job: &Job<'_>,
    day: Day,
    start: u8,
    failure_weight: f64,
) -> f64 {
    let mut score = 0.0;
    let teacher = job.teacher_id();
    let duration = job.duration();

    // Teacher load: penalize runs of back-to-back periods. Consecutive
    // counts stop at blocked periods, which already split the day.
    if teacher != ALL_STAFF_TEACHER {
        let mut before = 0u8;
        let mut period = start;
        while period > FIRST_PERIOD {
            period -= 1;
            if week::is_blocked(day, period) || !grid.teacher_booked(day, period, teacher) {
                break;
            }
            before += 1;
        }
        let mut after = 0u8;
        let mut period = start + duration;
        while period <= PERIODS_PER_DAY {
            if week::is_blocked(day, period) || !grid.teacher_booked(day, period, teacher) {
                break;
            }
            after += 1;
            period += 1;
        }
        if before + duration + after > MAX_CONSECUTIVE_PERIODS {
            score -= OVERLOAD_PENALTY;
        }
    }

    // Time-of-day preference: favor early starts, tax late-morning ones.
    if start <= EARLY_DAY_LAST {
        score += EARLY_DAY_BONUS;
    } else if start >= LATE_START_FIRST && start < PRAYER_BLOCK_START {
        score -= f64::from(start - (LATE_START_FIRST - 1));
    }

    // Compactness: reward continuing directly after one of the job's
    // classes (the break does not count as adjacency).
    if start > FIRST_PERIOD {
        let prev = start - 1;
        if prev != week::BREAK_PERIOD
            && job
                .events
                .iter()
                .any(|e| grid.class_booked(day, prev, &e.class_id))
        {
            score += CONTINUITY_BONUS;
        }
    }

    score - failure_weight * PHEROMONE_IMPACT
}
