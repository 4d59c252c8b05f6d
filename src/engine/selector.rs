//! Slot selection: enumerate, rank, and commit placements.
//!
//! For one job, every (day, starting period) pair the span fits into is
//! evaluated against the live grid. The plain policy commits the first
//! hard-feasible candidate it meets; the reinforced policy scores every
//! candidate and commits the single highest, with ties falling to the
//! fixed enumeration order (day order, then ascending period), so the
//! choice is deterministic given the job order and the random stream.

use super::constraints::{evaluate, Candidate};
use super::job::Job;
use super::Policy;
use crate::models::week::{span_fits, Day, FIRST_PERIOD, PERIODS_PER_DAY};
use crate::models::{OccupancyGrid, Placement, Room, Schedule};

/// Places one job, or reports it unplaceable.
///
/// On success, books every member event's span and room into the grid
/// and records one placement per member keyed at (day, starting
/// period), returning `true`. If the committed candidate scored below
/// zero, the trial's soft-violation counter is incremented. When no
/// candidate is hard-feasible the grid and schedule are left untouched
/// and `false` is returned.
pub fn place_job(
    grid: &mut OccupancyGrid,
    schedule: &mut Schedule,
    job: &Job<'_>,
    rooms: &[Room],
    failure_weight: f64,
    policy: Policy,
    violations: &mut u32,
) -> bool {
    let duration = job.duration();
    if !span_fits(FIRST_PERIOD, duration) {
        // Degenerate spans never fit; malformed input is filtered upstream.
        return false;
    }
    let last_start = PERIODS_PER_DAY - (duration - 1);

    let mut best: Option<Candidate> = None;
    for day in Day::ALL {
        for start in FIRST_PERIOD..=last_start {
            let Some(candidate) = evaluate(
                grid,
                job,
                rooms,
                day,
                start,
                failure_weight,
                policy.scoring_enabled(),
            ) else {
                continue;
            };

            if policy.first_fit() {
                commit(grid, schedule, job, &candidate);
                return true;
            }
            match &best {
                Some(current) if current.score >= candidate.score => {}
                _ => best = Some(candidate),
            }
        }
    }

    match best {
        Some(candidate) => {
            if candidate.score < 0.0 {
                *violations += 1;
            }
            commit(grid, schedule, job, &candidate);
            true
        }
        None => false,
    }
}

/// Books every member's span into the grid and records placements.
fn commit(grid: &mut OccupancyGrid, schedule: &mut Schedule, job: &Job<'_>, candidate: &Candidate) {
    for (event, room_name) in job.events.iter().zip(&candidate.rooms) {
        for offset in 0..event.duration {
            grid.book(
                candidate.day,
                candidate.period + offset,
                &event.class_id,
                &event.teacher_id,
                room_name,
                &event.id,
            );
        }
        schedule.add(Placement::new(
            event,
            candidate.day,
            candidate.period,
            room_name.as_str(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_jobs;
    use crate::models::{Event, SlotKey};

    fn place(
        grid: &mut OccupancyGrid,
        schedule: &mut Schedule,
        events: &[Event],
        rooms: &[Room],
        policy: Policy,
        violations: &mut u32,
    ) -> bool {
        let refs: Vec<&Event> = events.iter().collect();
        let jobs = build_jobs(&refs);
        place_job(grid, schedule, &jobs[0], rooms, 0.0, policy, violations)
    }

    #[test]
    fn test_first_fit_takes_earliest_slot() {
        let mut grid = OccupancyGrid::new();
        let mut schedule = Schedule::new();
        let mut violations = 0;
        let events = [Event::new("E1", "7A", "T1").with_home_room("R1")];
        let rooms = [Room::new("R1", "Standard")];

        assert!(place(&mut grid, &mut schedule, &events, &rooms, Policy::Plain, &mut violations));
        let placement = schedule.placement_for_event("E1").unwrap();
        assert_eq!((placement.day, placement.period), (Day::Monday, 1));
        assert_eq!(violations, 0);
    }

    #[test]
    fn test_best_fit_prefers_higher_score() {
        let mut grid = OccupancyGrid::new();
        let mut schedule = Schedule::new();
        let mut violations = 0;
        // Monday 1-4 are taken for the class, so the first-fit slot would
        // be Monday 6 (score 0); Tuesday 1 scores +3 and must win.
        for period in 1..=4 {
            grid.book(Day::Monday, period, "7A", "T9", "R9", "X");
        }
        let events = [Event::new("E1", "7A", "T1").with_home_room("R1")];
        let rooms = [Room::new("R1", "Standard")];

        assert!(place(
            &mut grid,
            &mut schedule,
            &events,
            &rooms,
            Policy::Reinforced,
            &mut violations
        ));
        let placement = schedule.placement_for_event("E1").unwrap();
        assert_eq!((placement.day, placement.period), (Day::Tuesday, 1));
        assert_eq!(violations, 0);
    }

    #[test]
    fn test_tie_breaks_to_enumeration_order() {
        let mut grid = OccupancyGrid::new();
        let mut schedule = Schedule::new();
        let mut violations = 0;
        let events = [Event::new("E1", "7A", "T1").with_home_room("R1")];
        let rooms = [Room::new("R1", "Standard")];

        // Empty grid: periods 1-4 all score +3; Monday 1 is first.
        assert!(place(
            &mut grid,
            &mut schedule,
            &events,
            &rooms,
            Policy::Reinforced,
            &mut violations
        ));
        let placement = schedule.placement_for_event("E1").unwrap();
        assert_eq!((placement.day, placement.period), (Day::Monday, 1));
    }

    #[test]
    fn test_negative_score_counts_violation() {
        let mut grid = OccupancyGrid::new();
        let mut schedule = Schedule::new();
        let mut violations = 0;
        // Force the only feasible slot to Monday 10 with a 5-period
        // teacher run: class 7A busy everywhere except Monday 10, and
        // T1 booked Monday 6-9 through other classes.
        for day in Day::ALL {
            for period in 1..=PERIODS_PER_DAY {
                if grid.is_blocked(day, period) || (day == Day::Monday && period == 10) {
                    continue;
                }
                grid.book(day, period, "7A", "T0", "R0", "X");
            }
        }
        for period in 6..=9 {
            grid.book(Day::Monday, period, format!("C{period}").as_str(), "T1", "R9", "X");
        }
        let events = [Event::new("E1", "7A", "T1").with_home_room("R1")];
        let rooms = [Room::new("R1", "Standard")];

        assert!(place(
            &mut grid,
            &mut schedule,
            &events,
            &rooms,
            Policy::Reinforced,
            &mut violations
        ));
        let placement = schedule.placement_for_event("E1").unwrap();
        assert_eq!((placement.day, placement.period), (Day::Monday, 10));
        assert_eq!(violations, 1);
    }

    #[test]
    fn test_unplaceable_leaves_state_untouched() {
        let mut grid = OccupancyGrid::new();
        let mut schedule = Schedule::new();
        let mut violations = 0;
        let events = [Event::new("E1", "7A", "T1").with_room_type("Pool")];
        let rooms = [Room::new("R1", "Standard")];

        assert!(!place(
            &mut grid,
            &mut schedule,
            &events,
            &rooms,
            Policy::Reinforced,
            &mut violations
        ));
        assert_eq!(schedule.placement_count(), 0);
        assert!(grid.is_free(Day::Monday, 1, "7A", "T1"));
        assert_eq!(violations, 0);
    }

    #[test]
    fn test_group_committed_atomically_same_slot() {
        let mut grid = OccupancyGrid::new();
        let mut schedule = Schedule::new();
        let mut violations = 0;
        let events = [
            Event::new("E1", "7A", "T1").with_room_type("Hall").with_group("G1"),
            Event::new("E2", "7B", "T2").with_room_type("Hall").with_group("G1"),
        ];
        let rooms = [Room::new("Hall-1", "Hall")];

        assert!(place(&mut grid, &mut schedule, &events, &rooms, Policy::Plain, &mut violations));
        let key = SlotKey::new(Day::Monday, 1);
        assert_eq!(schedule.slots[&key].len(), 2);
        let p1 = schedule.placement_for_event("E1").unwrap();
        let p2 = schedule.placement_for_event("E2").unwrap();
        assert_eq!((p1.day, p1.period), (p2.day, p2.period));
        assert_eq!(p1.room_name, p2.room_name);
    }

    #[test]
    fn test_multi_period_span_booked_fully() {
        let mut grid = OccupancyGrid::new();
        let mut schedule = Schedule::new();
        let mut violations = 0;
        let events = [Event::new("E1", "7A", "T1").with_home_room("R1").with_duration(3)];
        let rooms = [Room::new("R1", "Standard")];

        assert!(place(&mut grid, &mut schedule, &events, &rooms, Policy::Plain, &mut violations));
        for period in 1..=3 {
            assert!(!grid.is_free(Day::Monday, period, "7A", "T9"));
            assert!(!grid.room_free(Day::Monday, period, "R1"));
        }
        assert!(grid.is_free(Day::Monday, 4, "7A", "T9"));
        // One placement, keyed at the start
        assert_eq!(schedule.placement_count(), 1);
        assert_eq!(schedule.placement_for_event("E1").unwrap().period, 1);
    }

    #[test]
    fn test_degenerate_duration_unplaceable() {
        let mut grid = OccupancyGrid::new();
        let mut schedule = Schedule::new();
        let mut violations = 0;
        let events = [Event::new("E1", "7A", "T1").with_home_room("R1").with_duration(0)];
        let rooms = [Room::new("R1", "Standard")];
        assert!(!place(&mut grid, &mut schedule, &events, &rooms, Policy::Plain, &mut violations));

        let events = [Event::new("E2", "7A", "T1").with_home_room("R1").with_duration(14)];
        assert!(!place(&mut grid, &mut schedule, &events, &rooms, Policy::Plain, &mut violations));
    }
}
