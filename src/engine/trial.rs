//! Trial runner: one full placement pass over all jobs.
//!
//! A trial builds a fresh occupancy grid, places the fixed assembly
//! event first, derives and shuffles the job list, then places jobs
//! strictly sequentially — each placement changes feasibility for every
//! job after it, so there is no parallelism within a trial.

use super::job::build_jobs;
use super::pheromone::FailureWeights;
use super::selector::place_job;
use super::Policy;
use crate::models::week::{Day, PERIODS_PER_DAY};
use crate::models::{
    Event, OccupancyGrid, Placement, Room, Schedule, TrialResult, ALL_STAFF_TEACHER,
    ASSEMBLY_CLASS,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed slot of the weekly assembly.
pub const ASSEMBLY_DAY: Day = Day::Wednesday;
/// Fixed starting period of the weekly assembly.
pub const ASSEMBLY_PERIOD: u8 = 1;

/// Runs one trial: every job gets one chance to place against the week.
///
/// The failure-weight map is read-only here; the plain policy ignores
/// it entirely. The RNG drives the per-trial job shuffle and must be
/// re-drawn from the same source across trials (seed it for
/// deterministic replay).
pub fn run_trial<R: Rng + ?Sized>(
    events: &[Event],
    rooms: &[Room],
    weights: &FailureWeights,
    policy: Policy,
    rng: &mut R,
) -> TrialResult {
    let mut grid = OccupancyGrid::new();
    let mut schedule = Schedule::new();
    let mut unplaced: Vec<Event> = Vec::new();
    let mut violations = 0u32;

    place_assembly(&mut grid, &mut schedule, &mut unplaced, events, rooms);

    let ordinary: Vec<&Event> = events.iter().filter(|e| !e.is_assembly()).collect();
    let mut jobs = build_jobs(&ordinary);
    jobs.shuffle(rng);

    for job in &jobs {
        let weight = if policy.reinforcement_enabled() {
            weights.get(&job.key)
        } else {
            0.0
        };
        if !place_job(&mut grid, &mut schedule, job, rooms, weight, policy, &mut violations) {
            unplaced.extend(job.events.iter().map(|e| (*e).clone()));
        }
    }

    TrialResult {
        schedule,
        unplaced,
        soft_violations: violations,
    }
}

/// Places the weekly assembly before ordinary scheduling.
///
/// All assembly events collapse to a single placement at the fixed
/// slot; the booking claims the assembly pseudo-class and the all-staff
/// teacher token, blocking every ordinary event without per-teacher
/// enumeration. With no room of the required type, the event is
/// reported unplaced and nothing is booked.
fn place_assembly(
    grid: &mut OccupancyGrid,
    schedule: &mut Schedule,
    unplaced: &mut Vec<Event>,
    events: &[Event],
    rooms: &[Room],
) {
    let Some(assembly) = events.iter().find(|e| e.is_assembly()) else {
        return;
    };
    match rooms.iter().find(|r| r.room_type == assembly.required_room_type) {
        Some(room) => {
            for offset in 0..assembly.duration {
                let period = ASSEMBLY_PERIOD + offset;
                if period > PERIODS_PER_DAY {
                    break;
                }
                grid.book(
                    ASSEMBLY_DAY,
                    period,
                    ASSEMBLY_CLASS,
                    ALL_STAFF_TEACHER,
                    &room.name,
                    &assembly.id,
                );
            }
            schedule.add(Placement::new(
                assembly,
                ASSEMBLY_DAY,
                ASSEMBLY_PERIOD,
                room.name.as_str(),
            ));
        }
        None => unplaced.push(assembly.clone()),
    }
}
