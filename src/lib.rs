//! Weekly timetabling engine for the U-Engine ecosystem.
//!
//! Assigns a fixed set of recurring teaching events to slots in a weekly
//! grid under hard resource constraints (no double-booking of a class,
//! teacher, or room) and soft quality preferences (load spreading,
//! compactness, time-of-day preference), repeating the randomized search
//! across many trials and reporting the distribution of outcomes.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Event`, `Room`, `OccupancyGrid`,
//!   `Placement`, `Schedule`, `TrialResult`, week structure
//! - **`engine`**: The search itself — job grouping, constraint evaluation,
//!   slot selection, trial runner, failure-weight reinforcement, analysis
//! - **`validation`**: Input integrity checks (duplicate IDs, malformed rows)
//!
//! # Architecture
//!
//! A trial is one complete attempt to place every event for the week; an
//! analysis run repeats trials with fresh random job orderings, optionally
//! biased by a decaying per-job failure weight (a pheromone trail over the
//! job set). The engine is single-threaded and performs no I/O; inputs,
//! iteration count, and the random source are supplied up front.
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod engine;
pub mod models;
pub mod validation;
