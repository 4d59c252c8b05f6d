//! The scheduling search engine.
//!
//! One engine drives both search policies: a plain greedy first-fit and
//! a reinforced best-of-candidates biased by decaying per-job failure
//! weights. The shared machinery — occupancy grid, hard-constraint
//! validation, room assignment, atomic group placement — is identical
//! under both policies, so the grid invariants cannot diverge between
//! them.
//!
//! # Usage
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_timetable::engine::{run_analysis, Policy};
//! use u_timetable::models::{Event, Room};
//!
//! let rooms = vec![Room::new("R1", "Standard")];
//! let events = vec![Event::new("E1", "7A", "T1").with_home_room("R1")];
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let result = run_analysis(100, &events, &rooms, Policy::Reinforced, &mut rng).unwrap();
//! assert_eq!(result.non_working, 0);
//! ```
//!
//! # References
//!
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod analysis;
mod constraints;
mod job;
mod pheromone;
mod selector;
mod trial;

pub use analysis::{
    run_analysis, AnalysisError, AnalysisResult, CompletedSchedule, TrialOutcome,
};
pub use constraints::{evaluate, Candidate, PHEROMONE_IMPACT};
pub use job::{build_jobs, Job};
pub use pheromone::{FailureWeights, EVAPORATION_RATE, MIN_WEIGHT};
pub use selector::place_job;
pub use trial::{run_trial, ASSEMBLY_DAY, ASSEMBLY_PERIOD};

use serde::{Deserialize, Serialize};

/// Search policy for a trial or analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-fit greedy: no soft scoring, no reinforcement. Never
    /// improves trial-to-trial and always reports zero violations.
    Plain,
    /// Best-of-candidates with soft scoring and failure-weight
    /// reinforcement across trials.
    Reinforced,
}

impl Policy {
    /// Whether candidates are soft-scored.
    pub fn scoring_enabled(self) -> bool {
        matches!(self, Policy::Reinforced)
    }

    /// Whether the first hard-feasible candidate is taken without
    /// scoring the rest.
    pub fn first_fit(self) -> bool {
        matches!(self, Policy::Plain)
    }

    /// Whether failure weights feed back into scoring.
    pub fn reinforcement_enabled(self) -> bool {
        matches!(self, Policy::Reinforced)
    }
}
