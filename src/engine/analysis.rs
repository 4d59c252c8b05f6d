//! Analysis run: many trials, one evolving failure-weight map.
//!
//! Drives N independent trials, reinforces and evaporates failure
//! weights between them (reinforced policy only), classifies every
//! outcome, and retains each complete schedule plus the best one seen.
//! Scheduling failure is never fatal — a trial with unplaced jobs is a
//! normal, reportable "non-working" outcome. The only fatal condition
//! is invalid configuration (zero iterations).

use super::pheromone::FailureWeights;
use super::trial::run_trial;
use super::Policy;
use crate::models::{Event, Room, Schedule, TrialResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Invalid analysis configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Zero trials were requested.
    #[error("iteration count must be at least 1")]
    ZeroIterations,
}

/// Classification of one trial's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialOutcome {
    /// At least one job went unplaced.
    NonWorking,
    /// Complete, with soft violations (or any complete plain trial).
    Workable,
    /// Complete with zero soft violations (reinforced policy only).
    Perfect,
}

/// A complete trial's schedule, tagged for later selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedSchedule {
    /// The committed schedule.
    pub schedule: Schedule,
    /// Soft-constraint violation count of the trial.
    pub soft_violations: u32,
    /// 1-based trial index within the run.
    pub trial_index: usize,
    /// Classification (never `NonWorking` here).
    pub outcome: TrialOutcome,
}

/// Aggregate outcome of an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Trials with at least one unplaced job.
    pub non_working: usize,
    /// Complete trials with violations (all complete plain trials).
    pub workable: usize,
    /// Complete trials with zero violations (reinforced only).
    pub perfect: usize,
    /// First complete trial with the lowest violation count seen.
    pub best: Option<CompletedSchedule>,
    /// Every complete trial's schedule, in trial order.
    pub completed: Vec<CompletedSchedule>,
    /// The most recent trial, kept for failure diagnostics.
    pub last_trial: Option<TrialResult>,
    /// Number of trials executed.
    pub total_trials: usize,
}

/// Runs an analysis: `iterations` trials under one policy, sharing one
/// failure-weight map and one random stream.
///
/// Reinforced trials are strictly sequential — each trial's weight
/// update is an input to the next trial's scoring. Seed the RNG for
/// deterministic replay; identical inputs and seed yield an identical
/// result.
pub fn run_analysis<R: Rng + ?Sized>(
    iterations: usize,
    events: &[Event],
    rooms: &[Room],
    policy: Policy,
    rng: &mut R,
) -> Result<AnalysisResult, AnalysisError> {
    if iterations == 0 {
        return Err(AnalysisError::ZeroIterations);
    }
    info!(
        iterations,
        ?policy,
        events = events.len(),
        rooms = rooms.len(),
        "starting analysis run"
    );

    let mut weights = FailureWeights::new();
    let mut result = AnalysisResult {
        non_working: 0,
        workable: 0,
        perfect: 0,
        best: None,
        completed: Vec::new(),
        last_trial: None,
        total_trials: iterations,
    };

    for trial_index in 1..=iterations {
        let trial = run_trial(events, rooms, &weights, policy, rng);
        debug!(
            trial_index,
            unplaced = trial.unplaced.len(),
            violations = trial.soft_violations,
            "trial finished"
        );

        // Weight effects become visible starting with the next trial.
        if policy.reinforcement_enabled() {
            weights.reinforce(&trial.unplaced);
            weights.evaporate();
        }

        record(&mut result, trial, trial_index, policy);
    }

    info!(
        non_working = result.non_working,
        workable = result.workable,
        perfect = result.perfect,
        "analysis run complete"
    );
    Ok(result)
}

fn record(result: &mut AnalysisResult, trial: TrialResult, trial_index: usize, policy: Policy) {
    if !trial.is_complete() {
        result.non_working += 1;
        result.last_trial = Some(trial);
        return;
    }

    let outcome = match policy {
        Policy::Plain => TrialOutcome::Workable,
        Policy::Reinforced if trial.soft_violations == 0 => TrialOutcome::Perfect,
        Policy::Reinforced => TrialOutcome::Workable,
    };
    match outcome {
        TrialOutcome::Perfect => result.perfect += 1,
        _ => result.workable += 1,
    }

    let completed = CompletedSchedule {
        schedule: trial.schedule.clone(),
        soft_violations: trial.soft_violations,
        trial_index,
        outcome,
    };
    // First-seen wins ties: replace only on strictly fewer violations.
    let improves = result
        .best
        .as_ref()
        .is_none_or(|b| completed.soft_violations < b.soft_violations);
    if improves {
        result.best = Some(completed.clone());
    }
    result.completed.push(completed);
    result.last_trial = Some(trial);
}
