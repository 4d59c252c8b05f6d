//! Failure-weight reinforcement across trials.
//!
//! Each job identity carries a non-negative weight that grows when the
//! job fails to place and decays multiplicatively every trial, like a
//! pheromone trail over the job set. The weight feeds into candidate
//! scoring as a penalty, biasing later trials toward windows where
//! historically difficult jobs still fit. The map is owned by the
//! analysis run and injected into each trial read-only.
//!
//! # Reference
//! Dorigo & Stützle (2004), "Ant Colony Optimization", Ch. 3 (evaporation)

use crate::models::Event;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Fraction of every weight lost per trial.
pub const EVAPORATION_RATE: f64 = 0.05;
/// Weights decaying below this are dropped from the map.
pub const MIN_WEIGHT: f64 = 0.01;

/// Per-job failure weights, persisted across the trials of one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FailureWeights {
    weights: HashMap<String, f64>,
}

impl FailureWeights {
    /// Creates an empty weight map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current weight for a job identity (0 when absent).
    pub fn get(&self, job_key: &str) -> f64 {
        self.weights.get(job_key).copied().unwrap_or(0.0)
    }

    /// Adds 1 to the weight of every distinct job identity among the
    /// unplaced events. Group members share one identity and reinforce
    /// it once.
    pub fn reinforce(&mut self, unplaced: &[Event]) {
        let keys: HashSet<&str> = unplaced.iter().map(Event::job_key).collect();
        for key in keys {
            *self.weights.entry(key.to_string()).or_insert(0.0) += 1.0;
        }
    }

    /// Decays every weight by the evaporation rate, dropping entries
    /// that fall below [`MIN_WEIGHT`]. Runs once per trial, after
    /// reinforcement.
    pub fn evaporate(&mut self) {
        self.weights.retain(|_, weight| {
            *weight *= 1.0 - EVAPORATION_RATE;
            *weight >= MIN_WEIGHT
        });
    }

    /// Number of tracked job identities.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no job carries weight.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
