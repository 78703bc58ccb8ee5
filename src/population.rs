//! # `population` – The Arm Pool
//!
//! The [`Population`] owns every arm currently under consideration, keyed by
//! action vector so that duplicates are structurally impossible. On top of the
//! map it maintains a lazily computed ranking (the total order defined by
//! [`Arm::cmp_rank`]): any mutation invalidates the cached order and the next
//! [`Population::ranking`] call rebuilds it.
//!
//! Replacement is steady-state: one offspring at a time displaces the worst
//! ranked arm, and an offspring that lands on an existing action vector merges
//! its single pull into the resident arm instead of colliding with it.
use std::collections::HashMap;

use crate::arm::{Arm, ArmError};

/// The current set of arms, keyed by action vector, with a lazy ranking cache.
#[derive(Debug, Clone, Default)]
pub struct Population {
    arms: HashMap<Vec<i32>, Arm>,
    ranking: Option<Vec<Vec<i32>>>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn contains(&self, action_vector: &[i32]) -> bool {
        self.arms.contains_key(action_vector)
    }

    pub fn get(&self, action_vector: &[i32]) -> Option<&Arm> {
        self.arms.get(action_vector)
    }

    /// Iterates over the arms in no particular order.
    pub fn arms(&self) -> impl Iterator<Item = &Arm> {
        self.arms.values()
    }

    /// Inserts a brand-new arm. The caller guarantees the action vector is not
    /// already present and that the arm carries at least one pull.
    pub fn insert(&mut self, arm: Arm) {
        debug_assert!(arm.n_pulls() >= 1, "arms enter the population evaluated");
        debug_assert!(!self.arms.contains_key(arm.action_vector()));
        self.ranking = None;
        self.arms.insert(arm.action_vector().to_vec(), arm);
    }

    /// Folds one more observed reward into an existing arm's statistics.
    pub fn record_pull(&mut self, action_vector: &[i32], reward: f64) -> Result<(), ArmError> {
        self.ranking = None;
        let arm = self
            .arms
            .get_mut(action_vector)
            .expect("pulled arm is not in the population");
        arm.record_pull(reward)
    }

    /// Action vectors ordered best-to-worst by [`Arm::cmp_rank`]. The order is
    /// recomputed only when a mutation has invalidated the cache.
    pub fn ranking(&mut self) -> &[Vec<i32>] {
        if self.ranking.is_none() {
            let mut keys: Vec<Vec<i32>> = self.arms.keys().cloned().collect();
            keys.sort_by(|a, b| self.arms[a].cmp_rank(&self.arms[b]));
            self.ranking = Some(keys);
        }
        self.ranking.as_deref().unwrap()
    }

    /// The best-ranked arm, or `None` while the population is empty.
    pub fn best(&mut self) -> Option<&Arm> {
        if self.arms.is_empty() {
            return None;
        }
        let key = self.ranking()[0].clone();
        self.arms.get(&key)
    }

    /// Clones the arms in ranking order, best first.
    pub fn ranked_arms(&mut self) -> Vec<Arm> {
        self.ranking();
        self.ranking
            .as_ref()
            .unwrap()
            .iter()
            .map(|key| self.arms[key].clone())
            .collect()
    }

    /// Steady-state replacement. If the offspring's action vector is already
    /// present its single pull is merged into the resident arm; otherwise the
    /// worst-ranked arm is evicted and the offspring takes its place. The
    /// best-ranked arm is never evicted: should it be the only candidate for
    /// removal (a single-arm population), the insertion is skipped.
    pub fn replace_worst(&mut self, offspring: Arm) -> Result<(), ArmError> {
        debug_assert_eq!(offspring.n_pulls(), 1, "offspring carry exactly one pull");
        if let Some(existing) = self.arms.get_mut(offspring.action_vector()) {
            // A single pull's mean is that pull's reward.
            let reward = offspring.mean();
            existing.record_pull(reward)?;
            self.ranking = None;
            return Ok(());
        }

        let ranking = self.ranking();
        let best_key = ranking.first().expect("population is empty").clone();
        let worst_key = ranking.last().unwrap().clone();
        if worst_key == best_key {
            return Ok(());
        }
        self.arms.remove(&worst_key);
        self.arms
            .insert(offspring.action_vector().to_vec(), offspring);
        self.ranking = None;
        Ok(())
    }
}
