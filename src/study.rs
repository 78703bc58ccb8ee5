//! # `study` – One Optimization Task, Many Runs
//!
//! A [`Study`] wraps the optimizer for hyperparameter-search style use: the
//! objective takes *named, decoded* parameter values instead of raw integer
//! vectors, and the same task can be repeated over several independent runs
//! whose seeds derive deterministically from the study seed
//! (`seed, seed + 1, …`). Each run owns a disjoint population and RNG stream.
//!
//! Across runs the study reports the minimum observed mean (`best_value`),
//! its decoded configuration (`best_params`) and the average of the per-run
//! best means (`mean_value`).
//!
//! ```rust,no_run
//! use gmab::{IntParam, ParamSpace, Study, TrialParams};
//!
//! fn objective(params: &TrialParams) -> f64 {
//!     let x = params["x"].as_i64().unwrap() as f64;
//!     (x - 3.0).powi(2)
//! }
//!
//! let space = ParamSpace::new().with("x", IntParam::new(-10, 10, 1, 1).unwrap());
//! let mut study = Study::new(Some(42));
//! let best = study.optimize(objective, space, 200).unwrap();
//! println!("best trial: {best:?}");
//! ```
use rand::Rng;
use thiserror::Error;

use crate::{
    algorithm::{GmabBuilder, GmabError, builder::DEFAULT_POPULATION_SIZE},
    arm::Arm,
    evaluator::ObjectiveFn,
    params::{ParamSpace, TrialParams},
    search_space::SearchSpace,
};

/// Error type for the study facade.
#[derive(Debug, Error)]
pub enum StudyError {
    #[error("study has not been optimized yet; call optimize first")]
    NotOptimized,
    #[error(transparent)]
    Algorithm(#[from] GmabError),
}

/// User-supplied objective over decoded trial parameters, lower is better.
pub trait TrialObjective: Sync {
    fn call(&self, params: &TrialParams) -> f64;
}

impl<F> TrialObjective for F
where
    F: Fn(&TrialParams) -> f64 + Sync,
{
    fn call(&self, params: &TrialParams) -> f64 {
        self(params)
    }
}

/// Bridges a [`TrialObjective`] to the integer-vector objective the driver
/// expects by decoding each action vector before the call.
struct DecodedObjective<'a, F>
where
    F: TrialObjective,
{
    objective: &'a F,
    space: &'a ParamSpace,
}

impl<F> ObjectiveFn for DecodedObjective<'_, F>
where
    F: TrialObjective,
{
    fn call(&self, action_vector: &[i32]) -> f64 {
        self.objective.call(&self.space.decode(action_vector))
    }
}

/// Result of a single run: its derived seed and its top arms, ascending by
/// mean.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub seed: u64,
    pub arms: Vec<Arm>,
}

/// An optimization task: an objective over a parameter space, optimized by
/// one or more GMAB runs with deterministically derived sub-seeds.
#[derive(Debug)]
pub struct Study {
    seed: u64,
    runs: Vec<RunReport>,
    param_space: Option<ParamSpace>,
}

impl Study {
    /// Creates a study. Without a seed the results are not reproducible, so
    /// one is drawn from system entropy and a warning is printed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            println!("Warning: no seed provided, drawing one from system entropy");
            rand::rng().random()
        });
        Self {
            seed,
            runs: Vec::new(),
            param_space: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Per-run reports of the last optimization, in run order.
    pub fn runs(&self) -> &[RunReport] {
        &self.runs
    }

    /// Optimizes the objective with a single run and a budget of `n_trials`
    /// evaluations, returning the decoded parameters of the best trial.
    pub fn optimize<F>(
        &mut self,
        objective: F,
        param_space: ParamSpace,
        n_trials: usize,
    ) -> Result<TrialParams, StudyError>
    where
        F: TrialObjective,
    {
        self.optimize_multi_run(objective, param_space, n_trials, 1, 1)?;
        self.best_params()
    }

    /// Optimizes the objective `n_runs` times with sub-seeds
    /// `seed, seed + 1, …`, each run getting its own budget of `n_trials`
    /// evaluations and reporting its top `n_best` arms.
    pub fn optimize_multi_run<F>(
        &mut self,
        objective: F,
        param_space: ParamSpace,
        n_trials: usize,
        n_best: usize,
        n_runs: usize,
    ) -> Result<(), StudyError>
    where
        F: TrialObjective,
    {
        if n_runs == 0 {
            return Err(GmabError::InvalidConfig("n_runs must be at least 1".to_string()).into());
        }

        let bounds = param_space.bounds();
        // Small solution spaces get a population of every point they have.
        let space = SearchSpace::new(bounds.clone()).map_err(GmabError::from)?;
        let population_size = if (DEFAULT_POPULATION_SIZE as u128) <= space.cardinality() {
            DEFAULT_POPULATION_SIZE
        } else {
            space.cardinality() as usize
        };

        let mut runs = Vec::with_capacity(n_runs);
        for run in 0..n_runs {
            let run_seed = self.seed.wrapping_add(run as u64);
            let decoded = DecodedObjective {
                objective: &objective,
                space: &param_space,
            };
            let mut gmab = GmabBuilder::default()
                .objective(decoded)
                .bounds(bounds.clone())
                .population_size(population_size)
                .seed(run_seed)
                .build()?;
            let arms = gmab.optimize_best(n_trials, n_best)?;
            runs.push(RunReport {
                seed: run_seed,
                arms,
            });
        }
        self.runs = runs;
        self.param_space = Some(param_space);
        Ok(())
    }

    /// The best arm observed across all runs.
    pub fn best_arm(&self) -> Result<&Arm, StudyError> {
        self.runs
            .iter()
            .filter_map(|run| run.arms.first())
            .min_by(|a, b| a.cmp_rank(b))
            .ok_or(StudyError::NotOptimized)
    }

    /// Minimum observed mean across runs.
    pub fn best_value(&self) -> Result<f64, StudyError> {
        Ok(self.best_arm()?.mean())
    }

    /// Decoded parameters of the overall best arm.
    pub fn best_params(&self) -> Result<TrialParams, StudyError> {
        let arm = self.best_arm()?;
        let space = self.param_space.as_ref().ok_or(StudyError::NotOptimized)?;
        Ok(space.decode(arm.action_vector()))
    }

    /// Average of the per-run best means.
    pub fn mean_value(&self) -> Result<f64, StudyError> {
        if self.runs.is_empty() {
            return Err(StudyError::NotOptimized);
        }
        let best_means: Vec<f64> = self
            .runs
            .iter()
            .filter_map(|run| run.arms.first())
            .map(Arm::mean)
            .collect();
        Ok(best_means.iter().sum::<f64>() / best_means.len() as f64)
    }
}
