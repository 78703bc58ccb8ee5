//! # `params` – From User Parameters to Integer Actions and Back
//!
//! The optimizer only ever sees bounded integer vectors. This module maps the
//! three user-facing parameter shapes onto that representation and back:
//!
//! | Shape | Internal bounds | Decoding |
//! |-------|-----------------|----------|
//! | [`IntParam`] | `(low, high)` rescaled by `step` | identity, or `min(low + (x - low) * step, high)` |
//! | [`FloatParam`] | `(0, n_steps)` | linear or log interpolation between `low` and `high` |
//! | [`CategoricalParam`] | `(0, len - 1)` | index into the choices |
//!
//! The shapes are a closed set, modeled as tagged variants of [`Param`] with
//! `bounds()` and `decode()` operations. Decoding is pure and total once a
//! parameter has been constructed; all validation happens in the
//! constructors.
//!
//! A [`ParamSpace`] is an ordered collection of named parameters. Its bounds
//! concatenate in declaration order, and [`ParamSpace::decode`] slices an
//! action vector back into per-parameter values the same way.
use std::collections::BTreeMap;

use thiserror::Error;

/// Error type for parameter construction.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("high must be greater than low (got low={low}, high={high})")]
    InvalidIntRange { low: i32, high: i32 },
    #[error("high must be greater than low (got low={low}, high={high})")]
    InvalidFloatRange { low: f64, high: f64 },
    #[error("size must be a positive integer")]
    InvalidSize,
    #[error("step must be a positive integer")]
    InvalidStep,
    #[error("n_steps must be a positive integer")]
    InvalidSteps,
    #[error("log-scaled float parameters require low > 0 (got {low})")]
    NonPositiveLogBound { low: f64 },
    #[error("categorical parameters require at least one choice")]
    EmptyChoices,
}

/// A decoded parameter value handed to the objective.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    IntVec(Vec<i64>),
    Float(f64),
    FloatVec(Vec<f64>),
    Str(String),
    Bool(bool),
}

impl ParamValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// Integer parameter: values in `[low, high]` at a given `step` granularity,
/// optionally repeated `size` times.
#[derive(Debug, Clone, PartialEq)]
pub struct IntParam {
    low: i32,
    high: i32,
    size: usize,
    step: i32,
}

impl IntParam {
    pub fn new(low: i32, high: i32, size: usize, step: i32) -> Result<Self, ParamError> {
        if high <= low {
            return Err(ParamError::InvalidIntRange { low, high });
        }
        if size == 0 {
            return Err(ParamError::InvalidSize);
        }
        if step < 1 {
            return Err(ParamError::InvalidStep);
        }
        Ok(Self {
            low,
            high,
            size,
            step,
        })
    }

    /// Upper bound of the internal representation. With `step > 1` the span
    /// is divided into `step`-sized increments, rounding the last partial
    /// increment up so `high` stays reachable.
    fn internal_high(&self) -> i32 {
        if self.step == 1 {
            return self.high;
        }
        let span = self.high - self.low;
        self.low + span / self.step + if span % self.step != 0 { 1 } else { 0 }
    }

    pub fn bounds(&self) -> Vec<(i32, i32)> {
        vec![(self.low, self.internal_high()); self.size]
    }

    pub fn decode(&self, actions: &[i32]) -> ParamValue {
        debug_assert_eq!(actions.len(), self.size);
        let values: Vec<i64> = actions
            .iter()
            .map(|&x| {
                if self.step > 1 {
                    (self.low as i64 + (x - self.low) as i64 * self.step as i64)
                        .min(self.high as i64)
                } else {
                    x as i64
                }
            })
            .collect();
        if self.size == 1 {
            ParamValue::Int(values[0])
        } else {
            ParamValue::IntVec(values)
        }
    }
}

/// Float parameter discretized into `n_steps` uniform increments between
/// `low` and `high`, on a linear or logarithmic scale.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatParam {
    low: f64,
    high: f64,
    size: usize,
    n_steps: i32,
    log: bool,
}

impl FloatParam {
    pub fn new(low: f64, high: f64, size: usize, n_steps: i32) -> Result<Self, ParamError> {
        Self::build(low, high, size, n_steps, false)
    }

    /// Log-scaled variant: steps are uniform in `ln(x)`, so each increment
    /// multiplies the value by a constant factor. Requires `low > 0`.
    pub fn new_log(low: f64, high: f64, size: usize, n_steps: i32) -> Result<Self, ParamError> {
        if low <= 0.0 {
            return Err(ParamError::NonPositiveLogBound { low });
        }
        Self::build(low, high, size, n_steps, true)
    }

    fn build(low: f64, high: f64, size: usize, n_steps: i32, log: bool) -> Result<Self, ParamError> {
        if !(high > low) {
            return Err(ParamError::InvalidFloatRange { low, high });
        }
        if size == 0 {
            return Err(ParamError::InvalidSize);
        }
        if n_steps < 1 {
            return Err(ParamError::InvalidSteps);
        }
        Ok(Self {
            low,
            high,
            size,
            n_steps,
            log,
        })
    }

    pub fn bounds(&self) -> Vec<(i32, i32)> {
        vec![(0, self.n_steps); self.size]
    }

    pub fn decode(&self, actions: &[i32]) -> ParamValue {
        debug_assert_eq!(actions.len(), self.size);
        let values: Vec<f64> = actions
            .iter()
            .map(|&x| {
                let fraction = x as f64 / self.n_steps as f64;
                if self.log {
                    (self.low.ln() + (self.high.ln() - self.low.ln()) * fraction).exp()
                } else {
                    self.low + (self.high - self.low) * fraction
                }
            })
            .collect();
        if self.size == 1 {
            ParamValue::Float(values[0])
        } else {
            ParamValue::FloatVec(values)
        }
    }
}

/// Categorical parameter: a finite ordered sequence of choices, encoded as
/// the choice index.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalParam {
    choices: Vec<ParamValue>,
}

impl CategoricalParam {
    pub fn new(choices: Vec<ParamValue>) -> Result<Self, ParamError> {
        if choices.is_empty() {
            return Err(ParamError::EmptyChoices);
        }
        Ok(Self { choices })
    }

    pub fn bounds(&self) -> Vec<(i32, i32)> {
        vec![(0, self.choices.len() as i32 - 1)]
    }

    pub fn decode(&self, actions: &[i32]) -> ParamValue {
        debug_assert_eq!(actions.len(), 1);
        self.choices[actions[0] as usize].clone()
    }
}

/// One parameter of any shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(IntParam),
    Float(FloatParam),
    Categorical(CategoricalParam),
}

impl Param {
    /// Number of action-vector slots this parameter occupies.
    pub fn size(&self) -> usize {
        match self {
            Param::Int(p) => p.size,
            Param::Float(p) => p.size,
            Param::Categorical(_) => 1,
        }
    }

    /// Internal integer bounds, one pair per occupied slot.
    pub fn bounds(&self) -> Vec<(i32, i32)> {
        match self {
            Param::Int(p) => p.bounds(),
            Param::Float(p) => p.bounds(),
            Param::Categorical(p) => p.bounds(),
        }
    }

    /// Maps this parameter's slice of the action vector to its value.
    pub fn decode(&self, actions: &[i32]) -> ParamValue {
        match self {
            Param::Int(p) => p.decode(actions),
            Param::Float(p) => p.decode(actions),
            Param::Categorical(p) => p.decode(actions),
        }
    }
}

impl From<IntParam> for Param {
    fn from(p: IntParam) -> Self {
        Param::Int(p)
    }
}

impl From<FloatParam> for Param {
    fn from(p: FloatParam) -> Self {
        Param::Float(p)
    }
}

impl From<CategoricalParam> for Param {
    fn from(p: CategoricalParam) -> Self {
        Param::Categorical(p)
    }
}

/// Decoded trial parameters as handed to the objective.
pub type TrialParams = BTreeMap<String, ParamValue>;

/// An ordered collection of named parameters defining the solution space.
#[derive(Debug, Clone, Default)]
pub struct ParamSpace {
    params: Vec<(String, Param)>,
}

impl ParamSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter; the declaration order fixes the layout of the
    /// internal action vector.
    pub fn with(mut self, name: impl Into<String>, param: impl Into<Param>) -> Self {
        self.params.push((name.into(), param.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Total number of action-vector dimensions.
    pub fn dimension(&self) -> usize {
        self.params.iter().map(|(_, p)| p.size()).sum()
    }

    /// Concatenated internal bounds, in declaration order.
    pub fn bounds(&self) -> Vec<(i32, i32)> {
        self.params.iter().flat_map(|(_, p)| p.bounds()).collect()
    }

    /// Maps an internal action vector to the named parameter values.
    pub fn decode(&self, action_vector: &[i32]) -> TrialParams {
        debug_assert_eq!(action_vector.len(), self.dimension());
        let mut result = TrialParams::new();
        let mut idx = 0;
        for (name, param) in &self.params {
            let size = param.size();
            result.insert(name.clone(), param.decode(&action_vector[idx..idx + size]));
            idx += size;
        }
        result
    }
}
