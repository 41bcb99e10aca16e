//! MOEA/D: a multi-objective evolutionary optimizer based on decomposition.
//!
//! The multi-objective problem is split into `population_size` scalar
//! subproblems, one per weight vector, each minimized with the weighted
//! Tchebycheff value relative to the running ideal point. Candidates are
//! bred inside weight-space neighbourhoods, and every evaluated candidate
//! is folded into a Pareto-dominance archive that forms the returned front.

use ndarray::{Array1, ArrayView1};

pub mod decompose;
pub mod dominance;
pub mod problem;

mod archive;
mod config;
mod error;
mod operators;
mod population;
mod solver;
mod weights;


pub use archive::FrontMember;
pub use config::MoeadConfig;
pub use error::MoeadError;
pub use solver::{Moead, Phase};

/// One scalar objective over the decision space.
///
/// The optimizer treats objective functions as opaque: it composes the
/// values of all configured objectives into one objective vector per
/// candidate, in the order the functions were supplied.
pub trait ObjectiveFunction {
    fn evaluate(&mut self, x: &ArrayView1<'_, f64>) -> f64;
}

impl<F> ObjectiveFunction for F
where
    F: for<'a, 'b> FnMut(&'a ArrayView1<'b, f64>) -> f64,
{
    fn evaluate(&mut self, x: &ArrayView1<'_, f64>) -> f64 {
        self(x)
    }
}

/// Hooks invoked synchronously at fixed points of a run.
///
/// A processor may inspect the evolving state and request an early stop;
/// the request is honored between generations, never mid-generation.
pub trait RuntimeProcessor {
    /// The initial population has been sampled and evaluated.
    fn population_initialized(&mut self, _decisions: &[Array1<f64>], _objectives: &[Array1<f64>]) {}

    /// A candidate has been run through every objective function.
    fn candidate_evaluated(&mut self, _decision: &Array1<f64>, _objectives: &Array1<f64>) {}

    /// A full pass over all subproblems has finished.
    fn generation_finished(
        &mut self,
        _generation: usize,
        _ideal_point: &Array1<f64>,
        _front: &[FrontMember],
    ) {
    }

    /// Queried after every generation; returning true ends the run early.
    fn needs_early_stop(&mut self) -> bool {
        false
    }
}

/// A processor that observes nothing and never stops the run.
pub struct NoProgress;

impl RuntimeProcessor for NoProgress {}
