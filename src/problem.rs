use dyn_clone::DynClone;

use crate::ObjectiveFunction;

/// A benchmark problem: a named objective set bundled with its decision
/// space, in the shape [`crate::Moead::optimize`] consumes.
pub trait Problem: DynClone {
    fn name(&self) -> &str;

    /// Length of the decision vectors.
    fn dimensions(&self) -> usize;

    fn num_objectives(&self) -> usize;

    /// Lower bound; a single entry broadcasts to every variable.
    fn lower_bound(&self) -> Vec<f64>;

    /// Upper bound; a single entry broadcasts to every variable.
    fn upper_bound(&self) -> Vec<f64>;

    /// Fresh objective functions for one run, in objective order.
    fn objectives(&self) -> Vec<Box<dyn ObjectiveFunction>>;
}

dyn_clone::clone_trait_object!(Problem);
