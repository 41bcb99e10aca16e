use thiserror::Error;

/// Precondition failures detected at the start of an optimize call.
///
/// The one configuration problem that is not an error is a neighbourhood
/// size exceeding the population size; it is clamped with a warning
/// instead, see [`crate::Moead::optimize`].
#[derive(Debug, Error, PartialEq)]
pub enum MoeadError {
    #[error("at least one objective function is required")]
    NoObjectives,

    #[error("population size must be greater than zero")]
    EmptyPopulation,

    #[error("decision space must have at least one variable")]
    EmptyDecisionSpace,

    #[error("number of generations must be greater than zero")]
    ZeroGenerations,

    #[error("bound vector of length {found} does not apply to {expected} decision variables")]
    BoundLengthMismatch { expected: usize, found: usize },

    #[error("lower bound {lower} exceeds upper bound {upper} at variable {index}")]
    InvertedBound {
        index: usize,
        lower: f64,
        upper: f64,
    },

    #[error("{name} must lie within [0, 1] (received {value})")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("{name} must be finite (received {value})")]
    NonFiniteParameter { name: &'static str, value: f64 },
}
