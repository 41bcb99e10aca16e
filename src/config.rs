use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::MoeadError;

/// Tunable parameters of the optimizer.
///
/// Fields may be changed freely between runs; they are validated once, at
/// the start of the next [`crate::Moead::optimize`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoeadConfig {
    /// Number of subproblems, which is also the number of weight vectors
    /// and population members.
    pub population_size: usize,
    /// Probability that a child is recombined from both parents rather
    /// than copied from the first.
    pub crossover_prob: f64,
    /// Per-variable probability of applying a mutation offset.
    pub mutation_prob: f64,
    /// Scale of the gaussian mutation offset.
    pub mutation_strength: f64,
    /// Number of nearest weight vectors forming each neighbourhood.
    /// Clamped to `population_size` when larger.
    pub neighbourhood_size: usize,
    /// Number of generations to run before terminating.
    pub num_generations: usize,
    /// Lower bound per decision variable; a single entry broadcasts to
    /// every variable.
    pub lower_bound: Vec<f64>,
    /// Upper bound per decision variable; a single entry broadcasts to
    /// every variable.
    pub upper_bound: Vec<f64>,
}

impl Default for MoeadConfig {
    fn default() -> Self {
        MoeadConfig {
            population_size: 100,
            crossover_prob: 0.6,
            mutation_prob: 0.3,
            mutation_strength: 1e-3,
            neighbourhood_size: 50,
            num_generations: 100,
            lower_bound: vec![0.0],
            upper_bound: vec![1.0],
        }
    }
}

impl MoeadConfig {
    pub(crate) fn validate(
        &self,
        dimensions: usize,
        num_objectives: usize,
    ) -> Result<(), MoeadError> {
        if num_objectives == 0 {
            return Err(MoeadError::NoObjectives);
        }
        if self.population_size == 0 {
            return Err(MoeadError::EmptyPopulation);
        }
        if dimensions == 0 {
            return Err(MoeadError::EmptyDecisionSpace);
        }
        if self.num_generations == 0 {
            return Err(MoeadError::ZeroGenerations);
        }

        for (name, value) in [
            ("crossover_prob", self.crossover_prob),
            ("mutation_prob", self.mutation_prob),
        ] {
            if !value.is_finite() {
                return Err(MoeadError::NonFiniteParameter { name, value });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(MoeadError::InvalidProbability { name, value });
            }
        }

        if !self.mutation_strength.is_finite() {
            return Err(MoeadError::NonFiniteParameter {
                name: "mutation_strength",
                value: self.mutation_strength,
            });
        }

        self.broadcast_bounds(dimensions).map(|_| ())
    }

    /// Expands the bound vectors to one entry per decision variable.
    pub(crate) fn broadcast_bounds(
        &self,
        dimensions: usize,
    ) -> Result<(Array1<f64>, Array1<f64>), MoeadError> {
        let lower = broadcast(&self.lower_bound, dimensions)?;
        let upper = broadcast(&self.upper_bound, dimensions)?;

        for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() {
                return Err(MoeadError::NonFiniteParameter {
                    name: "lower_bound",
                    value: lo,
                });
            }
            if !hi.is_finite() {
                return Err(MoeadError::NonFiniteParameter {
                    name: "upper_bound",
                    value: hi,
                });
            }
            if lo > hi {
                return Err(MoeadError::InvertedBound {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }

        Ok((lower, upper))
    }
}

fn broadcast(bound: &[f64], dimensions: usize) -> Result<Array1<f64>, MoeadError> {
    match bound.len() {
        1 => Ok(Array1::from_elem(dimensions, bound[0])),
        n if n == dimensions => Ok(Array1::from(bound.to_vec())),
        n => Err(MoeadError::BoundLengthMismatch {
            expected: dimensions,
            found: n,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MoeadConfig::default();

        assert_eq!(config.population_size, 100);
        assert_eq!(config.crossover_prob, 0.6);
        assert_eq!(config.mutation_prob, 0.3);
        assert_eq!(config.mutation_strength, 1e-3);
        assert_eq!(config.neighbourhood_size, 50);
        assert_eq!(config.lower_bound, vec![0.0]);
        assert_eq!(config.upper_bound, vec![1.0]);
    }

    #[test]
    fn scalar_bounds_broadcast_to_every_variable() {
        let config = MoeadConfig {
            lower_bound: vec![-2.0],
            upper_bound: vec![3.0],
            ..MoeadConfig::default()
        };

        let (lower, upper) = config.broadcast_bounds(4).unwrap();

        assert_eq!(lower.len(), 4);
        assert!(lower.iter().all(|&v| v == -2.0));
        assert!(upper.iter().all(|&v| v == 3.0));
    }

    #[test]
    fn mismatched_bound_length_is_rejected() {
        let config = MoeadConfig {
            lower_bound: vec![0.0, 0.0, 0.0],
            ..MoeadConfig::default()
        };

        assert_eq!(
            config.validate(2, 2),
            Err(MoeadError::BoundLengthMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = MoeadConfig {
            lower_bound: vec![1.0, 5.0],
            upper_bound: vec![2.0, 4.0],
            ..MoeadConfig::default()
        };

        assert_eq!(
            config.validate(2, 2),
            Err(MoeadError::InvertedBound {
                index: 1,
                lower: 5.0,
                upper: 4.0
            })
        );
    }

    #[test]
    fn probabilities_outside_unit_interval_are_rejected() {
        let config = MoeadConfig {
            mutation_prob: 1.5,
            ..MoeadConfig::default()
        };

        assert_eq!(
            config.validate(2, 2),
            Err(MoeadError::InvalidProbability {
                name: "mutation_prob",
                value: 1.5
            })
        );
    }

    #[test]
    fn zero_objectives_are_rejected() {
        assert_eq!(
            MoeadConfig::default().validate(2, 0),
            Err(MoeadError::NoObjectives)
        );
    }
}
