use ndarray::{Array1, ArrayView1};
use rand::Rng;

use crate::{ObjectiveFunction, RuntimeProcessor};

/// The current population: one decision vector and one objective vector
/// per subproblem, index-aligned with the weight vectors, plus the
/// running ideal point. Mutated in place during the generation loop.
pub(crate) struct Population {
    decisions: Vec<Array1<f64>>,
    objectives: Vec<Array1<f64>>,
    ideal_point: Array1<f64>,
}

impl Population {
    /// Samples `size` decision vectors uniformly within the bound box,
    /// evaluates them, and seeds the ideal point with the componentwise
    /// minimum of the initial objective vectors.
    pub fn initialise<R: Rng>(
        size: usize,
        objective_fns: &mut [Box<dyn ObjectiveFunction + '_>],
        lower: &ArrayView1<'_, f64>,
        upper: &ArrayView1<'_, f64>,
        processor: &mut dyn RuntimeProcessor,
        rng: &mut R,
    ) -> Population {
        let mut population = Population {
            decisions: Vec::with_capacity(size),
            objectives: Vec::with_capacity(size),
            ideal_point: Array1::from_elem(objective_fns.len(), f64::INFINITY),
        };

        for _ in 0..size {
            let decision =
                Array1::from_shape_fn(lower.len(), |i| rng.gen_range(lower[i]..=upper[i]));
            let evaluated = evaluate(objective_fns, &decision, processor);

            population.update_ideal(&evaluated);
            population.decisions.push(decision);
            population.objectives.push(evaluated);
        }

        population
    }

    /// Lowers ideal point components to any smaller finite value observed
    /// in `candidate`. Non-finite observations are ignored.
    pub fn update_ideal(&mut self, candidate: &Array1<f64>) {
        for (best, &observed) in self.ideal_point.iter_mut().zip(candidate.iter()) {
            if observed.is_finite() && observed < *best {
                *best = observed;
            }
        }
    }

    pub fn replace(&mut self, subproblem: usize, decision: Array1<f64>, objectives: Array1<f64>) {
        self.decisions[subproblem] = decision;
        self.objectives[subproblem] = objectives;
    }

    pub fn decision(&self, subproblem: usize) -> &Array1<f64> {
        &self.decisions[subproblem]
    }

    pub fn objective(&self, subproblem: usize) -> &Array1<f64> {
        &self.objectives[subproblem]
    }

    pub fn decisions(&self) -> &[Array1<f64>] {
        &self.decisions
    }

    pub fn objectives(&self) -> &[Array1<f64>] {
        &self.objectives
    }

    pub fn ideal_point(&self) -> &Array1<f64> {
        &self.ideal_point
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }
}

/// Runs every objective function once on `decision`, in supply order,
/// collecting the results into one objective vector and reporting the
/// evaluation to the processor.
pub(crate) fn evaluate(
    objective_fns: &mut [Box<dyn ObjectiveFunction + '_>],
    decision: &Array1<f64>,
    processor: &mut dyn RuntimeProcessor,
) -> Array1<f64> {
    let view = decision.view();
    let objectives = Array1::from_shape_fn(objective_fns.len(), |j| {
        objective_fns[j].evaluate(&view)
    });

    processor.candidate_evaluated(decision, &objectives);
    objectives
}
