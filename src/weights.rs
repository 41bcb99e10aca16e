use itertools::Itertools;
use ndarray::{Array1, ArrayView1};
use rand::Rng;

/// The fixed decomposition geometry of one run: one weight vector per
/// subproblem and, for each, the indices of its nearest peers in weight
/// space. Generated once at the start of a run and never mutated.
pub(crate) struct WeightPlan {
    weights: Vec<Array1<f64>>,
    neighbourhoods: Vec<Vec<usize>>,
}

impl WeightPlan {
    /// Samples `population_size` weight vectors uniformly on the simplex
    /// and links each to the `neighbourhood_size` weight vectors closest
    /// to it by Euclidean distance, ties broken by index order. Every
    /// neighbourhood contains its own subproblem (self-distance is zero).
    ///
    /// The caller clamps `neighbourhood_size` to `population_size`.
    pub fn generate<R: Rng>(
        population_size: usize,
        num_objectives: usize,
        neighbourhood_size: usize,
        rng: &mut R,
    ) -> WeightPlan {
        let weights: Vec<Array1<f64>> = (0..population_size)
            .map(|_| sample_simplex(num_objectives, rng))
            .collect();

        let neighbourhoods = weights
            .iter()
            .map(|weight| {
                weights
                    .iter()
                    .enumerate()
                    .map(|(index, other)| (index, euclidean(&weight.view(), &other.view())))
                    .sorted_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
                    .take(neighbourhood_size)
                    .map(|(index, _)| index)
                    .collect()
            })
            .collect();

        WeightPlan {
            weights,
            neighbourhoods,
        }
    }

    pub fn weight(&self, subproblem: usize) -> &Array1<f64> {
        &self.weights[subproblem]
    }

    pub fn neighbourhood(&self, subproblem: usize) -> &[usize] {
        &self.neighbourhoods[subproblem]
    }
}

/// Uniform simplex sample: k-1 sorted cut points on [0, 1]; successive
/// differences give k non-negative components summing to one, the last
/// determined by the first k-1.
fn sample_simplex<R: Rng>(k: usize, rng: &mut R) -> Array1<f64> {
    let mut cuts: Vec<f64> = (0..k - 1).map(|_| rng.gen_range(0.0..1.0)).collect();
    cuts.sort_by(|a, b| a.total_cmp(b));

    let mut components = Vec::with_capacity(k);
    let mut previous = 0.0;
    for cut in cuts {
        components.push(cut - previous);
        previous = cut;
    }
    components.push(1.0 - previous);

    Array1::from(components)
}

fn euclidean(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weights_lie_on_the_simplex() {
        let mut rng = StdRng::seed_from_u64(11);

        for num_objectives in [2, 3, 5] {
            let plan = WeightPlan::generate(40, num_objectives, 10, &mut rng);

            for subproblem in 0..40 {
                let weight = plan.weight(subproblem);
                assert_eq!(weight.len(), num_objectives);
                assert!(weight.iter().all(|&w| w >= 0.0));
                assert_relative_eq!(weight.sum(), 1.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn neighbourhoods_have_the_requested_size_and_contain_self() {
        let mut rng = StdRng::seed_from_u64(7);
        let plan = WeightPlan::generate(30, 3, 8, &mut rng);

        for subproblem in 0..30 {
            let neighbourhood = plan.neighbourhood(subproblem);

            assert_eq!(neighbourhood.len(), 8);
            assert!(neighbourhood.contains(&subproblem));
            assert!(neighbourhood.iter().all_unique());
        }
    }

    #[test]
    fn neighbours_are_sorted_by_distance_to_own_weight() {
        let mut rng = StdRng::seed_from_u64(3);
        let plan = WeightPlan::generate(25, 2, 25, &mut rng);

        for subproblem in 0..25 {
            let own = plan.weight(subproblem).view();
            let distances: Vec<f64> = plan
                .neighbourhood(subproblem)
                .iter()
                .map(|&j| euclidean(&own, &plan.weight(j).view()))
                .collect();

            assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
            assert_eq!(plan.neighbourhood(subproblem)[0], subproblem);
        }
    }

    #[test]
    fn single_objective_weights_degenerate_to_one() {
        let mut rng = StdRng::seed_from_u64(5);
        let plan = WeightPlan::generate(4, 1, 4, &mut rng);

        for subproblem in 0..4 {
            assert_eq!(plan.weight(subproblem).len(), 1);
            assert_relative_eq!(plan.weight(subproblem)[0], 1.0);
        }
    }
}
