use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rand_distr::StandardNormal;

/// Produces one child from two parents. With probability `crossover_prob`
/// the child recombines, taking each variable from either parent with
/// equal chance; otherwise it is a plain copy of the first parent.
pub(crate) fn crossover<R: Rng>(
    parent_a: &ArrayView1<'_, f64>,
    parent_b: &ArrayView1<'_, f64>,
    crossover_prob: f64,
    rng: &mut R,
) -> Array1<f64> {
    if !rng.gen_bool(crossover_prob) {
        return parent_a.to_owned();
    }

    Array1::from_shape_fn(parent_a.len(), |i| {
        if rng.gen_bool(0.5) {
            parent_a[i]
        } else {
            parent_b[i]
        }
    })
}

/// Perturbs each variable independently with probability `mutation_prob`
/// by a standard-normal offset scaled by `mutation_strength`, then clamps
/// every variable into the bound box.
pub(crate) fn mutate<R: Rng>(
    child: &mut Array1<f64>,
    mutation_prob: f64,
    mutation_strength: f64,
    lower: &ArrayView1<'_, f64>,
    upper: &ArrayView1<'_, f64>,
    rng: &mut R,
) {
    for (i, value) in child.iter_mut().enumerate() {
        if rng.gen_bool(mutation_prob) {
            let offset: f64 = rng.sample(StandardNormal);
            *value += mutation_strength * offset;
        }
        *value = value.clamp(lower[i], upper[i]);
    }
}
