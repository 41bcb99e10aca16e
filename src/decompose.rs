use ndarray::ArrayView1;

/// Substituted for zero weight components so that no objective drops out
/// of the max entirely.
pub const WEIGHT_EPSILON: f64 = 1e-4;

/// Weighted Tchebycheff scalarization of one objective vector: the maximum
/// over objectives of the weighted absolute deviation from the ideal
/// point. Pure function; smaller is better.
pub fn tchebycheff(
    weights: &ArrayView1<'_, f64>,
    ideal_point: &ArrayView1<'_, f64>,
    candidate: &ArrayView1<'_, f64>,
) -> f64 {
    let mut value = 0.0_f64;

    for ((&weight, &ideal), &objective) in weights
        .iter()
        .zip(ideal_point.iter())
        .zip(candidate.iter())
    {
        let weight = if weight == 0.0 { WEIGHT_EPSILON } else { weight };
        value = value.max(weight * (objective - ideal).abs());
    }

    value
}
