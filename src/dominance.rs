use ndarray::ArrayView1;

/// Pareto dominance under the minimization convention: `a` dominates `b`
/// when it is no worse in every objective and strictly better in at least
/// one. Two vectors may be mutually non-dominating.
///
/// Vectors carrying a non-finite component lose every comparison: they
/// never dominate, and any fully finite vector dominates them. This keeps
/// candidates with broken objective values out of the best front.
pub fn dominates(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> bool {
    if a.iter().any(|v| !v.is_finite()) {
        return false;
    }
    if b.iter().any(|v| !v.is_finite()) {
        return true;
    }

    a.iter().zip(b.iter()).all(|(x, y)| x <= y) && a.iter().zip(b.iter()).any(|(x, y)| x < y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn strict_improvement_dominates() {
        let a = array![0.0, 0.5];
        let b = array![0.1, 0.5];

        assert!(dominates(&a.view(), &b.view()));
        assert!(!dominates(&b.view(), &a.view()));
    }

    #[test]
    fn dominance_is_irreflexive() {
        let a = array![1.0, 2.0, 3.0];

        assert!(!dominates(&a.view(), &a.view()));
    }

    #[test]
    fn trade_offs_are_incomparable() {
        let a = array![0.0, 1.0];
        let b = array![1.0, 0.0];

        assert!(!dominates(&a.view(), &b.view()));
        assert!(!dominates(&b.view(), &a.view()));
    }

    #[test]
    fn non_finite_vector_never_dominates() {
        let broken = array![f64::NAN, 0.0];
        let infinite = array![f64::INFINITY, 0.0];
        let finite = array![10.0, 10.0];

        assert!(!dominates(&broken.view(), &finite.view()));
        assert!(!dominates(&infinite.view(), &finite.view()));
    }

    #[test]
    fn finite_vector_dominates_non_finite() {
        let broken = array![f64::NAN, 0.0];
        let finite = array![10.0, 10.0];

        assert!(dominates(&finite.view(), &broken.view()));
    }

    #[test]
    fn two_non_finite_vectors_are_incomparable() {
        let a = array![f64::NAN, 0.0];
        let b = array![0.0, f64::INFINITY];

        assert!(!dominates(&a.view(), &b.view()));
        assert!(!dominates(&b.view(), &a.view()));
    }
}
