use super::RandomSource;
use crate::error::EsfResult;
use crate::permutation::EsfParameters;
use serde::Serialize;

/// Cycle lengths in order of discovery. Always a composition of the size it
/// was sampled for: every entry is positive and the entries sum to `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleLengths(Vec<usize>);

impl CycleLengths {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn cycle_count(&self) -> usize {
        self.0.len()
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Feller coupling. Step `i` (0-based) opens a new cycle with probability
/// `alpha / (alpha + i)`, otherwise the open cycle grows by one. Step 0 has
/// probability 1, so the first element always opens the first cycle.
///
/// Fails with `InvalidParameter` unless `alpha` is finite and positive.
pub fn sample_cycle_lengths<R>(n: usize, alpha: f64, rng: &mut R) -> EsfResult<CycleLengths>
where
    R: RandomSource + ?Sized,
{
    let params = EsfParameters::new(n, alpha)?;
    Ok(feller_coupling(&params, rng))
}

pub(crate) fn feller_coupling<R>(params: &EsfParameters, rng: &mut R) -> CycleLengths
where
    R: RandomSource + ?Sized,
{
    let alpha = params.alpha();
    let mut lengths: Vec<usize> = Vec::new();
    for i in 0..params.n() {
        let threshold = alpha / (alpha + i as f64);
        let draw = rng.next_unit();
        match lengths.last_mut() {
            Some(open) if draw >= threshold => *open += 1,
            _ => lengths.push(1),
        }
    }
    log::trace!("feller coupling n={} alpha={alpha}: {} cycles", params.n(), lengths.len());
    CycleLengths(lengths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EsfError;
    use crate::sampling::scripted::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_size_has_no_cycles() {
        let mut rng = StdRng::seed_from_u64(7);
        let lengths = sample_cycle_lengths(0, 1.0, &mut rng).unwrap();
        assert!(lengths.is_empty());
        assert_eq!(lengths.total(), 0);
    }

    #[test]
    fn single_element_is_a_fixed_point_for_any_alpha() {
        for alpha in [0.01, 0.5, 1.0, 3.0, 1e6] {
            let mut rng = StdRng::seed_from_u64(11);
            let lengths = sample_cycle_lengths(1, alpha, &mut rng).unwrap();
            assert_eq!(lengths.as_slice(), &[1]);
        }
    }

    #[test]
    fn scripted_draws_follow_thresholds() {
        // alpha = 1: thresholds are 1, 1/2, 1/3, 1/4, 1/5
        let mut source = ScriptedSource::new(&[0.99, 0.6, 0.2, 0.3, 0.1], &[]);
        let lengths = sample_cycle_lengths(5, 1.0, &mut source).unwrap();
        assert_eq!(lengths.as_slice(), &[2, 2, 1]);
        assert!(source.exhausted());
    }

    #[test]
    fn draw_equal_to_threshold_extends() {
        let mut source = ScriptedSource::new(&[0.0, 0.5], &[]);
        let lengths = sample_cycle_lengths(2, 1.0, &mut source).unwrap();
        assert_eq!(lengths.as_slice(), &[2]);
    }

    #[test]
    fn tiny_alpha_collapses_to_one_cycle() {
        let mut source = ScriptedSource::new(&[0.5; 6], &[]);
        let lengths = sample_cycle_lengths(6, 1e-9, &mut source).unwrap();
        assert_eq!(lengths.as_slice(), &[6]);
    }

    #[test]
    fn huge_alpha_splits_into_fixed_points() {
        let mut source = ScriptedSource::new(&[0.5; 4], &[]);
        let lengths = sample_cycle_lengths(4, 1e12, &mut source).unwrap();
        assert_eq!(lengths.as_slice(), &[1, 1, 1, 1]);
    }

    #[test]
    fn rejects_non_positive_alpha_without_drawing() {
        for alpha in [0.0, -2.0, f64::NAN] {
            let mut source = ScriptedSource::new(&[], &[]);
            assert!(matches!(
                sample_cycle_lengths(6, alpha, &mut source),
                Err(EsfError::InvalidParameter(_))
            ));
            assert!(source.exhausted());
        }
    }
}
