use super::RandomSource;
use serde::Serialize;

/// The labels `1..=n`, each exactly once, in sampled order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelArrangement(Vec<usize>);

impl LabelArrangement {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

/// Fisher-Yates over `1..=n`: position `i` swaps with a uniform pick from the
/// remaining suffix `i..n`.
pub fn sample_labels<R>(n: usize, rng: &mut R) -> LabelArrangement
where
    R: RandomSource + ?Sized,
{
    let mut values: Vec<usize> = (1..=n).collect();
    for i in 0..n {
        let offset = rng.next_below(n - i);
        values.swap(i, i + offset);
    }
    LabelArrangement(values)
}
