pub mod cycles;
pub mod labels;

use rand::Rng;

pub use cycles::{sample_cycle_lengths, CycleLengths};
pub use labels::{sample_labels, LabelArrangement};

/// The two draws the samplers need. Every `rand::Rng` is a source; tests can
/// plug in a scripted one.
pub trait RandomSource {
    /// Uniform real in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` is always at least 1.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays fixed draws in order. Panics when a script runs dry.
    #[derive(Debug, Default)]
    pub struct ScriptedSource {
        units: VecDeque<f64>,
        integers: VecDeque<usize>,
    }

    impl ScriptedSource {
        pub fn new(units: &[f64], integers: &[usize]) -> Self {
            ScriptedSource {
                units: units.iter().copied().collect(),
                integers: integers.iter().copied().collect(),
            }
        }

        pub fn exhausted(&self) -> bool {
            self.units.is_empty() && self.integers.is_empty()
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_unit(&mut self) -> f64 {
            self.units.pop_front().expect("unit script exhausted")
        }

        fn next_below(&mut self, bound: usize) -> usize {
            let value = self.integers.pop_front().expect("integer script exhausted");
            assert!(value < bound, "scripted {value} outside [0, {bound})");
            value
        }
    }
}
