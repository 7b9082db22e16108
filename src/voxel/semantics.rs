//! Semantic class distribution stored per voxel

use std::fmt;

/// Per-voxel semantic distribution: one non-negative score per known
/// class, plus the number of observations fused so far (the weight used
/// by the running mean in [`crate::voxel::fusion`]).
///
/// An empty score vector means "never observed". The vector grows to the
/// widest observation seen; it is never truncated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Semantics {
    pub scores: Vec<f32>,
    pub count: u32,
}

impl Semantics {
    /// Unset distribution (no observations)
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn new(scores: Vec<f32>) -> Self {
        Self { scores, count: 0 }
    }

    /// True once at least one class score is stored
    pub fn is_set(&self) -> bool {
        !self.scores.is_empty()
    }

    /// Index of the highest-scoring class, first occurrence on ties.
    /// None when unset.
    pub fn argmax_class(&self) -> Option<u32> {
        let mut best: Option<(u32, f32)> = None;
        for (i, &score) in self.scores.iter().enumerate() {
            match best {
                Some((_, s)) if score <= s => {}
                _ => best = Some((i as u32, score)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Scale the distribution so the scores sum to 1.
    ///
    /// Deliberately unguarded: a zero-sum (degenerate) distribution
    /// divides by zero and leaves non-finite scores behind. Callers must
    /// avoid normalizing all-zero vectors or treat non-finite results as
    /// unset.
    pub fn normalize(&mut self) {
        let sum: f32 = self.scores.iter().sum();
        for score in &mut self.scores {
            *score /= sum;
        }
    }
}

impl fmt::Display for Semantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.scores {
            write!(f, "{} ", score)?;
        }
        Ok(())
    }
}
