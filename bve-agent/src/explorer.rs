//! Exploration strategies.

/// Index of the first largest value, `0` for an empty slice.
pub fn argmax(values: &[f32]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |(best_i, best_v), (i, &v)| {
            if v > best_v {
                (i, v)
            } else {
                (best_i, best_v)
            }
        })
        .0
}

/// Epsilon-greedy action selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpsilonGreedy;

impl EpsilonGreedy {
    /// Takes a uniformly random action with probability `eps`, the greedy one otherwise.
    ///
    /// Returns `0` for empty action values.
    pub fn select(values: &[f32], eps: f64) -> usize {
        if values.is_empty() {
            return 0;
        }
        if fastrand::f64() < eps {
            fastrand::usize(..values.len())
        } else {
            argmax(values)
        }
    }
}
