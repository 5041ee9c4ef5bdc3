//! Weighted random selection.
//!
//! Every "which player was involved" decision in the engine runs through
//! `weighted_pick`: a subtractive draw over `(item, weight)` candidates.
//! Domain selectors build their candidate lists with position base weights,
//! attribute multipliers, and a jitter factor so the top-rated player does
//! not win every single draw.

use crate::engine::tuning::VARIANCE_FLOOR;
use rand::Rng;

/// Draw one item from a weighted candidate set.
///
/// Draws uniform in `[0, total)` and subtracts weights in iteration order;
/// the candidate that takes the remainder to <= 0 wins. Floating-point
/// drift that exhausts the list falls back to the first candidate.
/// Returns `None` only for an empty list; zero-weight candidates are
/// effectively never selected while total weight is positive.
pub fn weighted_pick<T: Copy, R: Rng>(rng: &mut R, candidates: &[(T, f32)]) -> Option<T> {
    let first = candidates.first()?;
    let total: f32 = candidates.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return Some(first.0);
    }

    let mut remaining = rng.gen::<f32>() * total;
    for (item, weight) in candidates {
        remaining -= weight.max(0.0);
        if remaining <= 0.0 {
            return Some(*item);
        }
    }

    Some(first.0)
}

/// Jitter a base weight into `[VARIANCE_FLOOR * w, w]`.
pub fn vary_weight<R: Rng>(rng: &mut R, weight: f32) -> f32 {
    if weight <= 0.0 {
        return 0.0;
    }
    weight * (VARIANCE_FLOOR + rng.gen::<f32>() * (1.0 - VARIANCE_FLOOR))
}
