//! Computer opponent decision policy.

use rand::Rng;

use super::common::Decision;

/// Probability that the computer flips on any given turn.
pub const FLIP_PROBABILITY: f64 = 0.5;

/// Draw an independent fair decision.
///
/// Each call is a fresh Bernoulli(0.5) trial. The coin's current face is never
/// consulted, so consecutive computer turns are uncorrelated with each other
/// and with the game state.
pub fn fair_decision<R: Rng + ?Sized>(rng: &mut R) -> Decision {
    Decision::from(rng.random_bool(FLIP_PROBABILITY))
}
