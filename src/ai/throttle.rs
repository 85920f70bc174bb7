//! Activation throttle
//!
//! Prevents run-away repeated activations of the same charm within one
//! turn: the first activation always goes through, each later one is
//! accepted with geometrically decaying probability. The activation
//! counter is owned by the game engine (reset at turn start) and passed
//! in; the throttle consumes exactly one random draw per decision.
//!
//! Reference: CharmAi.java line 56

use rand::Rng;

/// Acceptance decay per prior activation this turn
pub const REACTIVATION_DECAY: f64 = 0.6667;

/// Accept with probability `REACTIVATION_DECAY ^ activations_this_turn`
pub fn allow_activation<R: Rng + ?Sized>(rng: &mut R, activations_this_turn: u32) -> bool {
    rng.gen::<f64>() <= REACTIVATION_DECAY.powi(activations_this_turn as i32)
}
