//! Charm decision entry point
//!
//! `CharmAi::can_play` is the one call the surrounding controller
//! makes: it picks the mode list, writes it onto the spell, and says
//! whether the charm should be played at all. Dispatch runs on the
//! spell's `SelectorStrategy`, with a forced retry for triggers that
//! must resolve, and the activation throttle as the final gate.
//!
//! Reference: CharmAi.canPlayAI(), CharmAi.java lines 20-57

use crate::ai::evaluator::OptionEvaluator;
use crate::ai::pool::CandidatePool;
use crate::ai::{fixed_count, life_dilemma, sequential, throttle};
use crate::core::{CharmSpell, PlayerView, SelectorStrategy, StaticFlags};
use crate::log::DecisionLog;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Default)]
pub struct CharmAi {
    log: DecisionLog,
}

impl CharmAi {
    pub fn new() -> Self {
        CharmAi::default()
    }

    pub fn with_log(log: DecisionLog) -> Self {
        CharmAi { log }
    }

    pub fn log(&self) -> &DecisionLog {
        &self.log
    }

    /// Decide whether to play `charm`, storing the chosen mode list on
    /// the spell.
    ///
    /// `is_trigger` marks a charm that is already committed to resolve
    /// (triggered use with no opt-out); it both seeds the sequential
    /// selector's `play_now` flag and arms the forced retry.
    /// `activations_this_turn` is the engine-owned counter behind the
    /// throttle; the engine resets it at turn start.
    ///
    /// Returns false to decline. The stored selection may be shorter
    /// than requested; callers tolerate under-filled choices.
    pub fn can_play<R: Rng + ?Sized>(
        &self,
        charm: &mut CharmSpell,
        ai: &PlayerView,
        statics: &StaticFlags,
        evaluator: &dyn OptionEvaluator,
        is_trigger: bool,
        activations_this_turn: u32,
        rng: &mut R,
    ) -> bool {
        let count = charm.constraints.count;
        let minimum = charm.constraints.minimum;

        // Reset the chosen list, otherwise it stays locked in from an
        // earlier call
        charm.chosen = None;

        let mut chosen = match charm.strategy {
            SelectorStrategy::AssignedToOpponent => {
                // Dictated choice: skip the first mode, take the rest
                // verbatim. Crude, but generally the least disastrous.
                charm.options.iter().skip(1).map(|o| o.id).collect()
            }
            SelectorStrategy::LifeDilemma => life_dilemma::select(&charm.options, ai, statics),
            SelectorStrategy::General => {
                if minimum > 1 {
                    let pool = CandidatePool::new(&charm.options, charm.constraints.allow_repeat);
                    fixed_count::select(&pool, evaluator, minimum)
                } else {
                    let mut pool =
                        CandidatePool::new(&charm.options, charm.constraints.allow_repeat);
                    sequential::select(&mut pool, evaluator, is_trigger, count, minimum)
                }
            }
        };

        if chosen.is_empty() {
            if is_trigger {
                // The trigger resolves either way; take the least-bad
                // minimum from a fresh pool
                let mut pool = CandidatePool::new(&charm.options, charm.constraints.allow_repeat);
                chosen = sequential::select(&mut pool, evaluator, true, count, minimum);
            } else {
                self.log
                    .controller_choice("CHARM", "declined: no worthwhile mode combination");
                return false;
            }
        }

        self.log.controller_choice(
            "CHARM",
            &format!(
                "chose {} of {} modes: {:?}",
                chosen.len(),
                charm.options.len(),
                chosen.iter().map(|id| id.as_u32()).collect::<Vec<_>>()
            ),
        );
        charm.chosen = Some(chosen);

        // prevent run-away activations - first time always goes through
        let allowed = throttle::allow_activation(rng, activations_this_turn);
        if !allowed {
            self.log.controller_choice(
                "CHARM",
                &format!(
                    "throttled after {} activations this turn",
                    activations_this_turn
                ),
            );
        }
        allowed
    }

    /// Pick the player a charm asks the AI to single out (the
    /// "an opponent chooses" spells): uniform random opponent.
    ///
    /// Reference: CharmAi.chooseSinglePlayer()
    pub fn choose_single_player<'a, R: Rng + ?Sized>(
        &self,
        opponents: &'a [PlayerView],
        rng: &mut R,
    ) -> Option<&'a PlayerView> {
        opponents.choose(rng)
    }
}
