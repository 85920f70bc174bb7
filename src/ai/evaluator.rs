//! Evaluator seam between the charm AI and the rest of the engine
//!
//! The charm selectors never judge a mode themselves; they ask the
//! surrounding AI controller whether a mode would be played standalone
//! (`canPlaySa` in Java) and whether committing to it is favorable
//! (`doTrigger`). Those live behind [`OptionEvaluator`] so the
//! selection logic can be exercised without a full game state.

use crate::core::{CharmOption, OptionId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Outcome of asking whether a mode would be played as a standalone
/// action right now
///
/// Mirrors the Java AiPlayDecision values the charm logic cares about;
/// everything that is not `WillPlay` is a refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayDecision {
    /// Worth doing right now, independent of the charm
    WillPlay,
    /// Playable but the timing is wrong
    BadTiming,
    /// Not playable at all
    #[default]
    CantPlay,
}

/// External judgment of individual charm modes
pub trait OptionEvaluator {
    /// Would this mode be played right now as a standalone action?
    fn can_play_standalone(&self, option: &CharmOption) -> PlayDecision;

    /// Is committing to this mode favorable? With `mandatory` set the
    /// evaluator is told something must be accepted if at all
    /// plausible (forced trigger semantics).
    fn is_favorable(&self, option: &CharmOption, mandatory: bool) -> bool;
}

/// Canned per-mode verdicts for a [`ScriptedEvaluator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Verdict {
    #[serde(default)]
    pub play: PlayDecision,

    /// `is_favorable(_, false)`
    #[serde(default)]
    pub favorable: bool,

    /// `is_favorable(_, true)`
    #[serde(default)]
    pub favorable_if_forced: bool,
}

impl Verdict {
    /// Mode worth playing on its own
    pub fn standalone() -> Self {
        Verdict {
            play: PlayDecision::WillPlay,
            favorable: true,
            favorable_if_forced: true,
        }
    }

    /// Mode worth committing to, but not standalone
    pub fn favorable() -> Self {
        Verdict {
            play: PlayDecision::BadTiming,
            favorable: true,
            favorable_if_forced: true,
        }
    }

    /// Mode acceptable only when the choice is mandatory
    pub fn if_forced() -> Self {
        Verdict {
            play: PlayDecision::CantPlay,
            favorable: false,
            favorable_if_forced: true,
        }
    }
}

/// Evaluator answering from a fixed table of verdicts
///
/// Used by tests and the scenario runner as a deterministic stand-in
/// for the real per-ability evaluation. Unknown modes are refused.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvaluator {
    verdicts: FxHashMap<OptionId, Verdict>,
}

impl ScriptedEvaluator {
    pub fn new() -> Self {
        ScriptedEvaluator::default()
    }

    pub fn set(&mut self, id: OptionId, verdict: Verdict) -> &mut Self {
        self.verdicts.insert(id, verdict);
        self
    }

    pub fn with(mut self, id: OptionId, verdict: Verdict) -> Self {
        self.verdicts.insert(id, verdict);
        self
    }
}

impl OptionEvaluator for ScriptedEvaluator {
    fn can_play_standalone(&self, option: &CharmOption) -> PlayDecision {
        self.verdicts.get(&option.id).map(|v| v.play).unwrap_or_default()
    }

    fn is_favorable(&self, option: &CharmOption, mandatory: bool) -> bool {
        self.verdicts
            .get(&option.id)
            .map(|v| if mandatory { v.favorable_if_forced } else { v.favorable })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharmOption, EntityId};

    #[test]
    fn test_scripted_evaluator_defaults_to_refusal() {
        let eval = ScriptedEvaluator::new();
        let opt = CharmOption::new(EntityId::new(1), "Draw a card");

        assert_eq!(eval.can_play_standalone(&opt), PlayDecision::CantPlay);
        assert!(!eval.is_favorable(&opt, false));
        assert!(!eval.is_favorable(&opt, true));
    }

    #[test]
    fn test_scripted_evaluator_verdicts() {
        let opt = CharmOption::new(EntityId::new(1), "Destroy target artifact");
        let eval = ScriptedEvaluator::new().with(opt.id, Verdict::if_forced());

        assert_eq!(eval.can_play_standalone(&opt), PlayDecision::CantPlay);
        assert!(!eval.is_favorable(&opt, false));
        assert!(eval.is_favorable(&opt, true));
    }
}
