//! Charm spell representation
//!
//! A charm is a single spell or ability offering an ordered list of
//! modes, of which a constrained subset must or may be chosen before
//! resolution. The AI writes its chosen list back onto the spell, the
//! way the Java code calls `sa.setChosenList()`.

use crate::core::{CharmOption, OptionId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered list of chosen mode IDs, in pick order
pub type Selection = SmallVec<[OptionId; 4]>;

/// Cardinality constraint on a charm's mode choice
///
/// Mirrors the CharmNum / MinCharmNum / CanRepeatModes card parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConstraints {
    /// Target number of picks
    pub count: usize,

    /// Minimum number of picks (defaults to `count`)
    pub minimum: usize,

    /// May the same mode be chosen more than once?
    #[serde(default)]
    pub allow_repeat: bool,
}

impl SelectionConstraints {
    /// Constraint choosing exactly `count` modes
    pub fn exactly(count: usize) -> Self {
        SelectionConstraints {
            count,
            minimum: count,
            allow_repeat: false,
        }
    }

    /// Constraint choosing between `minimum` and `count` modes
    pub fn between(minimum: usize, count: usize) -> Self {
        SelectionConstraints {
            count,
            minimum,
            allow_repeat: false,
        }
    }

    pub fn with_repeat(mut self) -> Self {
        self.allow_repeat = true;
        self
    }
}

/// Which selection strategy resolves this charm
///
/// The Java code branched on the activating player's identity and on
/// the host card's name ("Triskaidekaphobia"); a closed enum carries
/// the same dispatch without string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectorStrategy {
    /// General heuristic selection
    #[default]
    General,

    /// The choice is dictated to a party other than the activator
    /// (the Alliances "an opponent chooses" charms)
    AssignedToOpponent,

    /// The gain-or-lose-life dilemma (Triskaidekaphobia): options[0]
    /// gains life, options[1] loses life
    LifeDilemma,
}

/// A modal spell awaiting mode selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharmSpell {
    /// Offered modes, in card order; order is meaningful
    pub options: Vec<CharmOption>,

    pub constraints: SelectionConstraints,

    #[serde(default)]
    pub strategy: SelectorStrategy,

    /// Memorized chosen list, written once per decision call.
    /// Cleared at the start of the next call, never carried across.
    #[serde(default)]
    pub chosen: Option<Selection>,
}

impl CharmSpell {
    pub fn new(options: Vec<CharmOption>, constraints: SelectionConstraints) -> Self {
        CharmSpell {
            options,
            constraints,
            strategy: SelectorStrategy::General,
            chosen: None,
        }
    }

    pub fn with_strategy(mut self, strategy: SelectorStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_constructors() {
        let c = SelectionConstraints::exactly(2);
        assert_eq!(c.count, 2);
        assert_eq!(c.minimum, 2);
        assert!(!c.allow_repeat);

        let c = SelectionConstraints::between(1, 3).with_repeat();
        assert_eq!(c.minimum, 1);
        assert_eq!(c.count, 3);
        assert!(c.allow_repeat);
    }
}
