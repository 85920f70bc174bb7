//! Read-only player views for AI decisions
//!
//! The engine hands the AI a fresh snapshot of the acting player (and,
//! transitively, allies and opponents) per decision call. Nothing here
//! is mutated by the AI.

use crate::core::PlayerId;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Static replacement effects that change what life gain/loss means.
///
/// These replace the Java code's `isCardInPlay(name)` checks with a
/// closed enum, so the AI branches on what the effect does rather than
/// on a card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaticEffect {
    /// Life gain by the controller's opponents becomes life loss
    /// (Tainted Remedy). Player-scoped: lives on the controller's view.
    LifeGainInverted,

    /// Life gain is nullified for everyone (Rain of Gore). Global.
    LifeGainNullified,

    /// No life gain, and life loss hits harder (Sulfuric Vortex). Global.
    NoGainExtraLoss,
}

/// Set of static effects currently active game-wide
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticFlags {
    effects: FxHashSet<StaticEffect>,
}

impl StaticFlags {
    pub fn new() -> Self {
        StaticFlags::default()
    }

    pub fn insert(&mut self, effect: StaticEffect) {
        self.effects.insert(effect);
    }

    pub fn is_in_effect(&self, effect: StaticEffect) -> bool {
        self.effects.contains(&effect)
    }
}

/// Read-only snapshot of a player for heuristic evaluation
///
/// `allies` and `opponents` are relative to this player, in the
/// engine's seating order. Nested views carry empty relationship lists
/// of their own; the heuristics only ever look one hop out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,

    /// Life total
    pub life: i32,

    /// Can this player gain life? (false under e.g. Forsaken Wastes)
    #[serde(default = "default_true")]
    pub can_gain_life: bool,

    /// Can this player lose life? (false under e.g. Platinum Emperion)
    #[serde(default = "default_true")]
    pub can_lose_life: bool,

    /// Is this player unable to lose the game? (e.g. Platinum Angel)
    #[serde(default)]
    pub cant_lose_game: bool,

    /// Player-scoped static effects this player controls
    #[serde(default)]
    pub controlled_effects: FxHashSet<StaticEffect>,

    #[serde(default)]
    pub allies: Vec<PlayerView>,
    #[serde(default)]
    pub opponents: Vec<PlayerView>,
}

impl PlayerView {
    pub fn new(id: PlayerId, life: i32) -> Self {
        PlayerView {
            id,
            life,
            can_gain_life: true,
            can_lose_life: true,
            cant_lose_game: false,
            controlled_effects: FxHashSet::default(),
            allies: Vec::new(),
            opponents: Vec::new(),
        }
    }

    /// Does this player control the given player-scoped effect?
    pub fn controls(&self, effect: StaticEffect) -> bool {
        self.controlled_effects.contains(&effect)
    }

    /// Does this player, or any of their allies, control the effect?
    pub fn team_controls(&self, effect: StaticEffect) -> bool {
        self.controls(effect) || self.allies.iter().any(|p| p.controls(effect))
    }

    /// Does any opponent of this player control the effect?
    pub fn opponent_controls(&self, effect: StaticEffect) -> bool {
        self.opponents.iter().any(|p| p.controls(effect))
    }
}
