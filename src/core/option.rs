//! Charm option representation
//!
//! A charm spell offers an ordered list of sub-abilities ("modes"). The
//! AI only needs the option's stable identity, its free-form AI logic
//! tag, and a human-readable description of the effect it will trigger
//! when committed. The effect itself resolves in the external engine.
//!
//! Matches the Java Forge AbilitySub objects produced by
//! CharmEffect.makePossibleOptions().

use crate::core::OptionId;
use serde::{Deserialize, Serialize};

/// AILogic tag value marking a generically acceptable mode, usable to
/// fill the last slot of a compound choice (e.g. Dromoka's Command's
/// +1/+1 counter mode).
pub const GENERIC_FILLER_TAG: &str = "Good";

/// One selectable mode of a charm spell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharmOption {
    /// Stable ID assigned by the game engine
    pub id: OptionId,

    /// Free-form AILogic tag from the card script, if any
    #[serde(default)]
    pub ai_logic: Option<String>,

    /// Description of the sub-effect this mode triggers on commit
    pub effect: String,
}

impl CharmOption {
    pub fn new(id: OptionId, effect: impl Into<String>) -> Self {
        CharmOption {
            id,
            ai_logic: None,
            effect: effect.into(),
        }
    }

    pub fn with_logic(mut self, logic: impl Into<String>) -> Self {
        self.ai_logic = Some(logic.into());
        self
    }

    /// Is this mode tagged as a generic filler for compound choices?
    pub fn is_generic_filler(&self) -> bool {
        self.ai_logic.as_deref() == Some(GENERIC_FILLER_TAG)
    }
}
