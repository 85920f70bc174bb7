//! Gain-or-lose-life dilemma resolver
//!
//! Port of CharmAi.chooseTriskaidekaphobia(): a two-mode charm where
//! options[0] gains life and options[1] loses life, played in a world
//! where hitting exactly 13 life loses the game. The right answer is a
//! nonlinear function of the acting player's life and capabilities,
//! life-inversion effects on either side of the table, and the global
//! life-gain modifiers in play. The table below is first-match-wins;
//! the thresholds (5, 10, 12, 13, 14, 17) are load-bearing.
//!
//! Reference: CharmAi.java lines 104-187

use crate::core::{CharmOption, PlayerView, Selection, StaticEffect, StaticFlags};
use smallvec::smallvec;

pub fn select(options: &[CharmOption], ai: &PlayerView, statics: &StaticFlags) -> Selection {
    // Malformed dilemma - decline and let the caller's forced
    // fallback produce whatever it can
    if options.len() < 2 {
        return Selection::new();
    }
    let gain = options[0].id;
    let lose = options[1].id;

    let opp_inverted = ai.opponent_controls(StaticEffect::LifeGainInverted);
    let ally_inverted = ai.team_controls(StaticEffect::LifeGainInverted);
    let life = ai.life;

    let pick = if !ai.can_lose_life || ai.cant_lose_game {
        // Losing life is harmless to us; gain unless our own
        // inversion turns the gain mode sour
        if ally_inverted {
            lose
        } else {
            gain
        }
    } else if opp_inverted || statics.is_in_effect(StaticEffect::LifeGainNullified) {
        // Gain is negated (or worse) - unless we could not gain
        // anyway, in which case the negation is irrelevant
        if ai.can_gain_life {
            lose
        } else {
            gain
        }
    } else if statics.is_in_effect(StaticEffect::NoGainExtraLoss) {
        if life >= 17 {
            lose
        } else if life < 13 || (life - 13) % 2 == 1 {
            // don't land on 13 after the extra loss
            gain
        } else {
            lose
        }
    } else if ai.can_gain_life && life <= 5 {
        // critical life, take the points
        gain
    } else if !ai.can_gain_life && life == 14 {
        // can't gain, so avoid falling to 13
        if opp_inverted {
            lose
        } else {
            gain
        }
    } else if ally_inverted {
        // Our inversion turns an opponent's gain into loss: feed it to
        // an opponent stuck at 14, as long as we don't land on 13
        let opp_critical = life != 14
            && ai
                .opponents
                .iter()
                .any(|p| p.life == 14 && !p.can_gain_life && p.can_lose_life);
        if life == 12 || opp_critical {
            lose
        } else {
            gain
        }
    } else {
        // Normal logic: gain near the danger zone, and deny an
        // opponent sitting at 12 the climb to safety
        let opp_critical =
            life != 12 && ai.opponents.iter().any(|p| p.life == 12 && p.can_gain_life);
        if life == 14 || life <= 10 || opp_critical {
            gain
        } else {
            lose
        }
    };

    smallvec![pick]
}
