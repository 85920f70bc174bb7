//! Compound mode selection: exactly `minimum` modes or nothing
//!
//! Port of CharmAi.chooseMultipleOptionsAi(), used for charms that
//! demand several modes at once (Cryptic Command, the Dragons of
//! Tarkir commands). One ordered scan collects modes that are worth
//! playing standalone; a mode tagged as a generic filler is held back
//! and only used to complete a selection that came up one short.
//!
//! The filler goes to the FRONT of the result. That is a deliberate
//! special case, not general policy: downstream targeting of dependent
//! modes (Dromoka's Command's fight mode) needs the filler evaluated
//! first. Do not generalize it to other insertions.
//!
//! Reference: CharmAi.java lines 189-217

use crate::ai::evaluator::{OptionEvaluator, PlayDecision};
use crate::ai::pool::CandidatePool;
use crate::core::{OptionId, Selection};

pub fn select(pool: &CandidatePool, evaluator: &dyn OptionEvaluator, minimum: usize) -> Selection {
    let mut filler: Option<OptionId> = None;
    let mut chosen = Selection::new();

    for candidate in pool.iter() {
        if candidate.is_generic_filler() && evaluator.is_favorable(candidate, false) {
            // Hold the first favorable filler back for the final slot
            if filler.is_none() {
                filler = Some(candidate.id);
            }
        } else if evaluator.can_play_standalone(candidate) == PlayDecision::WillPlay {
            chosen.push(candidate.id);
            if chosen.len() == minimum {
                break;
            }
        }
    }

    // Complete a one-short selection with the filler, anchored up front
    if chosen.len() + 1 == minimum {
        if let Some(id) = filler {
            chosen.insert(0, id);
        }
    }

    // A compound choice is all or nothing
    if chosen.len() != minimum {
        chosen.clear();
    }
    chosen
}
