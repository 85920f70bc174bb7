//! Variable-count mode selection with a forced top-up pass
//!
//! Port of CharmAi.chooseOptionsAi(). Pass 1 fills up to `count` slots:
//! a mode that is worth playing standalone flips `play_now` and takes
//! the slot; otherwise the first favorable mode does, except in the
//! final slot of a charm we are not yet committed to. Pass 2 runs only
//! when we are committed (`play_now`) but still short of `minimum`, and
//! asks the evaluator with must-pick semantics. Slots are not
//! guaranteed to fill; callers tolerate short selections.
//!
//! Reference: CharmAi.java lines 59-102

use crate::ai::evaluator::{OptionEvaluator, PlayDecision};
use crate::ai::pool::CandidatePool;
use crate::core::Selection;

pub fn select(
    pool: &mut CandidatePool,
    evaluator: &dyn OptionEvaluator,
    mut play_now: bool,
    count: usize,
    minimum: usize,
) -> Selection {
    let mut chosen = Selection::new();

    for slot in 0..count {
        let mut pick = None;
        for index in 0..pool.len() {
            let candidate = pool.get(index);
            if !play_now && evaluator.can_play_standalone(candidate) == PlayDecision::WillPlay {
                // worth doing on its own merits - commit to the charm
                play_now = true;
                pick = Some(index);
                break;
            }
            if (play_now || slot + 1 < count) && evaluator.is_favorable(candidate, false) {
                pick = Some(index);
                break;
            }
        }
        if let Some(index) = pick {
            chosen.push(pool.take(index).id);
        }
    }

    // Top up to the minimum for triggers we are committed to
    if play_now && chosen.len() < minimum {
        for _ in 0..minimum {
            let pick = (0..pool.len()).find(|&index| evaluator.is_favorable(pool.get(index), true));
            if let Some(index) = pick {
                chosen.push(pool.take(index).id);
            }
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::evaluator::{ScriptedEvaluator, Verdict};
    use crate::core::{CharmOption, EntityId};

    fn opt(id: u32) -> CharmOption {
        CharmOption::new(EntityId::new(id), format!("Mode {}", id))
    }

    #[test]
    fn test_standalone_pick_flips_play_now() {
        // A is worth playing standalone; B becomes pickable once the
        // charm is committed.
        let options = vec![opt(1), opt(2), opt(3)];
        let eval = ScriptedEvaluator::new()
            .with(EntityId::new(1), Verdict::standalone())
            .with(EntityId::new(2), Verdict::favorable());

        let mut pool = CandidatePool::new(&options, false);
        let chosen = select(&mut pool, &eval, false, 2, 2);

        assert_eq!(chosen.as_slice(), &[EntityId::new(1), EntityId::new(2)]);
    }

    #[test]
    fn test_declines_when_nothing_standalone() {
        // Favorable-only modes never commit an uncommitted single-mode
        // charm: the last slot requires a standalone reason to play.
        let options = vec![opt(1), opt(2)];
        let eval = ScriptedEvaluator::new()
            .with(EntityId::new(1), Verdict::favorable())
            .with(EntityId::new(2), Verdict::favorable());

        let mut pool = CandidatePool::new(&options, false);
        let chosen = select(&mut pool, &eval, false, 1, 1);

        assert!(chosen.is_empty());
    }

    #[test]
    fn test_forced_top_up_reaches_minimum() {
        // Nothing is favorable on its merits, but the trigger must
        // resolve: pass 2 accepts the must-pick modes.
        let options = vec![opt(1), opt(2), opt(3)];
        let eval = ScriptedEvaluator::new()
            .with(EntityId::new(2), Verdict::if_forced())
            .with(EntityId::new(3), Verdict::if_forced());

        let mut pool = CandidatePool::new(&options, false);
        let chosen = select(&mut pool, &eval, true, 2, 2);

        assert_eq!(chosen.as_slice(), &[EntityId::new(2), EntityId::new(3)]);
    }

    #[test]
    fn test_top_up_skipped_when_not_committed() {
        let options = vec![opt(1), opt(2)];
        let eval = ScriptedEvaluator::new()
            .with(EntityId::new(1), Verdict::if_forced())
            .with(EntityId::new(2), Verdict::if_forced());

        let mut pool = CandidatePool::new(&options, false);
        let chosen = select(&mut pool, &eval, false, 2, 2);

        assert!(chosen.is_empty());
    }

    #[test]
    fn test_under_filled_selection_is_returned() {
        let options = vec![opt(1)];
        let eval = ScriptedEvaluator::new().with(EntityId::new(1), Verdict::standalone());

        let mut pool = CandidatePool::new(&options, false);
        let chosen = select(&mut pool, &eval, false, 3, 1);

        assert_eq!(chosen.as_slice(), &[EntityId::new(1)]);
    }

    #[test]
    fn test_repeat_allowed_re_offers_modes() {
        let options = vec![opt(1)];
        let eval = ScriptedEvaluator::new().with(EntityId::new(1), Verdict::standalone());

        let mut pool = CandidatePool::new(&options, true);
        let chosen = select(&mut pool, &eval, false, 3, 1);

        assert_eq!(
            chosen.as_slice(),
            &[EntityId::new(1), EntityId::new(1), EntityId::new(1)]
        );
    }
}
