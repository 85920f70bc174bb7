//! Performance benchmarks for charm decisions
//!
//! Measures a full `can_play` decision over a mid-sized mode list, and
//! the life-dilemma table on its own. Decisions sit on the hot path of
//! AI game simulation, so they should stay allocation-light and well
//! under a microsecond.

use charm_ai::ai::{CharmAi, ScriptedEvaluator, Verdict};
use charm_ai::core::{
    CharmOption, CharmSpell, EntityId, PlayerView, SelectionConstraints, SelectorStrategy,
    StaticFlags,
};
use charm_ai::log::{DecisionLog, VerbosityLevel};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sequential_decision(c: &mut Criterion) {
    let options: Vec<CharmOption> = (1..=8)
        .map(|i| CharmOption::new(EntityId::new(i), format!("Mode {}", i)))
        .collect();
    let mut evaluator = ScriptedEvaluator::new();
    evaluator.set(EntityId::new(5), Verdict::standalone());
    evaluator.set(EntityId::new(7), Verdict::favorable());

    let player = PlayerView::new(EntityId::new(99), 20);
    let statics = StaticFlags::new();
    let ai = CharmAi::with_log(DecisionLog::new(VerbosityLevel::Silent));

    c.bench_function("sequential_decision_8_modes", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        b.iter(|| {
            let mut charm = CharmSpell::new(
                black_box(options.clone()),
                SelectionConstraints::between(2, 2),
            );
            ai.can_play(
                &mut charm,
                &player,
                &statics,
                &evaluator,
                false,
                0,
                &mut rng,
            )
        })
    });
}

fn life_dilemma_decision(c: &mut Criterion) {
    let options = vec![
        CharmOption::new(EntityId::new(1), "You gain 1 life"),
        CharmOption::new(EntityId::new(2), "You lose 1 life"),
    ];
    let mut player = PlayerView::new(EntityId::new(99), 15);
    player.opponents.push(PlayerView::new(EntityId::new(1), 12));
    let statics = StaticFlags::new();
    let ai = CharmAi::with_log(DecisionLog::new(VerbosityLevel::Silent));
    let evaluator = ScriptedEvaluator::new();

    c.bench_function("life_dilemma_decision", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        b.iter(|| {
            let mut charm = CharmSpell::new(
                black_box(options.clone()),
                SelectionConstraints::exactly(1),
            )
            .with_strategy(SelectorStrategy::LifeDilemma);
            ai.can_play(
                &mut charm,
                &player,
                &statics,
                &evaluator,
                false,
                0,
                &mut rng,
            )
        })
    });
}

criterion_group!(benches, sequential_decision, life_dilemma_decision);
criterion_main!(benches);
