//! Charm AI - scenario runner
//!
//! Runs one charm decision over a JSON scenario file: the offered
//! modes (with scripted evaluator verdicts), the acting player's view,
//! the global static effects, and the timing/activation inputs. Useful
//! for exercising the decision logic against hand-written board states
//! without a full game engine.

use charm_ai::ai::{CharmAi, ScriptedEvaluator, Verdict};
use charm_ai::core::{
    CharmOption, CharmSpell, EntityId, PlayerView, SelectionConstraints, SelectorStrategy,
    StaticEffect, StaticFlags,
};
use charm_ai::log::{DecisionLog, VerbosityLevel};
use charm_ai::{CharmError, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use std::path::PathBuf;

/// Verbosity level (names or numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "charm")]
#[command(about = "Charm AI - modal choice decision runner", long_about = None)]
struct Cli {
    /// Scenario file (.json)
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity level (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "normal", short = 'v')]
    verbosity: VerbosityArg,
}

/// One offered mode plus its scripted evaluator verdict
#[derive(Debug, Deserialize)]
struct ScenarioOption {
    id: u32,
    effect: String,
    #[serde(default)]
    ai_logic: Option<String>,
    #[serde(default)]
    verdict: Verdict,
}

/// A complete decision scenario
#[derive(Debug, Deserialize)]
struct Scenario {
    options: Vec<ScenarioOption>,

    /// Target number of picks (CharmNum)
    count: usize,

    /// Minimum picks (MinCharmNum); defaults to `count`
    #[serde(default)]
    minimum: Option<usize>,

    #[serde(default)]
    allow_repeat: bool,

    #[serde(default)]
    strategy: SelectorStrategy,

    player: PlayerView,

    #[serde(default)]
    global_effects: Vec<StaticEffect>,

    /// Is the charm a trigger that must resolve?
    #[serde(default)]
    trigger: bool,

    #[serde(default)]
    activations_this_turn: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.scenario)?;
    let scenario: Scenario = serde_json::from_str(&text)?;

    let mut evaluator = ScriptedEvaluator::new();
    let mut options = Vec::with_capacity(scenario.options.len());
    for entry in &scenario.options {
        let id = EntityId::new(entry.id);
        if options.iter().any(|o: &CharmOption| o.id == id) {
            return Err(CharmError::InvalidScenario(format!(
                "duplicate mode id {}",
                entry.id
            )));
        }
        let mut option = CharmOption::new(id, entry.effect.clone());
        option.ai_logic = entry.ai_logic.clone();
        options.push(option);
        evaluator.set(id, entry.verdict);
    }

    let constraints = SelectionConstraints {
        count: scenario.count,
        minimum: scenario.minimum.unwrap_or(scenario.count),
        allow_repeat: scenario.allow_repeat,
    };
    let mut charm = CharmSpell::new(options, constraints).with_strategy(scenario.strategy);

    let mut statics = StaticFlags::new();
    for effect in scenario.global_effects {
        statics.insert(effect);
    }

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let ai = CharmAi::with_log(DecisionLog::new(cli.verbosity.0));
    let played = ai.can_play(
        &mut charm,
        &scenario.player,
        &statics,
        &evaluator,
        scenario.trigger,
        scenario.activations_this_turn,
        &mut rng,
    );

    if let (true, Some(chosen)) = (played, &charm.chosen) {
        println!("PLAY ({} mode(s)):", chosen.len());
        for id in chosen {
            let effect = charm
                .options
                .iter()
                .find(|o| o.id == *id)
                .map(|o| o.effect.as_str())
                .unwrap_or("<unknown mode>");
            println!("  [{}] {}", id, effect);
        }
    } else {
        println!("DECLINE");
    }

    Ok(())
}
