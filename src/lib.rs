//! Charm AI - modal choice decision engine ported from Java Forge
//!
//! This crate ports the Forge AI's handling of modal ("charm") spells:
//! given an ordered list of sub-effects and a cardinality constraint,
//! decide which modes to pick, how many, and in what order. The game
//! engine itself (rules, stack, priority, effect resolution) stays on
//! the far side of the evaluator traits in [`ai::evaluator`].
//!
//! Reference: forge-java/forge-ai/src/main/java/forge/ai/ability/CharmAi.java

pub mod ai;
pub mod core;
pub mod error;
pub mod log;

pub use error::{CharmError, Result};
