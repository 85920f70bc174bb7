//! Charm mode selection AI
//!
//! Faithful port of the Java Forge CharmAi decision logic. `CharmAi`
//! is the entry point; it dispatches to one of three selectors and
//! gates the result on an activation throttle.
//!
//! Reference: forge-java/forge-ai/src/main/java/forge/ai/ability/CharmAi.java

pub mod charm_ai;
pub mod evaluator;
pub mod fixed_count;
pub mod life_dilemma;
pub mod pool;
pub mod sequential;
pub mod throttle;

pub use charm_ai::CharmAi;
pub use evaluator::{OptionEvaluator, PlayDecision, ScriptedEvaluator, Verdict};
pub use pool::CandidatePool;
