//! Decision logging
//!
//! Lightweight logger for recording what the AI decided and why.
//! Entries are owned strings; tests run in `Memory` mode and inspect
//! the captured entries instead of parsing stdout.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};

/// How much decision detail to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum VerbosityLevel {
    Silent,
    Minimal,
    #[default]
    Normal,
    Verbose,
}

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to an in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// Category tag, e.g. "controller_choice"
    pub category: Option<String>,
}

/// Logger for AI decisions
///
/// Interior mutability so read-only decision paths can log; the AI is
/// single-threaded per decision call.
#[derive(Debug, Default)]
pub struct DecisionLog {
    verbosity: VerbosityLevel,
    mode: OutputMode,
    entries: RefCell<Vec<LogEntry>>,
}

impl DecisionLog {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        DecisionLog {
            verbosity,
            mode: OutputMode::Stdout,
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    /// Log a controller-level choice (mode picks, declines)
    pub fn controller_choice(&self, source: &str, message: &str) {
        self.log(
            VerbosityLevel::Normal,
            format!("[{}] {}", source, message),
            Some("controller_choice".to_string()),
        );
    }

    /// Log fine-grained decision internals
    pub fn debug(&self, message: impl Into<String>) {
        self.log(VerbosityLevel::Verbose, message.into(), None);
    }

    /// Read captured entries (Memory/Both modes)
    pub fn entries(&self) -> Ref<'_, Vec<LogEntry>> {
        self.entries.borrow()
    }

    fn log(&self, level: VerbosityLevel, message: String, category: Option<String>) {
        if level > self.verbosity {
            return;
        }
        if matches!(self.mode, OutputMode::Stdout | OutputMode::Both) {
            println!("{}", message);
        }
        if matches!(self.mode, OutputMode::Memory | OutputMode::Both) {
            self.entries.borrow_mut().push(LogEntry {
                level,
                message,
                category,
            });
        }
    }
}
