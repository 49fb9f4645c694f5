//! Livesub Rule Engine - line-scoped live find/replace
//!
//! As the user types, the line under the cursor is run through an ordered
//! list of regular-expression rules and rewritten in place.
//!
//! # Architecture
//!
//! - **Compilation**: every find pattern is compiled once per configuration
//!   change under the normalized flag set. One bad pattern disables the
//!   whole rule set until it is fixed.
//! - **Sequential rewrite**: rules run in list order, each on the previous
//!   rule's output, and the line is written back at most once per event.
//! - **Re-entrancy guard**: the write-back re-triggers the host's change
//!   notification synchronously; that nested call is ignored.
//!
//! # Example
//!
//! ```no_run
//! use livesub_config::Configuration;
//! use livesub_rule_engine::RewriteEngine;
//!
//! let config = Configuration::default();
//! let mut engine = RewriteEngine::new();
//! engine.compile(&config).expect("default rules compile");
//!
//! let line = engine.rewrite_line("see WC:12345678", &config.rules);
//! assert!(line.is_some());
//! ```

pub mod constants;
mod dialect;
pub mod editor;
pub mod engine;
pub mod flags;
pub mod live;
pub mod matcher;
pub mod template;

// Re-export core types
pub use constants::*;
pub use editor::Editor;
pub use engine::{CompiledRuleSet, RewriteEngine};
pub use flags::EffectiveFlags;
pub use live::{ChangeOutcome, LiveReplace};
pub use matcher::CompiledMatcher;
pub use template::ReplacementTemplate;

/// Error raised when the rule set cannot be compiled
///
/// Cloneable so the engine can keep the last failure for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("Rule {index}: pattern is {len} bytes long (maximum {max})")]
    PatternTooLong { index: usize, len: usize, max: usize },

    #[error("Rule {index} ({description:?}): invalid regular expression: {message}")]
    InvalidPattern {
        index: usize,
        description: String,
        message: String,
    },
}

impl CompileError {
    /// Index of the offending rule
    pub fn rule_index(&self) -> usize {
        match self {
            CompileError::PatternTooLong { index, .. } | CompileError::InvalidPattern { index, .. } => {
                *index
            }
        }
    }
}
