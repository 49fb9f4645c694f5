//! Safety limits applied when compiling user-supplied patterns
//!
//! Patterns come straight from a settings text field and run on every
//! keystroke, so compilation bounds both size and backtracking work.

/// Maximum find-pattern length in bytes
pub const MAX_PATTERN_LENGTH: usize = 1_000;

/// Maximum backtracking steps for a single match attempt
///
/// Patterns using lookaround or backreferences run on the backtracking VM.
/// An attempt exceeding this limit is abandoned and the rule leaves the line
/// untouched for that event.
pub const BACKTRACK_LIMIT: usize = 1_000_000;

/// Compiled size limit for the delegated regex automaton (10MB)
pub const REGEX_SIZE_LIMIT: usize = 10_000_000;

/// DFA size limit for the delegated regex automaton (2MB)
pub const REGEX_DFA_SIZE_LIMIT: usize = 2_000_000;
