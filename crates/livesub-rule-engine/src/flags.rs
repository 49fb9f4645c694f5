//! Effective flag set derived from the configured flag text.

use livesub_config::Flag;
use std::fmt;

/// Normalized flags applied to every compiled rule.
///
/// Built from the raw configured text by dropping unrecognized letters and
/// duplicates (first occurrence wins), then appending `g` when forced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveFlags {
    flags: Vec<Flag>,
}

impl EffectiveFlags {
    pub fn normalize(raw: &str, force_global: bool) -> Self {
        let mut flags: Vec<Flag> = Vec::with_capacity(Flag::ALL.len());
        for flag in raw.chars().filter_map(Flag::from_char) {
            if !flags.contains(&flag) {
                flags.push(flag);
            }
        }

        if force_global && !flags.contains(&Flag::Global) {
            flags.push(Flag::Global);
        }

        Self { flags }
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.flags.iter().copied()
    }

    pub fn is_global(&self) -> bool {
        self.contains(Flag::Global)
    }

    pub fn is_sticky(&self) -> bool {
        self.contains(Flag::Sticky)
    }

    /// Inline group (e.g. `(?im)`) for the flags the matcher handles itself.
    ///
    /// `g` and `y` drive match iteration instead. `u` needs nothing: the
    /// matcher always reads patterns as Unicode text, and `\d`, `\w` and `\b`
    /// are rewritten to their ASCII forms in both modes.
    pub(crate) fn inline_prefix(&self) -> String {
        let letters: String = self
            .flags
            .iter()
            .filter_map(|flag| match flag {
                Flag::IgnoreCase => Some('i'),
                Flag::MultiLine => Some('m'),
                Flag::DotAll => Some('s'),
                _ => None,
            })
            .collect();

        if letters.is_empty() {
            String::new()
        } else {
            format!("(?{letters})")
        }
    }
}

impl fmt::Display for EffectiveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.flags {
            write!(f, "{}", flag.as_char())?;
        }
        Ok(())
    }
}
