//! Recognized regular-expression flag alphabet.

/// A single-character match modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `g`: replace every match instead of the first
    Global,
    /// `i`: case-insensitive matching
    IgnoreCase,
    /// `m`: `^` and `$` match at line boundaries
    MultiLine,
    /// `s`: `.` also matches newlines
    DotAll,
    /// `u`: Unicode mode
    Unicode,
    /// `y`: each match must start where the previous one ended
    Sticky,
}

/// Every recognized flag letter, in canonical order.
pub const RECOGNIZED_FLAGS: &str = "gimsuy";

impl Flag {
    pub const ALL: [Flag; 6] = [
        Flag::Global,
        Flag::IgnoreCase,
        Flag::MultiLine,
        Flag::DotAll,
        Flag::Unicode,
        Flag::Sticky,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(Flag::Global),
            'i' => Some(Flag::IgnoreCase),
            'm' => Some(Flag::MultiLine),
            's' => Some(Flag::DotAll),
            'u' => Some(Flag::Unicode),
            'y' => Some(Flag::Sticky),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Flag::Global => 'g',
            Flag::IgnoreCase => 'i',
            Flag::MultiLine => 'm',
            Flag::DotAll => 's',
            Flag::Unicode => 'u',
            Flag::Sticky => 'y',
        }
    }
}

/// Drop every character that is not a recognized flag letter.
///
/// Order and duplicates are kept; deduplication happens at compile time.
pub fn sanitize_flags(raw: &str) -> String {
    raw.chars().filter(|c| Flag::from_char(*c).is_some()).collect()
}
