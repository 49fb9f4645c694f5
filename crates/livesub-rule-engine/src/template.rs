//! Replacement templates with capture-group references.
//!
//! Grammar (same as JavaScript's `String.prototype.replace`):
//!
//! | Token      | Expands to                                   |
//! |------------|----------------------------------------------|
//! | `$$`       | a literal `$`                                |
//! | `$&`       | the whole match                              |
//! | `` $` ``   | text before the match                        |
//! | `$'`       | text after the match                         |
//! | `$n`/`$nn` | capture group `n` (1-99) if the pattern has it |
//! | `$<name>`  | named group, when the pattern has named groups |
//!
//! Anything else, including references to groups the pattern does not
//! have, is copied literally. Groups that did not participate in the match
//! expand to the empty string.

use fancy_regex::Captures;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Group(usize),
    Named(String),
    WholeMatch,
    Prefix,
    Suffix,
}

/// A parsed replacement template, resolved against one pattern's groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTemplate {
    pieces: Vec<Piece>,
}

impl ReplacementTemplate {
    /// Parse `raw` for a pattern with `group_count` capture groups
    /// (not counting the whole match).
    pub fn parse(raw: &str, group_count: usize, has_named_groups: bool) -> Self {
        let bytes = raw.as_bytes();
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut i = 0;
        // Start of the pending literal run
        let mut run = 0;

        while i < bytes.len() {
            if bytes[i] != b'$' || i + 1 >= bytes.len() {
                i += 1;
                continue;
            }

            let (piece, consumed) = match bytes[i + 1] {
                b'$' => (Some(Piece::Literal("$".to_string())), 2),
                b'&' => (Some(Piece::WholeMatch), 2),
                b'`' => (Some(Piece::Prefix), 2),
                b'\'' => (Some(Piece::Suffix), 2),
                d1 @ b'0'..=b'9' => {
                    let one = usize::from(d1 - b'0');
                    let two = bytes
                        .get(i + 2)
                        .filter(|b| b.is_ascii_digit())
                        .map(|d2| one * 10 + usize::from(d2 - b'0'));

                    match two {
                        Some(n) if n >= 1 && n <= group_count => (Some(Piece::Group(n)), 3),
                        _ if one >= 1 && one <= group_count => (Some(Piece::Group(one)), 2),
                        _ => (None, 2),
                    }
                }
                b'<' if has_named_groups => match raw[i + 2..].find('>') {
                    Some(close) => {
                        let name = &raw[i + 2..i + 2 + close];
                        (Some(Piece::Named(name.to_string())), close + 3)
                    }
                    None => (None, 2),
                },
                _ => (None, 1),
            };

            match piece {
                Some(piece) => {
                    literal.push_str(&raw[run..i]);
                    if let Piece::Literal(text) = &piece {
                        literal.push_str(text);
                    } else {
                        if !literal.is_empty() {
                            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                        }
                        pieces.push(piece);
                    }
                    i += consumed;
                    run = i;
                }
                None => i += consumed,
            }
        }

        literal.push_str(&raw[run..]);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Self { pieces }
    }

    /// Append the expansion for one match of `haystack` to `out`.
    pub fn expand(&self, caps: &Captures<'_>, haystack: &str, out: &mut String) {
        let (start, end) = caps
            .get(0)
            .map(|m| (m.start(), m.end()))
            .unwrap_or((0, 0));

        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Group(n) => {
                    if let Some(m) = caps.get(*n) {
                        out.push_str(m.as_str());
                    }
                }
                Piece::Named(name) => {
                    if let Some(m) = caps.name(name) {
                        out.push_str(m.as_str());
                    }
                }
                Piece::WholeMatch => out.push_str(&haystack[start..end]),
                Piece::Prefix => out.push_str(&haystack[..start]),
                Piece::Suffix => out.push_str(&haystack[end..]),
            }
        }
    }
}
