//! JavaScript pattern dialect
//!
//! Find patterns are written for JavaScript's `RegExp`. Constructs whose
//! meaning differs in the Rust matcher are rewritten before compiling:
//!
//! | JavaScript           | Rewritten to                                   |
//! |----------------------|------------------------------------------------|
//! | `\d` `\w` (and `\D` `\W`) | ASCII classes, also inside `[...]`         |
//! | `\b` `\B`            | ASCII word boundary built from lookaround      |
//! | `[^]`                | any character, newlines included               |
//! | `[]`                 | never matches                                  |
//! | `\cX`                | the control character `X % 32`                 |
//! | `\0`                 | NUL                                            |
//! | `{`/`}` that is not a quantifier | literal brace                      |
//! | `]` outside a class  | literal bracket                                |
//! | `[` `&` `~` in a class | literals (no nesting or set operators)       |
//!
//! Everything else is passed through unchanged, so capture group numbering
//! is preserved.

const WORD_CLASS: &str = "0-9A-Za-z_";
const NOT_DIGIT_CLASS: &str = r"\x00-\x2F\x3A-\x{10FFFF}";
const NOT_WORD_CLASS: &str = r"\x00-\x2F\x3A-\x40\x5B-\x5E\x60\x7B-\x{10FFFF}";

const WORD_BOUNDARY: &str =
    r"(?:(?<=[0-9A-Za-z_])(?![0-9A-Za-z_])|(?<![0-9A-Za-z_])(?=[0-9A-Za-z_]))";
const NOT_WORD_BOUNDARY: &str =
    r"(?:(?<=[0-9A-Za-z_])(?=[0-9A-Za-z_])|(?<![0-9A-Za-z_])(?![0-9A-Za-z_]))";

/// Rewrite a JavaScript pattern into the matcher's syntax
pub(crate) fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut in_class = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' {
            let Some(&next) = chars.get(i + 1) else {
                // Trailing backslash; let the compiler report it
                out.push(c);
                break;
            };
            i += 2;
            if next == 'c' {
                match chars.get(i).copied().and_then(control_char) {
                    Some(code) => {
                        push_hex(&mut out, code);
                        i += 1;
                    }
                    // Not a control escape: a literal backslash, then `c`
                    None => {
                        out.push_str(r"\\");
                        i -= 1;
                    }
                }
                continue;
            }
            if next == '0' && !chars.get(i).is_some_and(char::is_ascii_digit) {
                out.push_str(r"\x00");
                continue;
            }
            if in_class {
                push_class_escape(&mut out, next);
            } else {
                push_escape(&mut out, next);
            }
            continue;
        }

        if in_class {
            match c {
                ']' => {
                    in_class = false;
                    out.push(c);
                }
                '[' | '&' | '~' => {
                    out.push('\\');
                    out.push(c);
                }
                _ => out.push(c),
            }
            i += 1;
            continue;
        }

        match c {
            '[' => match (chars.get(i + 1), chars.get(i + 2)) {
                (Some('^'), Some(']')) => {
                    out.push_str("(?s:.)");
                    i += 3;
                }
                (Some(']'), _) => {
                    out.push_str("(?!)");
                    i += 2;
                }
                (Some('^'), _) => {
                    out.push_str("[^");
                    in_class = true;
                    i += 2;
                }
                _ => {
                    out.push('[');
                    in_class = true;
                    i += 1;
                }
            },
            '{' => match quantifier_len(&chars[i..]) {
                Some(len) => {
                    out.extend(&chars[i..i + len]);
                    i += len;
                }
                None => {
                    out.push_str(r"\{");
                    i += 1;
                }
            },
            '}' | ']' => {
                out.push('\\');
                out.push(c);
                i += 1;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn push_escape(out: &mut String, escaped: char) {
    match escaped {
        'd' => out.push_str("[0-9]"),
        'D' => out.push_str("[^0-9]"),
        'w' => {
            out.push('[');
            out.push_str(WORD_CLASS);
            out.push(']');
        }
        'W' => {
            out.push_str("[^");
            out.push_str(WORD_CLASS);
            out.push(']');
        }
        'b' => out.push_str(WORD_BOUNDARY),
        'B' => out.push_str(NOT_WORD_BOUNDARY),
        '/' => out.push('/'),
        _ => {
            out.push('\\');
            out.push(escaped);
        }
    }
}

fn push_class_escape(out: &mut String, escaped: char) {
    match escaped {
        'd' => out.push_str("0-9"),
        'D' => out.push_str(NOT_DIGIT_CLASS),
        'w' => out.push_str(WORD_CLASS),
        'W' => out.push_str(NOT_WORD_CLASS),
        // Backspace inside a class
        'b' => out.push_str(r"\x08"),
        '/' => out.push('/'),
        _ => {
            out.push('\\');
            out.push(escaped);
        }
    }
}

fn control_char(letter: char) -> Option<u32> {
    letter.is_ascii_alphabetic().then(|| u32::from(letter) % 32)
}

fn push_hex(out: &mut String, code: u32) {
    out.push_str(&format!(r"\x{code:02X}"));
}

/// Length of a `{n}`, `{n,}` or `{n,m}` quantifier at the start of `chars`
fn quantifier_len(chars: &[char]) -> Option<usize> {
    let mut i = 1;
    let digits = |from: usize| chars[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let min = digits(i);
    if min == 0 {
        return None;
    }
    i += min;

    if chars.get(i) == Some(&',') {
        i += 1;
        i += digits(i);
    }

    (chars.get(i) == Some(&'}')).then_some(i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_classes_are_ascii() {
        assert_eq!(translate(r"\d+"), "[0-9]+");
        assert_eq!(translate(r"\D"), "[^0-9]");
        assert_eq!(translate(r"\w"), "[0-9A-Za-z_]");
        assert_eq!(translate(r"[\d.]"), "[0-9.]");
        assert_eq!(translate(r"[^\w-]"), "[^0-9A-Za-z_-]");
    }

    #[test]
    fn test_word_boundary_uses_lookaround() {
        assert_eq!(translate(r"\bx"), format!("{WORD_BOUNDARY}x"));
        assert_eq!(translate(r"\B"), NOT_WORD_BOUNDARY);
        assert_eq!(translate(r"[\b]"), r"[\x08]");
    }

    #[test]
    fn test_seed_pattern() {
        assert_eq!(
            translate(r"(?<!\[)WC:(\d{8})(?!\]\()"),
            r"(?<!\[)WC:([0-9]{8})(?!\]\()"
        );
        assert_eq!(translate(r"(?!]\()"), r"(?!\]\()");
    }

    #[test]
    fn test_braces() {
        assert_eq!(translate("a{2}"), "a{2}");
        assert_eq!(translate("a{2,}"), "a{2,}");
        assert_eq!(translate("a{2,5}"), "a{2,5}");
        assert_eq!(translate("a{,2}"), r"a\{,2\}");
        assert_eq!(translate("{x}"), r"\{x\}");
    }

    #[test]
    fn test_special_classes() {
        assert_eq!(translate("a[^]b"), "a(?s:.)b");
        assert_eq!(translate("[]"), "(?!)");
        assert_eq!(translate("[a[b]"), r"[a\[b]");
        assert_eq!(translate("[&&~~]"), r"[\&\&\~\~]");
    }

    #[test]
    fn test_control_and_nul_escapes() {
        assert_eq!(translate(r"\cJ"), r"\x0A");
        assert_eq!(translate(r"[\cm]"), r"[\x0D]");
        assert_eq!(translate(r"\c1"), r"\\c1");
        assert_eq!(translate(r"\0"), r"\x00");
        assert_eq!(translate(r"(a)\1"), r"(a)\1");
    }

    #[test]
    fn test_passthrough() {
        for pattern in [r"(?<name>x)\k<name>", r"\.\*", r"^a|b$", r"(?<=x)y", r"\/"] {
            let expected = pattern.replace(r"\/", "/");
            assert_eq!(translate(pattern), expected);
        }
    }
}
