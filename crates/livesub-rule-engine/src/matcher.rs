//! Compiled rule matchers
//!
//! Find patterns are compiled once per configuration change with the
//! effective flags baked in; only replacement templates are read at apply
//! time.

use crate::constants::{
    BACKTRACK_LIMIT, MAX_PATTERN_LENGTH, REGEX_DFA_SIZE_LIMIT, REGEX_SIZE_LIMIT,
};
use crate::dialect;
use crate::flags::EffectiveFlags;
use crate::template::ReplacementTemplate;
use crate::CompileError;
use fancy_regex::{Regex, RegexBuilder};
use livesub_config::Rule;
use std::borrow::Cow;

/// Compile a pattern with size and backtracking limits
///
/// The pattern is rewritten from the JavaScript dialect first, then the
/// effective `i`/`m`/`s` flags are prepended as an inline group.
fn compile_regex_safe(
    index: usize,
    rule: &Rule,
    flags: &EffectiveFlags,
) -> Result<Regex, CompileError> {
    let pattern = &rule.find_pattern;
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(CompileError::PatternTooLong {
            index,
            len: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let source = format!("{}{}", flags.inline_prefix(), dialect::translate(pattern));
    RegexBuilder::new(&source)
        .backtrack_limit(BACKTRACK_LIMIT)
        .delegate_size_limit(REGEX_SIZE_LIMIT)
        .delegate_dfa_size_limit(REGEX_DFA_SIZE_LIMIT)
        .build()
        .map_err(|e| CompileError::InvalidPattern {
            index,
            description: rule.description.clone(),
            message: e.to_string(),
        })
}

/// One rule's find pattern compiled under the effective flags
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    regex: Regex,
    pattern: String,
    global: bool,
    sticky: bool,
    group_count: usize,
    has_named_groups: bool,
}

impl CompiledMatcher {
    pub fn compile(
        index: usize,
        rule: &Rule,
        flags: &EffectiveFlags,
    ) -> Result<Self, CompileError> {
        let regex = compile_regex_safe(index, rule, flags)?;
        let group_count = regex.captures_len().saturating_sub(1);
        let has_named_groups = regex.capture_names().any(|name| name.is_some());

        Ok(Self {
            regex,
            pattern: rule.find_pattern.clone(),
            global: flags.is_global(),
            sticky: flags.is_sticky(),
            group_count,
            has_named_groups,
        })
    }

    /// The find pattern as configured, before translation
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse a raw replacement template against this matcher's groups
    pub fn template(&self, raw: &str) -> ReplacementTemplate {
        ReplacementTemplate::parse(raw, self.group_count, self.has_named_groups)
    }

    /// Substitute matches in `text`.
    ///
    /// Without `g` only the first match is replaced. With `g` every match is,
    /// and an empty match advances the search by one character. With `y` a
    /// match must begin exactly where the search resumes.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn replace<'t>(
        &self,
        text: &'t str,
        template: &ReplacementTemplate,
    ) -> Result<Cow<'t, str>, fancy_regex::Error> {
        let mut out = String::new();
        let mut copied_to = 0;
        let mut pos = 0;
        let mut matched = false;

        while pos <= text.len() {
            let Some(caps) = self.regex.captures_from_pos(text, pos)? else {
                break;
            };
            let Some(m) = caps.get(0) else {
                break;
            };
            if self.sticky && m.start() != pos {
                break;
            }

            matched = true;
            out.push_str(&text[copied_to..m.start()]);
            template.expand(&caps, text, &mut out);
            copied_to = m.end();

            if !self.global {
                break;
            }
            pos = if m.start() == m.end() {
                next_char_boundary(text, m.end())
            } else {
                m.end()
            };
        }

        if !matched {
            return Ok(Cow::Borrowed(text));
        }

        out.push_str(&text[copied_to..]);
        Ok(Cow::Owned(out))
    }
}

/// Byte offset of the character after `at` (or one past the end)
fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(at + 1, |c| at + c.len_utf8())
}
