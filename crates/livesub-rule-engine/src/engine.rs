//! Rewrite engine - compiles the rule set and rewrites single lines
//!
//! The engine owns the compiled matchers; the configuration never does.
//! Replacement templates are read from the rules at apply time.

use crate::{CompileError, CompiledMatcher, EffectiveFlags};
use livesub_config::{Configuration, Rule};
use std::borrow::Cow;

/// Matchers for every rule, index-aligned with `Configuration::rules`
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    flags: EffectiveFlags,
    matchers: Vec<CompiledMatcher>,
}

impl CompiledRuleSet {
    pub fn flags(&self) -> &EffectiveFlags {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Whether `rules` still has the find patterns this set was compiled from
    pub fn matches_rules(&self, rules: &[Rule]) -> bool {
        self.matchers.len() == rules.len()
            && self
                .matchers
                .iter()
                .zip(rules)
                .all(|(matcher, rule)| matcher.pattern() == rule.find_pattern)
    }
}

#[derive(Debug, Clone, Default)]
enum CompileState {
    #[default]
    Uncompiled,
    Ready(CompiledRuleSet),
    Failed(CompileError),
}

/// Compiles rules and applies them to one line at a time
#[derive(Debug, Clone, Default)]
pub struct RewriteEngine {
    state: CompileState,
}

impl RewriteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the compiled rule set from `config`.
    ///
    /// All-or-nothing: if any pattern fails, no rule is active until the next
    /// successful compile. An empty rule list compiles to an empty, active
    /// set. Returns the number of compiled rules.
    pub fn compile(&mut self, config: &Configuration) -> Result<usize, CompileError> {
        let flags = EffectiveFlags::normalize(&config.flag_characters, config.force_global_flag);

        let matchers = config
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| CompiledMatcher::compile(index, rule, &flags))
            .collect::<Result<Vec<_>, _>>();

        match matchers {
            Ok(matchers) => {
                let count = matchers.len();
                tracing::debug!(rules = count, flags = %flags, "compiled rule set");
                self.state = CompileState::Ready(CompiledRuleSet { flags, matchers });
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(rule = e.rule_index(), error = %e, "rule set disabled");
                self.state = CompileState::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Active rule set, `None` before the first compile or after a failure
    pub fn compiled(&self) -> Option<&CompiledRuleSet> {
        match &self.state {
            CompileState::Ready(set) => Some(set),
            _ => None,
        }
    }

    /// The failure that disabled the rule set, if any
    pub fn compile_error(&self) -> Option<&CompileError> {
        match &self.state {
            CompileState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.compiled().is_some()
    }

    /// Run every rule over `line` in order, each on the previous output.
    ///
    /// `rules` supplies the replacement templates and must be the list the
    /// engine was compiled from; if its find patterns have changed since, no
    /// rule runs until the next compile. Returns the new text only if it
    /// differs from `line`.
    pub fn rewrite_line(&self, line: &str, rules: &[Rule]) -> Option<String> {
        let set = self.compiled()?;
        if !set.matches_rules(rules) {
            tracing::debug!(
                compiled = set.len(),
                configured = rules.len(),
                "rule set is stale, recompile pending"
            );
            return None;
        }

        let mut current = line.to_string();
        for (index, (matcher, rule)) in set.matchers.iter().zip(rules).enumerate() {
            let template = matcher.template(&rule.replacement_template);
            let next = match matcher.replace(&current, &template) {
                Ok(Cow::Owned(next)) => Some(next),
                Ok(Cow::Borrowed(_)) => None,
                Err(e) => {
                    tracing::warn!(rule = index, error = %e, "rule skipped for this line");
                    None
                }
            };
            if let Some(next) = next {
                current = next;
            }
        }

        (current != line).then_some(current)
    }
}
