//! Live session: wires the rule store, the rewrite engine and the host editor
//!
//! Per change event: `Idle -> checking preconditions -> (skip | matching ->
//! writing) -> Idle`. The write-back happens under a guard so the
//! notification it triggers synchronously is ignored.

use crate::{CompileError, Editor, RewriteEngine};
use livesub_config::{ConfigEdit, ConfigError, Configuration, EditImpact, RuleStore};
use livesub_store::SettingsStore;
use std::cell::Cell;

/// What one content-changed notification did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Live update is switched off
    Disabled,
    /// No active rule set (compile failed or never ran)
    NotCompiled,
    /// Notification raised by our own write-back
    Reentrant,
    /// The cursor line does not exist in the document
    NoSuchLine(usize),
    /// Rules ran but the line is unchanged; nothing written
    Unchanged,
    /// The line was written back once
    Rewritten { line: usize },
}

/// Marks a write-back in progress; cleared on drop, even if the host panics
struct RewriteGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> RewriteGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for RewriteGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// One running instance: configuration, compiled rules and the guard.
///
/// Single-threaded by contract. The guard only protects against the
/// same-call-stack re-entry caused by `Editor::set_line`.
pub struct LiveReplace<S: SettingsStore> {
    store: RuleStore<S>,
    engine: RewriteEngine,
    rewriting: Cell<bool>,
}

impl<S: SettingsStore> LiveReplace<S> {
    /// Load settings (falling back to defaults) and compile them.
    ///
    /// Never fails. A compile failure leaves the session inert and is
    /// available through [`compile_error`](Self::compile_error).
    pub async fn load(store: S) -> Self {
        Self::from_rule_store(RuleStore::load(store).await)
    }

    pub fn from_rule_store(store: RuleStore<S>) -> Self {
        let mut engine = RewriteEngine::new();
        // A failure is kept as engine state and already logged
        let _ = engine.compile(store.config());

        Self {
            store,
            engine,
            rewriting: Cell::new(false),
        }
    }

    /// Handle the host's content-changed notification.
    pub fn on_content_changed(&self, editor: &dyn Editor) -> ChangeOutcome {
        if self.rewriting.get() {
            tracing::trace!("ignoring change raised by our own write");
            return ChangeOutcome::Reentrant;
        }

        let config = self.store.config();
        if !config.live_update_enabled {
            return ChangeOutcome::Disabled;
        }
        if !self.engine.is_ready() {
            return ChangeOutcome::NotCompiled;
        }

        let line = editor.cursor_line();
        let Some(text) = editor.line(line) else {
            return ChangeOutcome::NoSuchLine(line);
        };

        let Some(updated) = self.engine.rewrite_line(&text, &config.rules) else {
            return ChangeOutcome::Unchanged;
        };

        {
            let _guard = RewriteGuard::enter(&self.rewriting);
            editor.set_line(line, &updated);
        }

        tracing::debug!(line, "line rewritten");
        ChangeOutcome::Rewritten { line }
    }

    pub fn configuration(&self) -> &Configuration {
        self.store.config()
    }

    /// Mutable configuration; call `recompile` and `persist` afterwards
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        self.store.config_mut()
    }

    pub fn rule_store(&self) -> &RuleStore<S> {
        &self.store
    }

    pub fn engine(&self) -> &RewriteEngine {
        &self.engine
    }

    /// Failure message to show the user while the rule set is disabled
    pub fn compile_error(&self) -> Option<&CompileError> {
        self.engine.compile_error()
    }

    /// Rebuild matchers after a pattern or flag change
    pub fn recompile(&mut self) -> Result<usize, CompileError> {
        self.engine.compile(self.store.config())
    }

    /// Save the configuration through the settings store
    pub async fn persist(&self) -> Result<(), ConfigError> {
        self.store.save().await
    }

    /// Restore built-in defaults and recompile; call `persist` afterwards.
    ///
    /// Destructive: every custom rule is discarded.
    pub fn reset_to_defaults(&mut self) -> Result<usize, CompileError> {
        self.store.reset_to_defaults();
        self.recompile()
    }

    /// Apply one settings-screen edit: mutate, recompile when the edit
    /// affects matching, then persist.
    ///
    /// A compile failure does not fail the edit; the broken pattern is still
    /// saved so the user can keep editing it.
    pub async fn apply_edit(&mut self, edit: ConfigEdit) -> Result<EditImpact, ConfigError> {
        let impact = self.store.apply(edit)?;
        if impact.requires_recompile() {
            let _ = self.recompile();
        }
        self.persist().await?;
        Ok(impact)
    }
}
