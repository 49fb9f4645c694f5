use crate::edit::{ConfigEdit, EditImpact};
use crate::flags::sanitize_flags;
use crate::types::{Configuration, Rule};
use livesub_store::{SettingsStore, StoreError};
use thiserror::Error;

/// Errors that can occur during rule store management
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Settings store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Rule index {index} out of range ({len} rules)")]
    RuleIndexOutOfRange { index: usize, len: usize },
}

/// Owner of the single live `Configuration`.
///
/// Mutators only touch the in-memory copy; the caller decides when to
/// `save()` and whether to recompile (see [`EditImpact`]).
pub struct RuleStore<S: SettingsStore> {
    store: S,
    config: Configuration,
}

impl<S: SettingsStore> RuleStore<S> {
    /// Load settings, merging the persisted blob over the defaults.
    ///
    /// Never fails: an unreadable store or malformed blob yields defaults.
    pub async fn load(store: S) -> Self {
        let config = match store.load_blob().await {
            Ok(Some(blob)) => match Configuration::from_blob(&blob) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(error = %e, "malformed settings, using defaults");
                    Configuration::default()
                }
            },
            Ok(None) => {
                tracing::debug!("no persisted settings, using defaults");
                Configuration::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read settings, using defaults");
                Configuration::default()
            }
        };

        Self { store, config }
    }

    /// Serialize the full configuration and write it through the store.
    ///
    /// Failures are returned, never retried; the in-memory configuration
    /// stays authoritative.
    pub async fn save(&self) -> Result<(), ConfigError> {
        let blob = self.config.to_blob()?;
        if let Err(e) = self.store.save_blob(&blob).await {
            tracing::warn!(error = %e, "failed to persist settings");
            return Err(e.into());
        }
        Ok(())
    }

    /// Replace everything with the built-in defaults.
    ///
    /// Destructive: custom rules are discarded.
    pub fn reset_to_defaults(&mut self) {
        self.config = Configuration::default();
    }

    /// Get reference to config
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get mutable reference to config (caller must call save())
    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a rule, returning its index
    pub fn add_rule(&mut self, rule: Rule) -> usize {
        self.config.rules.push(rule);
        self.config.rules.len() - 1
    }

    /// Remove the rule at `index`
    pub fn remove_rule(&mut self, index: usize) -> Result<Rule, ConfigError> {
        self.check_index(index)?;
        Ok(self.config.rules.remove(index))
    }

    /// Mutable access to the rule at `index`
    pub fn rule_mut(&mut self, index: usize) -> Result<&mut Rule, ConfigError> {
        self.check_index(index)?;
        Ok(&mut self.config.rules[index])
    }

    /// Set the flag text, dropping unrecognized letters
    pub fn set_flags(&mut self, raw: &str) {
        self.config.flag_characters = sanitize_flags(raw);
    }

    pub fn set_force_global_flag(&mut self, force: bool) {
        self.config.force_global_flag = force;
    }

    pub fn set_live_update(&mut self, enabled: bool) {
        self.config.live_update_enabled = enabled;
    }

    pub fn set_advanced_toggle(&mut self, shown: bool) {
        self.config.advanced_toggle = shown;
    }

    /// Apply a settings-screen edit to the in-memory configuration.
    pub fn apply(&mut self, edit: ConfigEdit) -> Result<EditImpact, ConfigError> {
        let impact = edit.impact();

        match edit {
            ConfigEdit::SetLiveUpdate(enabled) => self.set_live_update(enabled),
            ConfigEdit::SetAdvancedToggle(shown) => self.set_advanced_toggle(shown),
            ConfigEdit::SetForceGlobalFlag(force) => self.set_force_global_flag(force),
            ConfigEdit::SetFlags(raw) => self.set_flags(&raw),
            ConfigEdit::AddRule => {
                self.add_rule(Rule::blank());
            }
            ConfigEdit::RemoveRule(index) => {
                self.remove_rule(index)?;
            }
            ConfigEdit::SetDescription { index, value } => {
                self.rule_mut(index)?.description = value;
            }
            ConfigEdit::SetFindPattern { index, value } => {
                self.rule_mut(index)?.find_pattern = value;
            }
            ConfigEdit::SetReplacement { index, value } => {
                self.rule_mut(index)?.replacement_template = value;
            }
        }

        Ok(impact)
    }

    fn check_index(&self, index: usize) -> Result<(), ConfigError> {
        let len = self.config.rules.len();
        if index >= len {
            return Err(ConfigError::RuleIndexOutOfRange { index, len });
        }
        Ok(())
    }
}
