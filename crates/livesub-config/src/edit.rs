//! Typed settings edits dispatched by the settings screen.

/// One user edit to the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEdit {
    SetLiveUpdate(bool),
    SetAdvancedToggle(bool),
    SetForceGlobalFlag(bool),
    /// Raw flag text as typed; unrecognized letters are dropped
    SetFlags(String),
    /// Append a blank rule
    AddRule,
    RemoveRule(usize),
    SetDescription { index: usize, value: String },
    SetFindPattern { index: usize, value: String },
    SetReplacement { index: usize, value: String },
}

/// What the caller must do after an edit is applied.
///
/// Every edit must be persisted; some also invalidate compiled matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditImpact {
    /// Persist only
    Persist,
    /// Persist and recompile
    Recompile,
}

impl EditImpact {
    pub fn requires_recompile(self) -> bool {
        matches!(self, EditImpact::Recompile)
    }
}

impl ConfigEdit {
    /// Impact of this edit, independent of whether it succeeds.
    pub fn impact(&self) -> EditImpact {
        match self {
            ConfigEdit::SetLiveUpdate(_)
            | ConfigEdit::SetAdvancedToggle(_)
            | ConfigEdit::SetDescription { .. }
            | ConfigEdit::SetReplacement { .. } => EditImpact::Persist,
            ConfigEdit::SetForceGlobalFlag(_)
            | ConfigEdit::SetFlags(_)
            | ConfigEdit::AddRule
            | ConfigEdit::RemoveRule(_)
            | ConfigEdit::SetFindPattern { .. } => EditImpact::Recompile,
        }
    }
}
