//! SettingsStore trait for host-agnostic settings persistence.

use crate::Result;

/// Host-agnostic settings persistence.
///
/// The store deals in an opaque serialized blob; the rule store owns the
/// format. Implementations must not interpret the contents.
///
/// # Design Decisions
///
/// ## Async
///
/// Both methods are async because hosts persist off the editing thread:
/// - **Native**: file I/O through `tokio::fs`
/// - **Memory**: completes immediately
///
/// ## Absence vs. failure
///
/// `load_blob` returns `Ok(None)` when nothing was ever saved. Only a genuine
/// read failure is an error.
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the persisted blob, if any.
    async fn load_blob(&self) -> Result<Option<String>>;

    /// Replace the persisted blob.
    ///
    /// Failures are surfaced to the caller and never retried here.
    async fn save_blob(&self, contents: &str) -> Result<()>;
}

#[async_trait::async_trait]
impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    async fn load_blob(&self) -> Result<Option<String>> {
        (**self).load_blob().await
    }

    async fn save_blob(&self, contents: &str) -> Result<()> {
        (**self).save_blob(contents).await
    }
}
