//! Host editor interface.

/// The slice of the host document model the rewrite needs.
///
/// Methods take `&self`: `set_line` re-enters the content-changed
/// notification synchronously, so hosts keep their document behind
/// interior mutability and the nested handler call sees the same editor.
pub trait Editor {
    /// Zero-based line containing the cursor
    fn cursor_line(&self) -> usize;

    /// Text of `line` without its line terminator, `None` if out of range
    fn line(&self, line: usize) -> Option<String>;

    /// Replace the text of `line`
    fn set_line(&self, line: usize, text: &str);
}
