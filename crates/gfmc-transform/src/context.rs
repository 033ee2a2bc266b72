//! Per-run mutable state.

/// State threaded through one `rewrite` call.
///
/// Tab ids must be unique within a document but must not leak between
/// unrelated documents processed by the same host, so the counter lives
/// here rather than in process-global state: a fresh context is created at
/// the top of every run.
#[derive(Debug, Default)]
pub struct RewriteContext {
    next_tab_id: usize,
}

/// The id pair assigned to one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabIds {
    pub tab: String,
    pub panel: String,
}

impl RewriteContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next monotonically increasing tab/panel id pair.
    pub fn next_tab_ids(&mut self) -> TabIds {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        TabIds {
            tab: format!("tab-{id}"),
            panel: format!("tab-panel-{id}"),
        }
    }
}
