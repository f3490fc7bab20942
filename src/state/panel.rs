//! Pagination and layer-list state for the panel controller.
//!
//! DESIGN
//! ======
//! Navigation methods mutate the cursor and hand back the request the view
//! should send, or `None` when the action is a no-op. Each request is tagged
//! with a sequence number; [`PanelState::apply`] drops any response that is
//! not for the most recently issued request, so overlapping fetches resolve
//! to the last user action no matter which one finishes first.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use tensors::{LayerEntry, PageQuery, TensorPage};

use crate::config::PanelConfig;

/// A page request the view must send, tagged for [`PanelState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub seq: u64,
    pub query: PageQuery,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    pub config: PanelConfig,
    /// First step of the current window.
    pub cursor: u64,
    pub layers: Vec<LayerEntry>,
    pub loading: bool,
    /// What the endpoint said about later windows; `None` when it did not say.
    pub has_more: Option<bool>,
    issued_seq: u64,
}

impl PanelState {
    /// Fresh state at cursor zero, loading until the first page lands.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            cursor: 0,
            layers: Vec::new(),
            loading: true,
            has_more: None,
            issued_seq: 0,
        }
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.config.page_size
    }

    /// Inclusive step window covered by the current cursor.
    #[must_use]
    pub fn window(&self) -> (u64, u64) {
        let query = self.config.page_query(self.cursor);
        (query.cursor, query.last_step())
    }

    #[must_use]
    pub fn shows_kernel(&self) -> bool {
        !self.config.no_kernel
    }

    #[must_use]
    pub fn shows_bias(&self) -> bool {
        !self.config.no_bias
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.cursor >= self.limit()
    }

    /// False once the endpoint reported the last window, or when the next
    /// cursor would not fit in a `u64`.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.has_more != Some(false) && self.next_cursor().is_some()
    }

    fn next_cursor(&self) -> Option<u64> {
        self.cursor.checked_add(self.limit())
    }

    /// Request the window at the current cursor.
    pub fn load(&mut self) -> PendingRequest {
        self.issued_seq += 1;
        self.loading = true;
        PendingRequest {
            seq: self.issued_seq,
            query: self.config.page_query(self.cursor),
        }
    }

    /// Step back one window. No-op when that would pass step zero.
    pub fn previous(&mut self) -> Option<PendingRequest> {
        if !self.can_go_previous() {
            return None;
        }
        self.cursor -= self.limit();
        Some(self.load())
    }

    /// Step forward one window. No-op only once the endpoint reported the
    /// last window; a bare-array endpoint never does.
    pub fn next(&mut self) -> Option<PendingRequest> {
        if self.has_more == Some(false) {
            return None;
        }
        self.cursor = self.next_cursor()?;
        Some(self.load())
    }

    /// Toggle kernel viewers and refetch the current window without them.
    pub fn set_show_kernel(&mut self, show: bool) -> Option<PendingRequest> {
        if self.shows_kernel() == show {
            return None;
        }
        self.config.no_kernel = !show;
        Some(self.load())
    }

    pub fn set_show_bias(&mut self, show: bool) -> Option<PendingRequest> {
        if self.shows_bias() == show {
            return None;
        }
        self.config.no_bias = !show;
        Some(self.load())
    }

    /// Apply the outcome of request `seq`. `None` means the fetch failed.
    ///
    /// Returns `false`, leaving the state untouched, when `seq` is stale.
    pub fn apply(&mut self, seq: u64, page: Option<TensorPage>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        let page = page.unwrap_or_default();
        self.layers = page.layers;
        self.has_more = page.has_more;
        self.loading = false;
        true
    }
}
