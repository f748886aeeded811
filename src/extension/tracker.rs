/// Per-tab bookmark state for the toolbar icon

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TabId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookmarkState {
    #[default]
    Unknown,
    Bookmarked,
    NotBookmarked,
    /// Add request in flight
    Pending,
}

/// Icon shown for a state
pub fn icon_path(state: BookmarkState) -> &'static str {
    match state {
        BookmarkState::Bookmarked => "icon.png",
        BookmarkState::Pending => "icon_orange.png",
        BookmarkState::NotBookmarked | BookmarkState::Unknown => "icon_grey.png",
    }
}

/// Message sent from the background to the tab's content script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notice {
    #[serde(rename = "BOOKMARK_ADDED")]
    Added,
    #[serde(rename = "BOOKMARK_ALREADY")]
    AlreadyBookmarked,
    #[serde(rename = "BOOKMARK_FAILED")]
    Failed,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::Added => "✅ Bookmark saved!",
            Notice::AlreadyBookmarked => "ℹ️ Already bookmarked.",
            Notice::Failed => "❌ Failed to save bookmark!",
        }
    }
}

/// What the background does after the existence check on an icon click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickStep {
    /// Already saved; nothing to send
    Done(Notice),
    /// Icon switched to pending; send the add request
    SendAdd,
}

/// Bookmark state keyed by tab id, owned by the background process
#[derive(Debug, Clone, Default)]
pub struct TabTracker {
    tabs: HashMap<TabId, BookmarkState>,
}

impl TabTracker {
    pub fn new() -> Self {
        TabTracker {
            tabs: HashMap::new(),
        }
    }

    pub fn state(&self, tab_id: TabId) -> BookmarkState {
        self.tabs.get(&tab_id).copied().unwrap_or_default()
    }

    /// Result of a navigation re-check
    pub fn record_check(&mut self, tab_id: TabId, bookmarked: bool) -> BookmarkState {
        let state = if bookmarked {
            BookmarkState::Bookmarked
        } else {
            BookmarkState::NotBookmarked
        };
        self.tabs.insert(tab_id, state);
        state
    }

    /// Icon click after the existence check
    pub fn on_click_checked(&mut self, tab_id: TabId, bookmarked: bool) -> ClickStep {
        if bookmarked {
            self.tabs.insert(tab_id, BookmarkState::Bookmarked);
            ClickStep::Done(Notice::AlreadyBookmarked)
        } else {
            self.begin_add(tab_id);
            ClickStep::SendAdd
        }
    }

    pub fn begin_add(&mut self, tab_id: TabId) {
        self.tabs.insert(tab_id, BookmarkState::Pending);
    }

    /// Resolve a pending add; any failure leaves the tab not bookmarked
    pub fn finish_add(&mut self, tab_id: TabId, ok: bool) -> Notice {
        if ok {
            self.tabs.insert(tab_id, BookmarkState::Bookmarked);
            Notice::Added
        } else {
            self.tabs.insert(tab_id, BookmarkState::NotBookmarked);
            Notice::Failed
        }
    }

    /// Drop a closed tab
    pub fn forget(&mut self, tab_id: TabId) -> bool {
        self.tabs.remove(&tab_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab_is_unknown() {
        let tracker = TabTracker::new();
        assert_eq!(tracker.state(7), BookmarkState::Unknown);
        assert_eq!(icon_path(tracker.state(7)), "icon_grey.png");
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_icon_paths() {
        assert_eq!(icon_path(BookmarkState::Bookmarked), "icon.png");
        assert_eq!(icon_path(BookmarkState::NotBookmarked), "icon_grey.png");
        assert_eq!(icon_path(BookmarkState::Pending), "icon_orange.png");
    }

    #[test]
    fn test_click_on_saved_page() {
        let mut tracker = TabTracker::new();

        let step = tracker.on_click_checked(1, true);

        assert_eq!(step, ClickStep::Done(Notice::AlreadyBookmarked));
        assert_eq!(tracker.state(1), BookmarkState::Bookmarked);
    }

    #[test]
    fn test_click_add_success() {
        let mut tracker = TabTracker::new();

        assert_eq!(tracker.on_click_checked(1, false), ClickStep::SendAdd);
        assert_eq!(tracker.state(1), BookmarkState::Pending);

        assert_eq!(tracker.finish_add(1, true), Notice::Added);
        assert_eq!(tracker.state(1), BookmarkState::Bookmarked);
    }

    #[test]
    fn test_click_add_failure_reverts() {
        let mut tracker = TabTracker::new();
        tracker.on_click_checked(2, false);

        assert_eq!(tracker.finish_add(2, false), Notice::Failed);
        assert_eq!(tracker.state(2), BookmarkState::NotBookmarked);
    }

    #[test]
    fn test_tabs_are_independent() {
        let mut tracker = TabTracker::new();
        tracker.record_check(1, true);
        tracker.begin_add(2);

        assert_eq!(tracker.state(1), BookmarkState::Bookmarked);
        assert_eq!(tracker.state(2), BookmarkState::Pending);
        assert_eq!(tracker.len(), 2);

        assert!(tracker.forget(1));
        assert!(!tracker.forget(1));
        assert_eq!(tracker.state(1), BookmarkState::Unknown);
    }

    #[test]
    fn test_navigation_recheck_overrides() {
        let mut tracker = TabTracker::new();
        tracker.record_check(3, true);

        assert_eq!(tracker.record_check(3, false), BookmarkState::NotBookmarked);
    }

    #[test]
    fn test_notice_wire_format() {
        assert_eq!(
            serde_json::to_string(&Notice::Added).unwrap(),
            r#"{"type":"BOOKMARK_ADDED"}"#
        );
        let notice: Notice = serde_json::from_str(r#"{"type":"BOOKMARK_ALREADY"}"#).unwrap();
        assert_eq!(notice, Notice::AlreadyBookmarked);
        assert!(serde_json::from_str::<Notice>(r#"{"type":"PING"}"#).is_err());
    }
}
