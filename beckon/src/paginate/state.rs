//! Page arithmetic and navigation input.

use beckon_core::ReactionEmoji;
use std::ops::Range;

/// What a navigation reaction asks the paginator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationAction {
    /// Jump to the first page.
    First,
    /// Go back one page, wrapping to the last.
    Previous,
    /// Go forward one page, wrapping to the first.
    Next,
    /// Jump to the last page.
    Last,
    /// Stop paginating.
    Stop,
}

/// The five navigation reactions, in the order they are added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEmojis {
    /// [`NavigationAction::First`]
    pub first: ReactionEmoji,
    /// [`NavigationAction::Previous`]
    pub previous: ReactionEmoji,
    /// [`NavigationAction::Next`]
    pub next: ReactionEmoji,
    /// [`NavigationAction::Last`]
    pub last: ReactionEmoji,
    /// [`NavigationAction::Stop`]
    pub stop: ReactionEmoji,
}

impl Default for NavigationEmojis {
    fn default() -> Self {
        Self {
            first: ReactionEmoji::unicode("\u{23EA}"),
            previous: ReactionEmoji::unicode("\u{2B05}"),
            next: ReactionEmoji::unicode("\u{27A1}"),
            last: ReactionEmoji::unicode("\u{23E9}"),
            stop: ReactionEmoji::unicode("\u{274C}"),
        }
    }
}

impl NavigationEmojis {
    /// All five emoji: first, previous, next, last, stop.
    pub fn all(&self) -> [ReactionEmoji; 5] {
        [
            self.first.clone(),
            self.previous.clone(),
            self.next.clone(),
            self.last.clone(),
            self.stop.clone(),
        ]
    }

    /// The action bound to `emoji`, if any.
    pub fn action_for(&self, emoji: &ReactionEmoji) -> Option<NavigationAction> {
        if *emoji == self.first {
            Some(NavigationAction::First)
        } else if *emoji == self.previous {
            Some(NavigationAction::Previous)
        } else if *emoji == self.next {
            Some(NavigationAction::Next)
        } else if *emoji == self.last {
            Some(NavigationAction::Last)
        } else if *emoji == self.stop {
            Some(NavigationAction::Stop)
        } else {
            None
        }
    }
}

/// Result of applying a [`NavigationAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Show this page next. May be the page already shown.
    Render(usize),
    /// Leave the loop and clean up.
    Stop,
}

/// Position within a paginated result set.
///
/// The page count is `item_count / per_page + 1`, so an empty result set
/// still has one (empty) page and a count that divides evenly ends with an
/// empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: usize,
    item_count: usize,
    per_page: usize,
}

impl PaginationState {
    /// Start on page 0. A `per_page` of zero is treated as one.
    pub fn new(item_count: usize, per_page: usize) -> Self {
        Self {
            page: 0,
            item_count,
            per_page: per_page.max(1),
        }
    }

    /// Current page, 0-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of items being paginated.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.item_count / self.per_page + 1
    }

    /// Index range of the items on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.item_count);
        let end = (start + self.per_page).min(self.item_count);
        start..end
    }

    /// Title for the current page.
    ///
    /// With more than one page the title is prefixed with the position,
    /// e.g. `"[2/4] Members"`.
    pub fn title(&self, title: &str) -> String {
        let pages = self.page_count();
        if pages > 1 {
            format!("[{}/{}] {}", self.page + 1, pages, title)
        } else {
            title.to_owned()
        }
    }

    /// Move according to `action`.
    pub fn apply(&mut self, action: NavigationAction) -> Transition {
        let pages = self.page_count();
        self.page = match action {
            NavigationAction::First => 0,
            NavigationAction::Previous => (self.page + pages - 1) % pages,
            NavigationAction::Next => (self.page + 1) % pages,
            NavigationAction::Last => pages - 1,
            NavigationAction::Stop => return Transition::Stop,
        };
        Transition::Render(self.page)
    }
}
