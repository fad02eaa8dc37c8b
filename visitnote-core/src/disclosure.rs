//! Expand/collapse state for summary sections.
//!
//! [`DisclosureList`] is the "Read More" list: it shows a capped number of
//! items and offers a toggle to reveal the rest. [`Collapsible`] is the
//! simpler open/closed state of a card header. Neither knows how items are
//! drawn; adapters ask for the visible subset and call `toggle`.

use crate::error::{Error, Result};

/// An ordered list that shows its first `initial_count` items until expanded.
///
/// Item order is never changed here; sort before wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureList<T> {
    items: Vec<T>,
    initial_count: usize,
    expanded: bool,
}

impl<T> DisclosureList<T> {
    pub const DEFAULT_INITIAL_COUNT: usize = 3;

    /// Create a collapsed list showing the default three items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            initial_count: Self::DEFAULT_INITIAL_COUNT,
            expanded: false,
        }
    }

    /// Create a collapsed list with a custom threshold.
    ///
    /// A threshold of zero is a programming error and is rejected rather
    /// than clamped.
    pub fn with_initial_count(items: Vec<T>, initial_count: usize) -> Result<Self> {
        if initial_count < 1 {
            return Err(Error::InvalidConfiguration {
                what: "initial_count".to_string(),
                value: initial_count,
            });
        }
        Ok(Self {
            items,
            initial_count,
            expanded: false,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether a Read More / Read Less control should be offered.
    pub fn is_toggleable(&self) -> bool {
        self.items.len() > self.initial_count
    }

    /// The items to display, in original order.
    pub fn visible_items(&self) -> &[T] {
        if !self.expanded && self.is_toggleable() {
            &self.items[..self.initial_count]
        } else {
            &self.items
        }
    }

    /// Number of items hidden behind the toggle.
    pub fn remaining_count(&self) -> usize {
        if self.expanded {
            0
        } else {
            self.items.len().saturating_sub(self.initial_count)
        }
    }

    /// Flip between collapsed and expanded. No-op if nothing is hidden.
    pub fn toggle(&mut self) {
        if self.is_toggleable() {
            self.expanded = !self.expanded;
        }
    }

    /// Owned variant of [`toggle`](Self::toggle) for builder-style use.
    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    /// Label for the toggle control, or `None` when there is no control.
    pub fn toggle_label(&self) -> Option<String> {
        if !self.is_toggleable() {
            None
        } else if self.expanded {
            Some("Read Less".to_string())
        } else {
            Some(format!("Read More ({} more)", self.remaining_count()))
        }
    }

    /// Index of the last visible item while collapsed.
    ///
    /// Clients draw this item under a fade-out so the cut looks intentional.
    pub fn faded_index(&self) -> Option<usize> {
        if !self.expanded && self.is_toggleable() {
            Some(self.initial_count - 1)
        } else {
            None
        }
    }
}

/// Open/closed state of a card whose body can be hidden behind its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collapsible {
    collapsible: bool,
    collapsed: bool,
}

impl Collapsible {
    /// A card that can only start collapsed if it is collapsible at all.
    pub fn new(collapsible: bool, default_collapsed: bool) -> Self {
        Self {
            collapsible,
            collapsed: collapsible && default_collapsed,
        }
    }

    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn shows_body(&self) -> bool {
        !self.collapsed
    }

    pub fn toggle(&mut self) {
        if self.collapsible {
            self.collapsed = !self.collapsed;
        }
    }

    /// Header chevron: ▶ when closed, ▼ when open, none for fixed cards.
    pub fn chevron(&self) -> Option<&'static str> {
        match (self.collapsible, self.collapsed) {
            (false, _) => None,
            (true, true) => Some("▶"),
            (true, false) => Some("▼"),
        }
    }
}
