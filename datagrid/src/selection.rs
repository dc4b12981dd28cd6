//! Selection state.
//!
//! Selection is tracked by record key rather than by view position, so a
//! selected record stays selected when the view is re-filtered or re-sorted.
//! The grid drops keys that leave the view on every recompute.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Selection discipline of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// One row at most; tapping the selected row activates it.
    #[default]
    Single,
    /// Any number of rows, toggled through a per-row checkbox.
    Multi,
}

/// What a row tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// The row became selected.
    Selected,
    /// The row stopped being selected.
    Deselected,
    /// The row was activated.
    Activated,
    /// Nothing happened (out-of-range row).
    Ignored,
}

/// Tracks selected rows by their keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<K: Clone + Eq + Hash> {
    /// Single selection: the selected key, if any.
    Single(Option<K>),
    /// Multi selection: every selected key.
    Multi(HashSet<K>),
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::single()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection for `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::single(),
            SelectionMode::Multi => Self::multi(),
        }
    }

    /// Create an empty single selection.
    pub fn single() -> Self {
        Selection::Single(None)
    }

    /// Create an empty multi selection.
    pub fn multi() -> Self {
        Selection::Multi(HashSet::new())
    }

    /// The discipline of this selection.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multi(_) => SelectionMode::Multi,
        }
    }

    /// Toggle selection for a key (the row's selection control).
    ///
    /// Single: deselects the selected key, otherwise selects `key` in its
    /// place. Multi: adds or removes `key`.
    pub fn toggle(&mut self, key: K) -> RowAction {
        match self {
            Selection::Single(selected) => {
                if selected.as_ref() == Some(&key) {
                    *selected = None;
                    RowAction::Deselected
                } else {
                    *selected = Some(key);
                    RowAction::Selected
                }
            }
            Selection::Multi(selected) => {
                if selected.remove(&key) {
                    RowAction::Deselected
                } else {
                    selected.insert(key);
                    RowAction::Selected
                }
            }
        }
    }

    /// Handle a tap on a row's content.
    ///
    /// Tapping an already selected row activates it. Otherwise the row is
    /// selected: it replaces the single selection, or joins the multi
    /// selection without touching the others.
    pub fn tap(&mut self, key: K) -> RowAction {
        if self.is_selected(&key) {
            return RowAction::Activated;
        }
        self.select(key);
        RowAction::Selected
    }

    /// Select a key. Single selection replaces the previous key.
    pub fn select(&mut self, key: K) {
        match self {
            Selection::Single(selected) => *selected = Some(key),
            Selection::Multi(selected) => {
                selected.insert(key);
            }
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        match self {
            Selection::Single(selected) => selected.as_ref() == Some(key),
            Selection::Multi(selected) => selected.contains(key),
        }
    }

    /// Clear all selections. Returns the number of keys deselected.
    pub fn clear(&mut self) -> usize {
        match self {
            Selection::Single(selected) => usize::from(selected.take().is_some()),
            Selection::Multi(selected) => {
                let count = selected.len();
                selected.clear();
                count
            }
        }
    }

    /// Get the number of selected keys.
    pub fn len(&self) -> usize {
        match self {
            Selection::Single(selected) => usize::from(selected.is_some()),
            Selection::Multi(selected) => selected.len(),
        }
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the single selected key (for Single mode).
    pub fn get_single(&self) -> Option<&K> {
        match self {
            Selection::Single(selected) => selected.as_ref(),
            Selection::Multi(_) => None,
        }
    }

    /// Keep only keys for which `keep` returns `true`.
    /// Returns the number of keys dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) -> usize {
        match self {
            Selection::Single(selected) => {
                if selected.as_ref().is_some_and(|key| !keep(key)) {
                    *selected = None;
                    1
                } else {
                    0
                }
            }
            Selection::Multi(selected) => {
                let before = selected.len();
                selected.retain(|key| keep(key));
                before - selected.len()
            }
        }
    }

    /// Select every key (Multi only). Returns the number newly selected.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = K>) -> usize {
        match self {
            Selection::Single(_) => 0,
            Selection::Multi(selected) => keys
                .into_iter()
                .filter(|key| selected.insert(key.clone()))
                .count(),
        }
    }
}
