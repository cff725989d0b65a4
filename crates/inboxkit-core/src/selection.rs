//! Row selection for bulk actions.
//!
//! Membership is independent of what the current filter shows: a selected
//! row that gets filtered out stays selected. Checkbox mode gates the whole
//! thing:
//!
//! ```text
//! Inactive --set_checkbox_mode(true) / any mutation--> Active
//! Active   --set_checkbox_mode(false)--> Inactive (selection cleared)
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// Checkboxes hidden, selection empty.
    Inactive,
    /// Checkboxes shown; selection may hold any ids.
    Active,
}

/// State of the header "select all" checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectAllState {
    Checked,
    Indeterminate,
    Unchecked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SelectionSnapshot")]
pub struct SelectionTracker {
    checkbox_mode: bool,
    selected: BTreeSet<String>,
}

/// Wire shape; normalized so hidden checkboxes never carry a selection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionSnapshot {
    #[serde(default)]
    checkbox_mode: bool,
    #[serde(default)]
    selected: BTreeSet<String>,
}

impl From<SelectionSnapshot> for SelectionTracker {
    fn from(snapshot: SelectionSnapshot) -> Self {
        let selected = if snapshot.checkbox_mode {
            snapshot.selected
        } else {
            BTreeSet::new()
        };
        Self {
            checkbox_mode: snapshot.checkbox_mode,
            selected,
        }
    }
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SelectionMode {
        if self.checkbox_mode {
            SelectionMode::Active
        } else {
            SelectionMode::Inactive
        }
    }

    pub fn checkbox_mode(&self) -> bool {
        self.checkbox_mode
    }

    // ===== Mutations =====

    /// Flip membership of `id`. Entering from `Inactive` turns checkboxes on.
    pub fn toggle(&mut self, id: &str) {
        self.checkbox_mode = true;
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Replace the selection with exactly `ids`.
    ///
    /// Used for both "select all on this page" and "select all pages"; the
    /// caller decides which ids that means.
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checkbox_mode = true;
        self.selected = ids.into_iter().map(Into::into).collect();
    }

    /// Empty the selection; checkbox mode is left as is.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Show or hide checkboxes. Hiding always discards the selection.
    pub fn set_checkbox_mode(&mut self, visible: bool) {
        self.checkbox_mode = visible;
        if !visible {
            self.selected.clear();
        }
    }

    pub fn toggle_checkbox_mode(&mut self) {
        self.set_checkbox_mode(!self.checkbox_mode);
    }

    /// Drop ids that no longer exist, e.g. after a bulk delete.
    pub fn retain<F>(&mut self, mut exists: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.selected.retain(|id| exists(id));
    }

    // ===== Getters =====

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// True when every visible id is selected. An empty view is never "all selected".
    pub fn is_all_selected<'a, I>(&self, visible_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.select_all_state(visible_ids) == SelectAllState::Checked
    }

    /// True when some, but not all, visible ids are selected.
    pub fn is_partially_selected<'a, I>(&self, visible_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.select_all_state(visible_ids) == SelectAllState::Indeterminate
    }

    pub fn select_all_state<'a, I>(&self, visible_ids: I) -> SelectAllState
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut visible = 0usize;
        let mut selected = 0usize;
        for id in visible_ids {
            visible += 1;
            if self.selected.contains(id) {
                selected += 1;
            }
        }
        if selected == 0 {
            SelectAllState::Unchecked
        } else if selected == visible {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }
}
