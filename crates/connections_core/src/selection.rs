//! Selection state: which connection is active and the last explanation.

use shared::domain::{Connection, ConnectionId};

/// Tracks the active connection and the last generated explanation text.
///
/// Selection is keyed by id rather than list position, so removing an
/// earlier entry does not silently retarget it; the position is resolved
/// against the current list only when rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<ConnectionId>,
    explanation: String,
}

impl SelectionState {
    pub fn select(&mut self, id: ConnectionId) {
        self.selected = Some(id);
    }

    /// Clears selection and explanation together. Explanation text is never
    /// kept alive past the selection it was generated for.
    pub fn clear(&mut self) {
        self.selected = None;
        self.explanation.clear();
    }

    /// Reconciles selection with the removal of `removed`. Must run inside
    /// the same logical transition as the list removal so no intermediate
    /// dangling selection is ever observable.
    pub fn clear_on_removal(&mut self, removed: ConnectionId) {
        if self.selected == Some(removed) {
            self.clear();
        }
    }

    pub fn set_explanation(&mut self, text: impl Into<String>) {
        self.explanation = text.into();
    }

    pub fn selected_id(&self) -> Option<ConnectionId> {
        self.selected
    }

    /// Resolves the selected id to its current position in `connections`,
    /// or `None` if nothing is selected or the id is no longer present.
    pub fn selected_index(&self, connections: &[Connection]) -> Option<usize> {
        let id = self.selected?;
        connections.iter().position(|connection| connection.id == id)
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}
