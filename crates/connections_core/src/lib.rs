//! In-memory state for the Matters app: the ordered connection list, the
//! active selection, and the canned explanation generator.
//!
//! [`ConnectionStore`] is the single writer. The GUI requests transitions
//! through its methods and reads snapshots back; nothing outside this crate
//! can touch the list or the selection directly.

use shared::domain::{Connection, ConnectionId};
use tracing::debug;

pub mod explain;
pub mod forms;
pub mod selection;
pub mod store;

pub use forms::{ConnectionDraft, SubjectDraft};
pub use selection::SelectionState;
pub use store::{reduce, ConnectionAction};

/// Owns the ordered connection list and the selection state, applying every
/// transition atomically so a removal can never leave a dangling selection.
#[derive(Debug, Default)]
pub struct ConnectionStore {
    connections: Vec<Connection>,
    selection: SelectionState,
}

impl ConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `connection` to the end of the list. Always succeeds;
    /// insertion order is the display order.
    pub fn add(&mut self, connection: Connection) {
        debug!(name = %connection.name, "add connection");
        self.apply(ConnectionAction::Add(connection));
    }

    /// Removes the connection at `index`; out-of-range is a no-op. If the
    /// removed connection is the selected one, selection and explanation
    /// are cleared within the same transition.
    pub fn remove(&mut self, index: usize) {
        let removed = self.connections.get(index).map(|connection| connection.id);
        self.apply(ConnectionAction::Remove { index });
        if let Some(id) = removed {
            self.selection.clear_on_removal(id);
        }
    }

    /// Replaces the record at `index` wholesale; out-of-range is a no-op.
    /// `new_connection`'s fields are not re-validated.
    pub fn update(&mut self, index: usize, new_connection: Connection) {
        self.apply(ConnectionAction::Update {
            index,
            new_connection,
        });
    }

    /// Marks the connection at `index` as active. The index must come from
    /// the current list; an out-of-range index leaves selection unchanged.
    /// Selecting does not clear a previously generated explanation.
    pub fn select(&mut self, index: usize) {
        if let Some(connection) = self.connections.get(index) {
            self.selection.select(connection.id);
        }
    }

    /// Generates an explanation for `subject` against the selected
    /// connection and stores it. With no selection this returns without
    /// producing output.
    pub fn generate_explanation(&mut self, subject: &str) {
        let Some(index) = self.selected_index() else {
            debug!("generate request ignored: no selection");
            return;
        };
        let text = explain::generate(subject, &self.connections[index]);
        self.selection.set_explanation(text);
    }

    fn apply(&mut self, action: ConnectionAction) {
        let current = std::mem::take(&mut self.connections);
        self.connections = store::reduce(current, action);
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The id of the selected connection, if any. An `Update` that swaps
    /// out the selected row's id leaves this pointing at no list entry;
    /// [`Self::selected_index`] resolves against the current list.
    pub fn selected_id(&self) -> Option<ConnectionId> {
        self.selection.selected_id()
    }

    /// Resolves the selection to its current list position at read time.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index(&self.connections)
    }

    pub fn selected_connection(&self) -> Option<&Connection> {
        self.selected_index()
            .map(|index| &self.connections[index])
    }

    /// The last generated explanation, or `""` when there is none.
    pub fn explanation(&self) -> &str {
        self.selection.explanation()
    }
}

#[cfg(test)]
mod tests;
