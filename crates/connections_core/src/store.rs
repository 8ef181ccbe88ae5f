//! Connection-list reducer: a tagged action applied by a pure transition.

use shared::domain::Connection;

/// Tagged transition over the ordered connection list.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionAction {
    /// Append to the end of the list. Always succeeds.
    Add(Connection),
    /// Delete the element at `index`; later elements shift down by one.
    Remove { index: usize },
    /// Replace the record at `index` wholesale. Fields are not re-validated.
    Update {
        index: usize,
        new_connection: Connection,
    },
}

/// Pure reducer: `(current list, action) -> new list`.
///
/// Out-of-range `Remove`/`Update` indices are silent no-ops; a stale row
/// intent from the UI means "do nothing", not an error.
pub fn reduce(mut connections: Vec<Connection>, action: ConnectionAction) -> Vec<Connection> {
    match action {
        ConnectionAction::Add(connection) => {
            connections.push(connection);
        }
        ConnectionAction::Remove { index } => {
            if index < connections.len() {
                connections.remove(index);
            }
        }
        ConnectionAction::Update {
            index,
            new_connection,
        } => {
            if index < connections.len() {
                connections[index] = new_connection;
            }
        }
    }
    connections
}
