//! User intents emitted by the rendered panels.
//!
//! Every mutation flows through [`apply_intent`]; panels emit [`UiIntent`]
//! values and never touch the store directly. Dispatch is synchronous: each
//! intent fully completes its transition before the next one is applied, so
//! ordering is exactly the event order of the frame.

use connections_core::ConnectionStore;
use shared::domain::Connection;

pub enum UiIntent {
    AddConnection(Connection),
    SelectConnection {
        index: usize,
    },
    RemoveConnection {
        index: usize,
    },
    UpdateConnection {
        index: usize,
        new_connection: Connection,
    },
    GenerateExplanation {
        subject: String,
    },
}

pub fn apply_intent(store: &mut ConnectionStore, intent: UiIntent) {
    let intent_name = match &intent {
        UiIntent::AddConnection(_) => "add_connection",
        UiIntent::SelectConnection { .. } => "select_connection",
        UiIntent::RemoveConnection { .. } => "remove_connection",
        UiIntent::UpdateConnection { .. } => "update_connection",
        UiIntent::GenerateExplanation { .. } => "generate_explanation",
    };
    tracing::debug!(intent = intent_name, "apply ui intent");

    match intent {
        UiIntent::AddConnection(connection) => store.add(connection),
        UiIntent::SelectConnection { index } => store.select(index),
        UiIntent::RemoveConnection { index } => store.remove(index),
        UiIntent::UpdateConnection {
            index,
            new_connection,
        } => store.update(index, new_connection),
        UiIntent::GenerateExplanation { subject } => store.generate_explanation(&subject),
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_intent, UiIntent};
    use connections_core::ConnectionStore;
    use shared::domain::Connection;

    #[test]
    fn intents_drive_the_full_store_lifecycle() {
        let mut store = ConnectionStore::new();

        apply_intent(
            &mut store,
            UiIntent::AddConnection(Connection::new("Ada", "grandmother")),
        );
        apply_intent(&mut store, UiIntent::SelectConnection { index: 0 });
        apply_intent(
            &mut store,
            UiIntent::GenerateExplanation {
                subject: "quantum computing".to_string(),
            },
        );

        assert!(store.explanation().contains("quantum computing"));

        apply_intent(&mut store, UiIntent::RemoveConnection { index: 0 });
        assert!(store.connections().is_empty());
        assert_eq!(store.explanation(), "");
    }

    #[test]
    fn update_intent_replaces_the_row_wholesale() {
        let mut store = ConnectionStore::new();
        apply_intent(
            &mut store,
            UiIntent::AddConnection(Connection::new("Ada", "grandmother")),
        );
        let id = store.connections()[0].id;

        apply_intent(
            &mut store,
            UiIntent::UpdateConnection {
                index: 0,
                new_connection: Connection {
                    id,
                    name: "Ada Lovelace".to_string(),
                    persona: "countess".to_string(),
                },
            },
        );

        assert_eq!(store.connections()[0].name, "Ada Lovelace");
        assert_eq!(store.connections()[0].persona, "countess");
    }

    #[test]
    fn out_of_range_intents_are_silent_no_ops() {
        let mut store = ConnectionStore::new();
        apply_intent(&mut store, UiIntent::RemoveConnection { index: 3 });
        apply_intent(
            &mut store,
            UiIntent::GenerateExplanation {
                subject: "gravity".to_string(),
            },
        );
        assert!(store.connections().is_empty());
        assert_eq!(store.explanation(), "");
    }
}
