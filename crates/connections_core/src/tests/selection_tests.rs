use shared::domain::Connection;

use crate::selection::SelectionState;

#[test]
fn select_records_the_id_without_touching_the_explanation() {
    let ada = Connection::new("Ada", "grandmother");
    let mut selection = SelectionState::default();
    selection.set_explanation("previous text");

    selection.select(ada.id);

    assert_eq!(selection.selected_id(), Some(ada.id));
    assert_eq!(selection.explanation(), "previous text");
}

#[test]
fn clear_on_removal_only_fires_for_the_selected_id() {
    let ada = Connection::new("Ada", "grandmother");
    let grace = Connection::new("Grace", "5-year-old");
    let mut selection = SelectionState::default();
    selection.select(ada.id);
    selection.set_explanation("about gravity");

    selection.clear_on_removal(grace.id);
    assert_eq!(selection.selected_id(), Some(ada.id));
    assert_eq!(selection.explanation(), "about gravity");

    selection.clear_on_removal(ada.id);
    assert_eq!(selection.selected_id(), None);
    assert_eq!(selection.explanation(), "");
}

#[test]
fn selected_index_resolves_against_the_current_list() {
    let ada = Connection::new("Ada", "grandmother");
    let grace = Connection::new("Grace", "5-year-old");
    let mut selection = SelectionState::default();
    selection.select(grace.id);

    let both = vec![ada.clone(), grace.clone()];
    assert_eq!(selection.selected_index(&both), Some(1));

    // After the earlier entry is gone the same selection resolves lower.
    let only_grace = vec![grace];
    assert_eq!(selection.selected_index(&only_grace), Some(0));

    // An id absent from the list resolves to nothing.
    let only_ada = vec![ada];
    assert_eq!(selection.selected_index(&only_ada), None);
}
