use connections_core::{ConnectionDraft, ConnectionStore, SubjectDraft};
use shared::domain::{Connection, ConnectionId};

use crate::controller::{apply_intent, UiIntent};

/// Per-row inline edit buffers, present only while a row is being edited.
struct RowEditDraft {
    index: usize,
    name: String,
    persona: String,
}

impl RowEditDraft {
    fn for_row(index: usize, connection: &Connection) -> Self {
        Self {
            index,
            name: connection.name.clone(),
            persona: connection.persona.clone(),
        }
    }
}

/// Root composition: owns the store and the transient form buffers.
///
/// Panels read store snapshots and emit [`UiIntent`] values; every intent
/// collected during a frame is applied once rendering is done, so the view
/// within one frame is a projection of a single consistent state.
pub struct MattersApp {
    store: ConnectionStore,
    name_input: String,
    persona_input: String,
    subject_input: String,
    edit_draft: Option<RowEditDraft>,
}

impl MattersApp {
    pub fn new() -> Self {
        Self {
            store: ConnectionStore::new(),
            name_input: String::new(),
            persona_input: String::new(),
            subject_input: String::new(),
            edit_draft: None,
        }
    }

    fn labeled_text_field(
        ui: &mut egui::Ui,
        id: &'static str,
        label: &str,
        hint: &str,
        value: &mut String,
    ) -> egui::Response {
        ui.label(egui::RichText::new(label).strong());
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .hint_text(hint)
            .desired_width(f32::INFINITY);
        ui.add_sized([ui.available_width(), 30.0], edit)
    }

    fn show_connection_sidebar(&mut self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        egui::SidePanel::left("connections_sidebar")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Connections");
                ui.add_space(8.0);
                if let Some(intent) = self.show_connection_form(ui) {
                    intents.push(intent);
                }
            });
    }

    fn show_connection_form(&mut self, ui: &mut egui::Ui) -> Option<UiIntent> {
        let name_response = Self::labeled_text_field(
            ui,
            "connection_name",
            "Name",
            "e.g., Ada",
            &mut self.name_input,
        );
        ui.add_space(6.0);
        let persona_response = Self::labeled_text_field(
            ui,
            "connection_persona",
            "Persona",
            "e.g., 5-year-old, grandmother",
            &mut self.persona_input,
        );
        ui.add_space(8.0);
        let submitted = ui.button("Add Connection").clicked()
            || ((name_response.lost_focus() || persona_response.lost_focus())
                && ui.input(|i| i.key_pressed(egui::Key::Enter)));
        if !submitted {
            return None;
        }
        match ConnectionDraft::parse(&self.name_input, &self.persona_input) {
            Ok(draft) => {
                self.name_input.clear();
                self.persona_input.clear();
                Some(UiIntent::AddConnection(draft.into_connection()))
            }
            // Empty field: drop the submission, keep the typed text.
            Err(_) => None,
        }
    }

    fn show_connection_list_panel(&mut self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        let Self {
            store, edit_draft, ..
        } = self;
        egui::SidePanel::right("connection_list_panel")
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.heading("Saved connections");
                ui.add_space(8.0);
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        Self::show_connection_rows(
                            ui,
                            store.connections(),
                            store.selected_id(),
                            edit_draft,
                            intents,
                        );
                    });
            });
    }

    fn show_connection_rows(
        ui: &mut egui::Ui,
        connections: &[Connection],
        selected_id: Option<ConnectionId>,
        edit_draft: &mut Option<RowEditDraft>,
        intents: &mut Vec<UiIntent>,
    ) {
        if connections.is_empty() {
            ui.weak("No connections yet. Add a connection to get started.");
            return;
        }

        let editing_index = edit_draft.as_ref().map(|draft| draft.index);
        let mut pending_edit = None;
        let mut finish_edit = false;

        for (index, connection) in connections.iter().enumerate() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                if editing_index == Some(index) {
                    if let Some(draft) = edit_draft.as_mut() {
                        Self::labeled_text_field(
                            ui,
                            "edit_connection_name",
                            "Name",
                            "",
                            &mut draft.name,
                        );
                        Self::labeled_text_field(
                            ui,
                            "edit_connection_persona",
                            "Persona",
                            "",
                            &mut draft.persona,
                        );
                        ui.add_space(4.0);
                        ui.horizontal(|ui| {
                            if ui.small_button("Save").clicked() {
                                intents.push(UiIntent::UpdateConnection {
                                    index,
                                    new_connection: Connection {
                                        id: connection.id,
                                        name: draft.name.clone(),
                                        persona: draft.persona.clone(),
                                    },
                                });
                                finish_edit = true;
                            }
                            if ui.small_button("Cancel").clicked() {
                                finish_edit = true;
                            }
                        });
                    }
                } else {
                    let selected = selected_id == Some(connection.id);
                    if ui
                        .selectable_label(
                            selected,
                            egui::RichText::new(connection.name.as_str()).strong(),
                        )
                        .clicked()
                    {
                        intents.push(UiIntent::SelectConnection { index });
                    }
                    ui.weak(connection.persona.as_str());
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        if ui.small_button("Edit").clicked() {
                            pending_edit = Some(index);
                        }
                        if ui.small_button("Delete").clicked() {
                            intents.push(UiIntent::RemoveConnection { index });
                            // Row indices shift on removal; drop any open
                            // edit rather than retarget it.
                            finish_edit = true;
                        }
                    });
                }
            });
            ui.add_space(6.0);
        }

        if finish_edit {
            *edit_draft = None;
        }
        if let Some(index) = pending_edit {
            if let Some(connection) = connections.get(index) {
                *edit_draft = Some(RowEditDraft::for_row(index, connection));
            }
        }
    }

    fn show_workspace(&mut self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        let Self {
            store,
            subject_input,
            ..
        } = self;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Matters");
            ui.label("Enter a subject to get a personalized explanation for your selected connection.");
            ui.add_space(12.0);

            if store.selected_connection().is_none() {
                ui.weak("Please select a connection from the sidebar to get started.");
                return;
            }

            let response = Self::labeled_text_field(
                ui,
                "subject_input",
                "Subject",
                "e.g., quantum computing",
                subject_input,
            );
            ui.add_space(6.0);
            let submitted = ui.button("Generate Explanation").clicked()
                || (response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
            if submitted {
                if let Ok(draft) = SubjectDraft::parse(subject_input) {
                    subject_input.clear();
                    intents.push(UiIntent::GenerateExplanation {
                        subject: draft.subject,
                    });
                }
            }

            if !store.explanation().is_empty() {
                ui.add_space(12.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new("Explanation").strong());
                    ui.add_space(4.0);
                    ui.label(store.explanation());
                });
            }
        });
    }
}

impl Default for MattersApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for MattersApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();

        self.show_connection_sidebar(ctx, &mut intents);
        self.show_connection_list_panel(ctx, &mut intents);
        self.show_workspace(ctx, &mut intents);

        for intent in intents {
            apply_intent(&mut self.store, intent);
        }
    }
}
