use egui::{Color32, RichText};

use crate::models::date_key::DateKey;
use crate::models::event::{validate_time_input, FormPrefill, FormSubmission};
use crate::services::calendar::{EventForm, Intent};

/// State for the add/edit event dialog
#[derive(Default)]
pub struct EventDialogState {
    pub open: bool,
    pub title: String,
    /// Blank means all day
    pub time: String,
    pub description: String,
    pub date_key: Option<DateKey>,
    /// Empty when adding
    pub event_id: String,
    pub error_message: Option<String>,
    focus_title: bool,
}

impl EventDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_edit(&self) -> bool {
        !self.event_id.is_empty()
    }

    /// Current field values, or an error when the time is malformed
    fn submission(&self) -> Result<Option<FormSubmission>, String> {
        validate_time_input(&self.time)?;

        Ok(self.date_key.clone().map(|date_key| FormSubmission {
            title: self.title.clone(),
            time: self.time.trim().to_string(),
            description: self.description.clone(),
            date_key,
            id: self.event_id.clone(),
        }))
    }

    pub fn render(&mut self, ctx: &egui::Context) -> Option<Intent> {
        if !self.open {
            return None;
        }

        let mut intent = None;
        let heading = if self.is_edit() { "Edit Event" } else { "Add Event" };

        egui::Window::new(heading)
            .id(egui::Id::new("event_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if let Some(date_key) = &self.date_key {
                    ui.label(RichText::new(date_key.as_str()).weak());
                    ui.add_space(4.0);
                }

                egui::Grid::new("event_dialog_fields")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Title");
                        let title = ui.text_edit_singleline(&mut self.title);
                        if self.focus_title {
                            title.request_focus();
                            self.focus_title = false;
                        }
                        ui.end_row();

                        ui.label("Time");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.time)
                                .hint_text("HH:MM, blank for all day"),
                        );
                        ui.end_row();

                        ui.label("Description");
                        ui.text_edit_multiline(&mut self.description);
                        ui.end_row();
                    });

                if let Some(error) = &self.error_message {
                    ui.add_space(4.0);
                    ui.colored_label(Color32::from_rgb(200, 60, 60), error.as_str());
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        match self.submission() {
                            Ok(Some(submission)) => {
                                intent = Some(Intent::FormSubmitted(submission));
                            }
                            Ok(None) => {
                                log::warn!("Event dialog submitted without a date");
                                intent = Some(Intent::FormCancelled);
                            }
                            Err(message) => self.error_message = Some(message),
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        intent = Some(Intent::FormCancelled);
                    }
                });
            });

        intent
    }
}

impl EventForm for EventDialogState {
    fn open(&mut self, prefill: FormPrefill) {
        *self = Self {
            open: true,
            title: prefill.title,
            time: prefill.time,
            description: prefill.description,
            date_key: Some(prefill.date_key),
            event_id: prefill.id,
            error_message: None,
            focus_title: true,
        };
    }

    fn close(&mut self) {
        *self = Self::default();
    }

    fn show_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
    }
}
