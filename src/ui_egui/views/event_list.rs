use egui::RichText;

use crate::services::calendar::{CalendarView, Intent};

pub struct EventListView;

impl EventListView {
    /// Selected day's events with add, edit and delete actions
    pub fn show(ui: &mut egui::Ui, view: &CalendarView) -> Option<Intent> {
        let mut intent = None;

        ui.heading("Events");
        ui.label(RichText::new(format!("({})", view.selected_label)).weak());
        ui.add_space(4.0);
        if ui.button("➕ Add Event").clicked() {
            intent = Some(Intent::AddClicked);
        }
        ui.separator();

        if view.events.is_empty() {
            ui.label(RichText::new("No events for this day.").italics().weak());
            return intent;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for event in &view.events {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(event.title.as_str()).strong());
                            ui.label(format!("{} - {}", event.time, event.description));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                                intent = Some(Intent::DeleteClicked(event.id.clone()));
                            }
                            if ui.small_button("✏").on_hover_text("Edit").clicked() {
                                intent = Some(Intent::EditClicked(event.id.clone()));
                            }
                        });
                    });
                });
                ui.add_space(2.0);
            }
        });

        intent
    }
}
