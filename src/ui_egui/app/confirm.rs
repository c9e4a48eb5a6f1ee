//! Confirmation dialog for deleting events.

use egui::{Color32, Context, RichText};

use crate::services::calendar::{DeleteConfirmation, Intent};

/// Show the pending delete; returns the user's answer once given
pub fn render_confirm_dialog(ctx: &Context, request: &DeleteConfirmation) -> Option<Intent> {
    let mut intent = None;

    egui::Window::new(request.title())
        .id(egui::Id::new("confirm_delete_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(request.message());
            ui.add_space(4.0);
            ui.label(RichText::new(format!("\"{}\"", request.event_title)).strong());
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let delete = egui::Button::new(RichText::new("Delete").color(Color32::WHITE))
                    .fill(Color32::from_rgb(200, 60, 60));
                if ui.add(delete).clicked() {
                    intent = Some(Intent::DeleteConfirmed);
                }
                if ui.button("Cancel").clicked() {
                    intent = Some(Intent::DeleteCancelled);
                }
            });
        });

    if intent.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        intent = Some(Intent::DeleteCancelled);
    }

    intent
}
