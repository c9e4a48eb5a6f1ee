mod confirm;
mod lifecycle;

use self::confirm::render_confirm_dialog;
use crate::models::settings::Settings;
use crate::services::calendar::{CalendarController, Intent};
use crate::services::storage::BlobStore;
use crate::ui_egui::display::EguiDisplay;
use crate::ui_egui::event_dialog::EventDialogState;
use crate::ui_egui::views::{EventListView, MonthView};
use chrono::Local;

const SIDE_PANEL_WIDTH: f32 = 280.0;

type Controller = CalendarController<Box<dyn BlobStore>, EguiDisplay, EventDialogState>;

pub struct CalendarApp {
    controller: Controller,
    /// Core application settings loaded at startup
    settings: Settings,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Picks up midnight rollover while the window stays open
        self.controller.set_today(Local::now().date_naive());

        let is_dark = self.settings.is_dark();
        let mut intents: Vec<Intent> = Vec::new();

        // Bottom panel must be added before the central panel
        self.controller.display_mut().render_notice(ctx, is_dark);

        if let Some(view) = self.controller.display().view().cloned() {
            egui::SidePanel::right("event_list_panel")
                .resizable(true)
                .default_width(SIDE_PANEL_WIDTH)
                .show(ctx, |ui| {
                    intents.extend(EventListView::show(ui, &view));
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                intents.extend(MonthView::show(ui, &view, is_dark));
            });
        }

        intents.extend(self.controller.form_mut().render(ctx));

        if let Some(request) = self.controller.display().confirmation().cloned() {
            if let Some(answer) = render_confirm_dialog(ctx, &request) {
                self.controller.display_mut().clear_confirmation();
                intents.push(answer);
            }
        }

        for intent in intents {
            log::debug!("Dispatching {:?}", intent);
            self.controller.handle(intent);
        }
    }
}
