use super::{CalendarApp, Controller};
use crate::models::settings::Settings;
use crate::services::calendar::{Display, Notice};
use crate::services::event_store::EventStore;
use crate::services::settings::SettingsService;
use crate::services::storage::{BlobStore, JsonFileStore, MemoryBlobStore};
use crate::ui_egui::display::EguiDisplay;
use crate::ui_egui::event_dialog::EventDialogState;
use chrono::Local;

impl CalendarApp {
    /// `settings_error` describes why defaults replaced the config file, if they did
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_error: Option<String>,
    ) -> Self {
        let visuals = if settings.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        let (backend, persistent): (Box<dyn BlobStore>, bool) = match open_backend(&settings) {
            Some(backend) => (backend, true),
            None => (Box::new(MemoryBlobStore::new()), false),
        };

        let mut display = EguiDisplay::new();
        if let Some(notice) = startup_notice(settings_error.as_deref(), persistent) {
            display.show_message(notice);
        }

        let controller = Controller::new(
            EventStore::load(backend),
            display,
            EventDialogState::new(),
            Local::now().date_naive(),
        );

        Self {
            controller,
            settings,
        }
    }
}

/// Events file backend, `None` when no data dir can be resolved
fn open_backend(settings: &Settings) -> Option<Box<dyn BlobStore>> {
    match SettingsService::events_path(settings) {
        Some(path) => {
            log::info!("Using events file {}", path.display());
            Some(Box::new(JsonFileStore::new(path)))
        }
        None => {
            log::warn!("Could not determine a data directory; events will not be saved");
            None
        }
    }
}

/// Warning shown on the first frame; losing saves outranks a settings fallback
fn startup_notice(settings_error: Option<&str>, persistent: bool) -> Option<Notice> {
    if !persistent {
        return Some(Notice::warning(
            "No data directory found; events will not be saved",
        ));
    }
    settings_error.map(|e| Notice::warning(format!("Using default settings: {}", e)))
}
