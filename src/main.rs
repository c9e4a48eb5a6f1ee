// Month Calendar Application
// Main entry point

use env_logger::Env;
use month_calendar::models::settings::Settings;
use month_calendar::services::settings::SettingsService;
use month_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    let (settings, settings_error) = match SettingsService::config_path() {
        Some(path) => match SettingsService::load(&path) {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        },
        None => (Settings::default(), None),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log_level.as_str()))
        .init();

    let settings_error = settings_error.map(|e| {
        log::warn!("Failed to load settings, using defaults: {:#}", e);
        format!("{:#}", e)
    });

    log::info!("Starting Month Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Month Calendar")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings, settings_error)))),
    )
}
