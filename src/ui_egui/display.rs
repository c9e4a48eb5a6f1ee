//! egui-backed [`Display`]: keeps the latest view, a transient notice and
//! the delete awaiting confirmation for the next frame to draw.

use std::time::{Duration, Instant};

use egui::{Color32, RichText};

use crate::services::calendar::{CalendarView, DeleteConfirmation, Display, Notice, NoticeLevel};
use crate::services::selection::Refresh;

const NOTICE_DURATION: Duration = Duration::from_secs(4);

#[derive(Default)]
pub struct EguiDisplay {
    view: Option<CalendarView>,
    notice: Option<(Notice, Instant)>,
    confirmation: Option<DeleteConfirmation>,
}

impl EguiDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&CalendarView> {
        self.view.as_ref()
    }

    pub fn confirmation(&self) -> Option<&DeleteConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn clear_confirmation(&mut self) {
        self.confirmation = None;
    }

    /// Draw the current notice, dropping it once it has been shown long enough
    pub fn render_notice(&mut self, ctx: &egui::Context, is_dark: bool) {
        if self
            .notice
            .as_ref()
            .is_some_and(|(_, shown_at)| shown_at.elapsed() >= NOTICE_DURATION)
        {
            self.notice = None;
        }

        let Some((notice, shown_at)) = &self.notice else {
            return;
        };
        let remaining = NOTICE_DURATION.saturating_sub(shown_at.elapsed());

        let (icon, color) = match (notice.level, is_dark) {
            (NoticeLevel::Info, false) => ("ℹ", Color32::from_rgb(30, 80, 150)),
            (NoticeLevel::Info, true) => ("ℹ", Color32::from_rgb(100, 180, 255)),
            (NoticeLevel::Warning, false) => ("⚠", Color32::from_rgb(150, 100, 0)),
            (NoticeLevel::Warning, true) => ("⚠", Color32::from_rgb(255, 200, 80)),
            (NoticeLevel::Error, false) => ("✗", Color32::from_rgb(180, 40, 40)),
            (NoticeLevel::Error, true) => ("✗", Color32::from_rgb(255, 120, 120)),
        };

        egui::TopBottomPanel::bottom("notice_panel").show(ctx, |ui| {
            ui.label(RichText::new(format!("{} {}", icon, notice.message)).color(color));
        });

        ctx.request_repaint_after(remaining);
    }
}

impl Display for EguiDisplay {
    fn render(&mut self, view: &CalendarView, refresh: Refresh) {
        log::trace!("Render {:?} for {}", refresh, view.selected_key);
        self.view = Some(view.clone());
    }

    fn show_message(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    fn request_confirmation(&mut self, request: &DeleteConfirmation) {
        self.confirmation = Some(request.clone());
    }
}
