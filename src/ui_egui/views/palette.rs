use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub selected_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub event_marker: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
}

impl CalendarCellPalette {
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            let accent = Color32::from_rgb(96, 165, 250);
            Self {
                regular_bg: Color32::from_rgb(38, 40, 46),
                weekend_bg: Color32::from_rgb(32, 34, 40),
                today_bg: Color32::from_rgb(30, 58, 95),
                selected_bg: with_alpha(accent, 110),
                border: Color32::from_rgb(60, 63, 70),
                today_border: accent,
                text: Color32::from_rgb(230, 230, 235),
                event_marker: Color32::from_rgb(251, 146, 60),
                header_bg: Color32::from_rgb(48, 51, 58),
                header_text: Color32::from_rgb(210, 210, 220),
            }
        } else {
            let accent = Color32::from_rgb(59, 130, 246);
            Self {
                regular_bg: Color32::from_rgb(255, 255, 255),
                weekend_bg: Color32::from_rgb(246, 247, 249),
                today_bg: Color32::from_rgb(219, 234, 254),
                selected_bg: with_alpha(accent, 90),
                border: Color32::from_rgb(220, 222, 226),
                today_border: accent,
                text: Color32::from_rgb(30, 30, 35),
                event_marker: Color32::from_rgb(234, 88, 12),
                header_bg: Color32::from_rgb(236, 238, 242),
                header_text: Color32::from_rgb(60, 60, 70),
            }
        }
    }
}
