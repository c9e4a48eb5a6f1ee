use egui::{Margin, RichText, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use crate::services::calendar::{CalendarView, Intent};
use crate::services::grid::{CellDescriptor, DayCell};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_HEIGHT: f32 = 56.0;
const MIN_COL_WIDTH: f32 = 36.0;

pub struct MonthView;

impl MonthView {
    /// Month header with navigation followed by the day grid
    pub fn show(ui: &mut egui::Ui, view: &CalendarView, is_dark: bool) -> Option<Intent> {
        let mut intent = None;

        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous month").clicked() {
                intent = Some(Intent::PreviousMonth);
            }
            ui.heading(view.month_label.as_str());
            if ui.button("▶").on_hover_text("Next month").clicked() {
                intent = Some(Intent::NextMonth);
            }
            ui.separator();
            if ui.button("Today").clicked() {
                intent = Some(Intent::Today);
            }
        });

        ui.add_space(5.0);
        ui.separator();
        ui.add_space(5.0);

        let spacing = 2.0;
        let total_spacing = spacing * 6.0; // 6 gaps between 7 columns
        let col_width = ((ui.available_width() - total_spacing) / 7.0).max(MIN_COL_WIDTH);
        let palette = CalendarCellPalette::for_theme(is_dark);

        egui::Grid::new("month_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for day in DAY_NAMES {
                    egui::Frame::none()
                        .fill(palette.header_bg)
                        .rounding(egui::Rounding::same(6.0))
                        .inner_margin(Margin::symmetric(0.0, 6.0))
                        .show(ui, |ui| {
                            ui.set_width(col_width);
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(day).color(palette.header_text).strong());
                            });
                        });
                }
                ui.end_row();

                for (row, week) in view.grid.weeks().enumerate() {
                    for (col, cell) in week.iter().enumerate() {
                        match cell {
                            CellDescriptor::Empty => {
                                ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::hover());
                            }
                            CellDescriptor::Day(day) => {
                                let is_weekend = col == 0 || col == 6;
                                if Self::day_cell(ui, day, col_width, is_weekend, &palette) {
                                    intent = Some(Intent::DayClicked(day.date));
                                }
                            }
                        }
                    }
                    log::trace!("Laid out week {} of {}", row + 1, view.month_label);
                    ui.end_row();
                }
            });

        intent
    }

    fn day_cell(
        ui: &mut egui::Ui,
        cell: &DayCell,
        width: f32,
        is_weekend: bool,
        palette: &CalendarCellPalette,
    ) -> bool {
        let fill = if cell.is_selected {
            palette.selected_bg
        } else if cell.is_today {
            palette.today_bg
        } else if is_weekend {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        let stroke = if cell.is_today {
            Stroke::new(2.0, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };

        let mut text = RichText::new(cell.day.to_string()).color(palette.text);
        if cell.is_today {
            text = text.strong();
        }

        let response = ui.add_sized(
            [width, CELL_HEIGHT],
            egui::Button::new(text).fill(fill).stroke(stroke),
        );

        if cell.has_events {
            let marker = response.rect.center_bottom() - Vec2::new(0.0, 10.0);
            ui.painter().circle_filled(marker, 3.5, palette.event_marker);
        }

        response
            .on_hover_text(cell.date_key.as_str())
            .clicked()
    }
}
