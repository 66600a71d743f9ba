// Frame painting for the listing area and the paging chrome.

use eframe::egui::{self, pos2, Align2, FontId, Stroke, StrokeKind};

use crate::app::Breve;
use crate::entry::RowText;
use crate::layout;
use crate::state::Highlight;

impl Breve {
    pub(crate) fn render_browser(&mut self, ui: &mut egui::Ui) {
        let palette = self.theme.palette();
        let bounds = self.pager.bounds(self.listing.len());
        let highlight = self.highlight;
        let font_size = self.font_size;
        let icon_size = self.icon_size;

        let painter = ui.painter();

        // --- Listing area ---
        painter.rect_filled(layout::listing_rect(), 0.0, palette.background);

        if let Some(err) = &self.listing.error {
            painter.text(
                layout::listing_rect().center(),
                Align2::CENTER_CENTER,
                format!("Cannot read directory: {}", err),
                FontId::proportional(font_size),
                palette.error,
            );
        } else if self.listing.is_empty() {
            painter.text(
                layout::listing_rect().center(),
                Align2::CENTER_CENTER,
                "Empty directory",
                FontId::proportional(font_size),
                palette.dim_text,
            );
        }

        let name_font = FontId::proportional(font_size);
        let size_font = FontId::proportional(font_size - 4.0);

        let visible = &mut self.listing.entries[bounds.start..bounds.end];
        for (row, entry) in visible.iter_mut().enumerate() {
            let rect = layout::row_rect(row);
            if row % 2 == 1 {
                painter.rect_filled(rect, 0.0, palette.row_stripe);
            }

            let icon_color = if entry.is_dir {
                palette.accent
            } else {
                palette.dim_text
            };
            painter.text(
                pos2(layout::ICON_X, rect.center().y),
                Align2::LEFT_CENTER,
                entry.icon(),
                FontId::proportional(icon_size),
                icon_color,
            );

            // Lay text out once per listing generation, then reuse the galleys.
            if entry.text.is_none() {
                entry.text = Some(RowText {
                    name: painter.layout_no_wrap(
                        entry.name.clone(),
                        name_font.clone(),
                        palette.text,
                    ),
                    size: painter.layout_no_wrap(
                        entry.size_label(),
                        size_font.clone(),
                        palette.dim_text,
                    ),
                });
            }
            if let Some(text) = &entry.text {
                let name_pos = pos2(
                    layout::NAME_X,
                    rect.center().y - text.name.size().y / 2.0,
                );
                painter.galley(name_pos, text.name.clone(), palette.text);

                let size_pos = pos2(
                    layout::SIZE_RIGHT_X - text.size.size().x,
                    rect.center().y - text.size.size().y / 2.0,
                );
                painter.galley(size_pos, text.size.clone(), palette.dim_text);
            }
        }

        // --- Paging chrome ---
        painter.rect_filled(layout::chrome_rect(), 0.0, palette.chrome);

        let page_count = bounds.page_count.max(1);
        painter.text(
            layout::chrome_rect().center(),
            Align2::CENTER_CENTER,
            format!("Page {} / {}", self.pager.page() + 1, page_count),
            FontId::proportional(font_size - 2.0),
            palette.text,
        );

        let prev_enabled = self.pager.page() > 0;
        let next_enabled = self.pager.page() + 1 < bounds.page_count;
        Self::render_button(
            painter,
            layout::prev_button_rect(),
            "< Prev",
            prev_enabled,
            &palette,
            font_size,
        );
        Self::render_button(
            painter,
            layout::next_button_rect(),
            "Next >",
            next_enabled,
            &palette,
            font_size,
        );

        // --- Highlight outline over the hovered row or button ---
        let outline = Stroke::new(layout::HIGHLIGHT_STROKE_WIDTH, palette.accent);
        match highlight {
            Highlight::Entry(row) if row < bounds.len() => {
                painter.rect_stroke(layout::row_rect(row), 0.0, outline, StrokeKind::Inside);
            }
            Highlight::PrevButton => {
                painter.rect_stroke(layout::prev_button_rect(), 0.0, outline, StrokeKind::Inside);
            }
            Highlight::NextButton => {
                painter.rect_stroke(layout::next_button_rect(), 0.0, outline, StrokeKind::Inside);
            }
            _ => {}
        }
    }

    fn render_button(
        painter: &egui::Painter,
        rect: egui::Rect,
        label: &str,
        enabled: bool,
        palette: &crate::style::Palette,
        font_size: f32,
    ) {
        let fill = if enabled {
            palette.button
        } else {
            palette.button_disabled
        };
        let text_color = if enabled {
            palette.text
        } else {
            palette.dim_text
        };
        painter.rect_filled(rect, 4.0, fill);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(font_size - 2.0),
            text_color,
        );
    }
}
