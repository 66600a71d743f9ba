// Layout constants and hit-testing for the browser window.
// Rectangles here are used both for drawing and for pointer hit-tests.

use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::state::Highlight;

// --- Window ---
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 640.0;

// --- Listing area ---
pub const PAGE_SIZE: usize = 10;
pub const LISTING_HEIGHT: f32 = 600.0;
pub const ROW_HEIGHT: f32 = LISTING_HEIGHT / PAGE_SIZE as f32;
pub const ICON_X: f32 = 18.0;
pub const NAME_X: f32 = 56.0;
pub const SIZE_RIGHT_X: f32 = WINDOW_WIDTH - 24.0;

// --- Chrome bar ---
pub const CHROME_HEIGHT: f32 = WINDOW_HEIGHT - LISTING_HEIGHT;
pub const BUTTON_SIZE: Vec2 = Vec2::new(120.0, 28.0);
pub const BUTTON_MARGIN: f32 = 16.0;
pub const HIGHLIGHT_STROKE_WIDTH: f32 = 2.0;

pub fn listing_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(WINDOW_WIDTH, LISTING_HEIGHT))
}

pub fn chrome_rect() -> Rect {
    Rect::from_min_size(pos2(0.0, LISTING_HEIGHT), vec2(WINDOW_WIDTH, CHROME_HEIGHT))
}

/// Full-width row rectangle for a visible-row index, stacked from the top.
pub fn row_rect(visible_index: usize) -> Rect {
    Rect::from_min_size(
        pos2(0.0, visible_index as f32 * ROW_HEIGHT),
        vec2(WINDOW_WIDTH, ROW_HEIGHT),
    )
}

pub fn prev_button_rect() -> Rect {
    let y = LISTING_HEIGHT + (CHROME_HEIGHT - BUTTON_SIZE.y) / 2.0;
    Rect::from_min_size(pos2(BUTTON_MARGIN, y), BUTTON_SIZE)
}

pub fn next_button_rect() -> Rect {
    let y = LISTING_HEIGHT + (CHROME_HEIGHT - BUTTON_SIZE.y) / 2.0;
    Rect::from_min_size(pos2(WINDOW_WIDTH - BUTTON_MARGIN - BUTTON_SIZE.x, y), BUTTON_SIZE)
}

/// Maps a pointer position to the row or paging button under it.
/// Rows are tested before buttons; the first match wins. Bounds are
/// inclusive on all four edges (`Rect::contains`).
pub fn hit_test(pos: Pos2, visible_rows: usize) -> Highlight {
    for row in 0..visible_rows {
        if row_rect(row).contains(pos) {
            return Highlight::Entry(row);
        }
    }
    if prev_button_rect().contains(pos) {
        return Highlight::PrevButton;
    }
    if next_button_rect().contains(pos) {
        return Highlight::NextButton;
    }
    Highlight::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_stack_vertically_by_visible_index() {
        for i in 0..PAGE_SIZE {
            let rect = row_rect(i);
            assert_eq!(rect.min.y, i as f32 * ROW_HEIGHT);
            assert_eq!(rect.height(), ROW_HEIGHT);
            assert_eq!(rect.width(), WINDOW_WIDTH);
        }
    }

    #[test]
    fn rect_bounds_are_inclusive() {
        let rect = row_rect(3);
        assert_eq!(hit_test(rect.min, 10), Highlight::Entry(3));
        // The far corner is shared with row 4; the first match (row 3) wins.
        assert_eq!(hit_test(pos2(rect.max.x, rect.max.y), 10), Highlight::Entry(3));
    }

    #[test]
    fn point_outside_every_rect_is_no_hit() {
        assert_eq!(hit_test(pos2(-1.0, 30.0), 10), Highlight::None);
        assert_eq!(hit_test(pos2(400.0, 300.0), 0), Highlight::None);
    }

    #[test]
    fn rows_beyond_the_visible_count_do_not_hit() {
        // Only 3 rows visible: a point over where row 5 would be hits nothing.
        let pos = row_rect(5).center();
        assert_eq!(hit_test(pos, 3), Highlight::None);
    }

    #[test]
    fn paging_buttons_hit_in_the_chrome_bar() {
        assert!(chrome_rect().contains(prev_button_rect().center()));
        assert!(chrome_rect().contains(next_button_rect().center()));
        assert_eq!(hit_test(prev_button_rect().center(), 10), Highlight::PrevButton);
        assert_eq!(hit_test(next_button_rect().center(), 10), Highlight::NextButton);
    }

    #[test]
    fn button_corners_hit_inclusively() {
        let rect = next_button_rect();
        assert_eq!(hit_test(rect.min, 0), Highlight::NextButton);
        assert_eq!(hit_test(pos2(rect.max.x, rect.max.y), 0), Highlight::NextButton);
    }

    #[test]
    fn rows_shadow_the_chrome_on_shared_boundary() {
        // y = 600 is both row 9's bottom edge and the chrome's top edge;
        // rows are tested first, so the row wins.
        let pos = pos2(400.0, LISTING_HEIGHT);
        assert_eq!(hit_test(pos, 10), Highlight::Entry(9));
    }
}
