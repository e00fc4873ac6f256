//! Layout math
//!
//! Provides:
//! - Row-major option grid (2 columns by default) with navigation helpers
//! - Viewport metrics and the compact/panel decision
//! - Dialog placement inside the screen
//! - Paging of dialog body rows that do not fit

use ratatui::layout::Rect;
use std::ops::Range;

/// Grid layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns (default: 2)
    pub columns: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { columns: 2 }
    }
}

impl GridLayout {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.clamp(1, 10),
        }
    }

    /// Rows needed to show `total` entries
    pub fn rows(&self, total: usize) -> usize {
        total.div_ceil(self.columns as usize)
    }

    /// Convert flat index to (row, col) position
    /// Uses row-major ordering:
    /// ```text
    /// Index:  0 1
    ///         2 3
    ///         4 5
    /// ```
    pub fn index_to_position(&self, index: usize) -> (usize, usize) {
        let cols = self.columns as usize;
        (index / cols, index % cols)
    }

    /// Convert (row, col) position to flat index
    pub fn position_to_index(&self, row: usize, col: usize) -> usize {
        row * self.columns as usize + col
    }

    /// Entry directly above, or None from the first row
    pub fn move_up(&self, current: usize) -> Option<usize> {
        current.checked_sub(self.columns as usize)
    }

    /// Entry directly below, or None from the last row
    pub fn move_down(&self, current: usize, total: usize) -> Option<usize> {
        let next = current + self.columns as usize;
        if next < total {
            Some(next)
        } else if self.index_to_position(current).0 + 1 < self.rows(total) {
            // Short last row: land on its last entry
            Some(total - 1)
        } else {
            None
        }
    }

    /// Previous entry, clamped at the start
    pub fn move_left(&self, current: usize) -> usize {
        current.saturating_sub(1)
    }

    /// Next entry, clamped at the end
    pub fn move_right(&self, current: usize, total: usize) -> usize {
        (current + 1).min(total.saturating_sub(1))
    }

    /// Entry in `col` on the first row of a grid with `total` entries
    pub fn first_row_at(&self, col: usize, total: usize) -> Option<usize> {
        if total == 0 {
            None
        } else {
            Some(col.min(total - 1))
        }
    }

    /// Entry in `col` on the last row of a grid with `total` entries
    pub fn last_row_at(&self, col: usize, total: usize) -> Option<usize> {
        let rows = self.rows(total);
        if rows == 0 {
            return None;
        }
        Some(self.position_to_index(rows - 1, col).min(total - 1))
    }

    /// Tab navigation (next with wrap)
    pub fn tab_next(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            (current + 1) % total
        }
    }

    /// Shift+Tab navigation (previous with wrap)
    pub fn tab_prev(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else if current == 0 {
            total - 1
        } else {
            current - 1
        }
    }
}

/// Host viewport metrics, computed once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
    /// Width in logical pixels
    pub width_px: u32,
}

impl Viewport {
    pub fn new(area: Rect, cell_width_px: u32) -> Self {
        Self {
            area,
            width_px: u32::from(area.width) * cell_width_px.max(1),
        }
    }

    /// Full-screen dialog required at or below the threshold
    pub fn is_compact(&self, compact_max_width_px: u32) -> bool {
        self.width_px <= compact_max_width_px
    }
}

/// Where the dialog goes on screen
pub fn dialog_area(screen: Rect, compact: bool, panel_width: u16, content_height: u16) -> Rect {
    if compact {
        return screen;
    }
    let width = panel_width.min(screen.width);
    let height = content_height.min(screen.height);
    centered(screen, width, height)
}

/// Page of `page_size` rows that contains `selected`
/// Returns the start..end indices of rows to display
pub fn visible_range(selected: usize, total: usize, page_size: usize) -> Range<usize> {
    if total == 0 || page_size == 0 {
        return 0..0;
    }

    let page = selected.min(total - 1) / page_size;
    let start = page * page_size;
    let end = (start + page_size).min(total);
    start..end
}

/// Center a `width` x `height` box inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        let grid = GridLayout::default();
        assert_eq!(grid.rows(0), 0);
        assert_eq!(grid.rows(5), 3);
        assert_eq!(grid.rows(6), 3);
    }

    #[test]
    fn test_index_to_position() {
        let grid = GridLayout::new(2);
        assert_eq!(grid.index_to_position(0), (0, 0));
        assert_eq!(grid.index_to_position(1), (0, 1));
        assert_eq!(grid.index_to_position(4), (2, 0));
        assert_eq!(grid.position_to_index(2, 1), 5);
    }

    #[test]
    fn test_vertical_navigation() {
        let grid = GridLayout::new(2);
        assert_eq!(grid.move_up(3), Some(1));
        assert_eq!(grid.move_up(1), None);
        assert_eq!(grid.move_down(1, 6), Some(3));
        assert_eq!(grid.move_down(4, 6), None);
        // 5 entries: index 3 sits above an empty cell
        assert_eq!(grid.move_down(3, 5), Some(4));
    }

    #[test]
    fn test_horizontal_navigation() {
        let grid = GridLayout::new(2);
        assert_eq!(grid.move_left(0), 0);
        assert_eq!(grid.move_left(3), 2);
        assert_eq!(grid.move_right(5, 6), 5);
        assert_eq!(grid.move_right(2, 6), 3);
    }

    #[test]
    fn test_row_entry_points() {
        let grid = GridLayout::new(2);
        assert_eq!(grid.first_row_at(1, 6), Some(1));
        assert_eq!(grid.first_row_at(1, 1), Some(0));
        assert_eq!(grid.last_row_at(1, 6), Some(5));
        assert_eq!(grid.last_row_at(1, 5), Some(4));
        assert_eq!(grid.last_row_at(0, 0), None);
    }

    #[test]
    fn test_tab_wrap() {
        let grid = GridLayout::new(2);
        assert_eq!(grid.tab_next(12, 13), 0);
        assert_eq!(grid.tab_prev(0, 13), 12);
    }

    #[test]
    fn test_compact_threshold() {
        // 85 columns * 8px = 680px: still compact
        let at = Viewport::new(Rect::new(0, 0, 85, 30), 8);
        assert_eq!(at.width_px, 680);
        assert!(at.is_compact(680));

        let above = Viewport::new(Rect::new(0, 0, 86, 30), 8);
        assert!(!above.is_compact(680));
    }

    #[test]
    fn test_dialog_area() {
        let screen = Rect::new(0, 0, 120, 40);
        assert_eq!(dialog_area(screen, true, 78, 20), screen);

        let panel = dialog_area(screen, false, 78, 20);
        assert_eq!(panel, Rect::new(21, 10, 78, 20));

        // Clamped to the screen
        let small = Rect::new(0, 0, 60, 10);
        assert_eq!(dialog_area(small, false, 78, 20), small);
    }

    #[test]
    fn test_visible_range() {
        // Everything fits
        assert_eq!(visible_range(0, 13, 20), 0..13);
        assert_eq!(visible_range(12, 13, 20), 0..13);

        // First page
        assert_eq!(visible_range(0, 13, 11), 0..11);
        assert_eq!(visible_range(10, 13, 11), 0..11);

        // Second page (partial)
        assert_eq!(visible_range(11, 13, 11), 11..13);
        assert_eq!(visible_range(12, 13, 11), 11..13);
    }

    #[test]
    fn test_visible_range_degenerate() {
        assert_eq!(visible_range(0, 0, 5), 0..0);
        assert_eq!(visible_range(3, 13, 0), 0..0);
        assert_eq!(visible_range(40, 13, 5), 10..13);
    }
}
