//! Test utilities for rendering checks on ratatui's TestBackend

use ratatui::backend::TestBackend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Test utility wrapper around ratatui's TestBackend terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Wide enough for the centered panel layout
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame with a custom rendering function
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn cell(&self, x: u16, y: u16) -> &Cell {
        self.buffer()
            .cell((x, y))
            .expect("cell outside the test terminal")
    }

    /// One row of the buffer as text
    pub fn row_text(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// Whole buffer as text, one line per row
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Number of times `text` appears on screen
    pub fn count(&self, text: &str) -> usize {
        (0..self.buffer().area.height)
            .map(|y| self.row_text(y).matches(text).count())
            .sum()
    }

    /// Position of the first occurrence of `text`, scanning rows top-down
    pub fn find(&self, text: &str) -> Option<(u16, u16)> {
        (0..self.buffer().area.height).find_map(|y| {
            let row = self.row_text(y);
            row.find(text)
                .map(|byte| (row[..byte].chars().count() as u16, y))
        })
    }
}
