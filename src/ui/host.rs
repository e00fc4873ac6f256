//! Theme host: the root of every frame.
//!
//! Resets the whole screen to the theme's background and foreground before
//! anything else draws, then hands the full viewport to the child.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Clear},
    Frame,
};

use super::theme::Theme;

pub struct ThemeHost<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeHost<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Reset the frame and draw `child` over the whole viewport
    pub fn provide<F, R>(&self, f: &mut Frame, child: F) -> R
    where
        F: FnOnce(&mut Frame, Rect, &Theme) -> R,
    {
        let area = f.area();
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(
                Style::default()
                    .bg(self.theme.background)
                    .fg(self.theme.foreground),
            ),
            area,
        );
        child(f, area, self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_utils::TestTerminal;

    #[test]
    fn test_reset_covers_every_cell() {
        let theme = Theme::light();
        let mut term = TestTerminal::with_size(10, 4);

        term.draw_with(|f| ThemeHost::new(&theme).provide(f, |_, _, _| ()));
        for y in 0..4 {
            for x in 0..10 {
                assert_eq!(term.cell(x, y).bg, theme.background);
                assert_eq!(term.cell(x, y).fg, theme.foreground);
            }
        }
    }

    #[test]
    fn test_child_gets_full_viewport() {
        let theme = Theme::dark();
        let mut term = TestTerminal::with_size(30, 8);

        let mut seen = None;
        term.draw_with(|f| {
            seen = Some(ThemeHost::new(&theme).provide(f, |_, area, theme| (area, theme.clone())));
        });
        let (area, theme_seen) = seen.unwrap();
        assert_eq!(area, Rect::new(0, 0, 30, 8));
        assert_eq!(theme_seen, theme);
    }

    #[test]
    fn test_provide_is_idempotent() {
        let theme = Theme::light();
        let mut term = TestTerminal::with_size(12, 3);

        term.draw_with(|f| ThemeHost::new(&theme).provide(f, |_, _, _| ()));
        let first = term.buffer().clone();
        term.draw_with(|f| ThemeHost::new(&theme).provide(f, |_, _, _| ()));
        assert_eq!(term.buffer(), &first);
    }
}
