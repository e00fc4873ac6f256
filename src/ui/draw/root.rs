//! Root view: the trigger button and the status bar

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::centered;
use crate::ui::theme::Theme;

pub(crate) const TRIGGER_LABEL: &str = "Click to Personalize";

/// Draw the trigger button centered in `area`, returning its region
pub(crate) fn draw_trigger(f: &mut Frame, area: Rect, theme: &Theme) -> Rect {
    let width = TRIGGER_LABEL.width() as u16 + 6;
    let rect = centered(area, width, 3);

    let button = Paragraph::new(TRIGGER_LABEL)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(theme.accent)
                .fg(theme.on_accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().padding(Padding::vertical(1)));
    f.render_widget(button, rect);
    rect
}

/// Key hints on the last line
pub(crate) fn draw_status_bar(f: &mut Frame, area: Rect, open: bool, theme: &Theme) {
    let status = if open {
        " Tab/arrows: move | Space: toggle | Esc: close"
    } else {
        " Enter: personalize | q: quit"
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(theme.label).bg(theme.background));
    f.render_widget(status_bar, area);
}
