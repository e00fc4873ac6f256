//! Personalization dialog drawing
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ Personalization Settings:      Use Account Research ●     ✕ │  green band
//! │                                                            │
//! │  Profile:                                                  │
//! │                                                            │
//! │  [ ] LinkedIn Bio                [ ] List of past jobs     │
//! │  ...                                                       │
//! │  ────────────────────────────────────────────────────────  │
//! │  Account:                                                  │
//! │  ...                                                       │
//! └────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Clear},
    Frame,
};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

use crate::dialog::{Dialog, Focus};
use crate::ui::layout::{dialog_area, visible_range};
use crate::ui::option_toggle::{Markers, OptionToggle};
use crate::ui::style::switch_visuals;
use crate::ui::theme::Theme;

pub(crate) const TITLE: &str = "Personalization Settings:";
pub(crate) const SWITCH_LABEL: &str = "Use Account Research";
const CLOSE_LABEL: &str = " ✕ ";
/// Height of the green header band
const HEADER_HEIGHT: u16 = 3;
/// Horizontal padding inside header and body
const PADDING_X: u16 = 2;
/// Gap between grid columns
const COLUMN_GAP: u16 = 2;
/// Width of the switch track
const TRACK_WIDTH: u16 = 4;

/// Dialog geometry inputs resolved once per frame
pub(crate) struct DialogFrame<'a> {
    pub screen: Rect,
    pub compact: bool,
    pub panel_width: u16,
    pub markers: Markers<'a>,
}

/// Where the dialog's controls ended up
#[derive(Debug, Default)]
pub(crate) struct DialogRegions {
    pub area: Rect,
    pub close: Rect,
    pub switch: Rect,
    pub options: Vec<(Rect, Focus)>,
}

/// One line of the dialog body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyRow {
    Title(usize),
    Grid { section: usize, row: usize },
    Divider,
    Spacer,
}

fn body_rows(dialog: &Dialog) -> Vec<BodyRow> {
    let grid = dialog.grid();
    let count = dialog.sections().len();
    let mut rows = Vec::new();

    for (section, state) in dialog.sections().iter().enumerate() {
        rows.push(BodyRow::Title(section));
        rows.push(BodyRow::Spacer);
        rows.extend((0..grid.rows(state.len())).map(|row| BodyRow::Grid { section, row }));
        if section + 1 < count {
            rows.push(BodyRow::Spacer);
            rows.push(BodyRow::Divider);
            rows.push(BodyRow::Spacer);
        }
    }
    rows
}

/// Body row holding the focused control. The header switch counts as the top.
fn focused_row(rows: &[BodyRow], dialog: &Dialog) -> usize {
    match dialog.focus() {
        Focus::ResearchSwitch => 0,
        Focus::Option { section, index } => {
            let (row, _) = dialog.grid().index_to_position(index);
            rows.iter()
                .position(|r| *r == BodyRow::Grid { section, row })
                .unwrap_or(0)
        }
    }
}

/// Body rows that made it on screen
#[derive(Debug, Clone, PartialEq, Eq)]
struct BodyWindow {
    rows: Range<usize>,
    total: usize,
}

impl BodyWindow {
    fn hidden_above(&self) -> bool {
        self.rows.start > 0
    }

    fn hidden_below(&self) -> bool {
        self.rows.end < self.total
    }
}

/// Rows the dialog needs, borders included
pub(crate) fn dialog_height(dialog: &Dialog, compact: bool) -> u16 {
    let borders = if compact { 0 } else { 2 };
    // header band, blank line above and below the body
    borders + HEADER_HEIGHT + 2 + body_rows(dialog).len() as u16
}

pub(crate) fn draw_dialog(
    f: &mut Frame,
    dialog: &Dialog,
    frame: &DialogFrame,
    theme: &Theme,
) -> DialogRegions {
    let height = dialog_height(dialog, frame.compact);
    let area = dialog_area(frame.screen, frame.compact, frame.panel_width, height);
    f.render_widget(Clear, area);

    let block = if frame.compact {
        Block::default()
    } else {
        Block::bordered().border_style(Style::default().fg(theme.divider))
    }
    .style(Style::default().bg(theme.surface).fg(theme.foreground));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let header = Rect {
        height: HEADER_HEIGHT.min(inner.height),
        ..inner
    };
    let (switch, close) = draw_header(f, dialog, header, theme);

    let body_top = (header.bottom() + 1).min(inner.bottom());
    let body = Rect {
        x: inner.x + PADDING_X.min(inner.width),
        y: body_top,
        width: inner.width.saturating_sub(PADDING_X * 2),
        height: inner.bottom() - body_top,
    };
    let (options, window) = draw_body(f, dialog, body, frame.markers, theme);

    // More rows than fit: arrows in the right padding
    if body.height > 0 && body.right() < inner.right() {
        let hint = Style::default().bg(theme.surface).fg(theme.label);
        let buf = f.buffer_mut();
        if window.hidden_above() {
            buf.set_string(body.right(), body.y, "▲", hint);
        }
        if window.hidden_below() {
            buf.set_string(body.right(), body.bottom() - 1, "▼", hint);
        }
    }

    DialogRegions {
        area,
        close,
        switch,
        options,
    }
}

/// Title on the left, research switch and close button on the right.
/// Returns the switch and close regions.
fn draw_header(f: &mut Frame, dialog: &Dialog, area: Rect, theme: &Theme) -> (Rect, Rect) {
    let band = Style::default().bg(theme.accent).fg(theme.on_accent);
    let buf = f.buffer_mut();
    buf.set_style(area, band);
    if area.height == 0 {
        return (Rect::default(), Rect::default());
    }

    let y = area.y + area.height / 2;
    let right = area.right();

    let close_width = CLOSE_LABEL.width() as u16;
    let close_x = right.saturating_sub(close_width + 1).max(area.x);
    buf.set_stringn(close_x, y, CLOSE_LABEL, (right - close_x) as usize, band.add_modifier(Modifier::BOLD));
    let close = Rect::new(close_x, y, close_width.min(right - close_x), 1);

    let visuals = switch_visuals(
        dialog.research_enabled(),
        dialog.focus() == Focus::ResearchSwitch,
        theme,
    );
    let switch_width = SWITCH_LABEL.width() as u16 + 1 + TRACK_WIDTH;
    let switch_x = close_x.saturating_sub(switch_width + 2).max(area.x);
    let available = close_x.saturating_sub(switch_x);
    buf.set_stringn(switch_x, y, SWITCH_LABEL, available as usize, visuals.label);

    let track_x = switch_x + SWITCH_LABEL.width() as u16 + 1;
    if track_x + TRACK_WIDTH <= close_x {
        let track = Rect::new(track_x, y, TRACK_WIDTH, 1);
        buf.set_style(track, visuals.track);
        let thumb_x = if visuals.on { track.right() - 1 } else { track.x };
        buf.set_string(thumb_x, y, "●", visuals.thumb);
    }
    let switch = Rect::new(switch_x, y, switch_width.min(available), 1);

    let title_x = area.x + PADDING_X.min(area.width);
    let title_width = switch_x.saturating_sub(title_x + 1);
    buf.set_stringn(title_x, y, TITLE, title_width as usize, band);

    (switch, close)
}

/// Section titles, option grids and dividers, one page of them when the
/// body is too short. Returns option regions and the drawn window.
fn draw_body(
    f: &mut Frame,
    dialog: &Dialog,
    area: Rect,
    markers: Markers,
    theme: &Theme,
) -> (Vec<(Rect, Focus)>, BodyWindow) {
    let grid = dialog.grid();
    let columns = grid.columns;
    let column_width = area.width.saturating_sub(COLUMN_GAP * (columns - 1)) / columns;
    let surface = Style::default().bg(theme.surface);
    let mut regions = Vec::new();

    let rows = body_rows(dialog);
    let window = BodyWindow {
        rows: visible_range(focused_row(&rows, dialog), rows.len(), area.height as usize),
        total: rows.len(),
    };

    for (y, row) in (area.y..).zip(rows[window.rows.clone()].iter().copied()) {
        match row {
            BodyRow::Title(section) => {
                let style = surface.fg(theme.title).add_modifier(Modifier::BOLD);
                let title = dialog.sections()[section].title();
                f.buffer_mut()
                    .set_stringn(area.x, y, title, area.width as usize, style);
            }
            BodyRow::Divider => {
                let line = "─".repeat(area.width as usize);
                f.buffer_mut()
                    .set_string(area.x, y, line, surface.fg(theme.divider));
            }
            BodyRow::Spacer => {}
            BodyRow::Grid { section, row } => {
                let state = &dialog.sections()[section];
                for col in 0..columns as usize {
                    let index = grid.position_to_index(row, col);
                    let Some((option, toggle)) = state.item(index) else {
                        continue;
                    };
                    let x = area.x + col as u16 * (column_width + COLUMN_GAP);
                    let rect = Rect::new(x, y, column_width, 1).intersection(area);
                    let focus = Focus::Option { section, index };

                    let widget = OptionToggle::new(option, theme)
                        .checked(toggle.is_checked())
                        .focused(dialog.focus() == focus)
                        .markers(markers);
                    f.render_widget(widget, rect);
                    regions.push((rect, focus));
                }
            }
        }
    }
    (regions, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Section;

    #[test]
    fn test_body_rows_for_default_sections() {
        let dialog = Dialog::new(&Section::defaults());
        let rows = body_rows(&dialog);

        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0], BodyRow::Title(0));
        assert_eq!(rows[2], BodyRow::Grid { section: 0, row: 0 });
        assert_eq!(rows[6], BodyRow::Divider);
        assert_eq!(rows[8], BodyRow::Title(1));
        assert_eq!(rows[12], BodyRow::Grid { section: 1, row: 2 });
    }

    #[test]
    fn test_dialog_height() {
        let dialog = Dialog::new(&Section::defaults());
        assert_eq!(dialog_height(&dialog, false), 20);
        assert_eq!(dialog_height(&dialog, true), 18);
    }

    #[test]
    fn test_focused_row_follows_focus() {
        let mut dialog = Dialog::new(&Section::defaults());
        let rows = body_rows(&dialog);
        assert_eq!(focused_row(&rows, &dialog), 0);

        dialog.set_focus(Focus::Option { section: 0, index: 3 });
        assert_eq!(focused_row(&rows, &dialog), 3);

        dialog.set_focus(Focus::Option { section: 1, index: 5 });
        assert_eq!(focused_row(&rows, &dialog), 12);
    }
}
