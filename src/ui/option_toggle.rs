//! Option toggle widget
//!
//! Renders one catalog entry as a single line:
//! `[x] LinkedIn Bio` or `[ ] Current job description DISABLED`

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use super::style::{toggle_visuals, DISABLED_BADGE};
use super::theme::Theme;
use crate::catalog::PersonalizeOption;

/// Checkbox markers
#[derive(Debug, Clone, Copy)]
pub struct Markers<'a> {
    pub checked: &'a str,
    pub unchecked: &'a str,
}

impl Default for Markers<'_> {
    fn default() -> Self {
        Self {
            checked: "[x]",
            unchecked: "[ ]",
        }
    }
}

/// Option toggle widget
pub struct OptionToggle<'a> {
    option: &'a PersonalizeOption,
    checked: bool,
    focused: bool,
    theme: &'a Theme,
    markers: Markers<'a>,
}

impl<'a> OptionToggle<'a> {
    pub fn new(option: &'a PersonalizeOption, theme: &'a Theme) -> Self {
        Self {
            option,
            checked: false,
            focused: false,
            theme,
            markers: Markers::default(),
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn markers(mut self, markers: Markers<'a>) -> Self {
        self.markers = markers;
        self
    }
}

impl Widget for OptionToggle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let visuals = toggle_visuals(self.option, self.checked, self.focused, self.theme);
        buf.set_style(area, Style::default().bg(visuals.background));

        let max_x = area.x + area.width;
        let y = area.y;
        let mut x = area.x;

        let marker = if visuals.checked {
            self.markers.checked
        } else {
            self.markers.unchecked
        };
        let (after_marker, _) = buf.set_stringn(x, y, marker, area.width as usize, visuals.marker);
        x = (after_marker + 1).min(max_x);

        // Keep room for " DISABLED" when the label is long
        let badge_width = visuals
            .badge
            .map(|_| DISABLED_BADGE.width() as u16 + 1)
            .unwrap_or(0);
        let label_width = max_x.saturating_sub(x).saturating_sub(badge_width) as usize;
        let label = truncate(&self.option.name, label_width);
        let (after_label, _) = buf.set_stringn(x, y, &label, label_width, visuals.label);
        x = after_label;

        if let Some(badge) = visuals.badge {
            x += 1;
            if x < max_x {
                buf.set_stringn(x, y, DISABLED_BADGE, (max_x - x) as usize, badge);
            }
        }
    }
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width == 0 {
        String::new()
    } else if max_width == 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}
