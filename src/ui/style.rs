//! Visual rules for toggles and the header switch.
//!
//! Pure functions from state to styles, kept apart from event handling so
//! the color rules can be checked without rendering.

use ratatui::style::{Color, Modifier, Style};

use super::theme::Theme;
use crate::catalog::PersonalizeOption;

/// Text of the badge shown next to disabled options
pub const DISABLED_BADGE: &str = "DISABLED";

/// Resolved styles for one option toggle
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleVisuals {
    pub checked: bool,
    pub background: Color,
    pub marker: Style,
    pub label: Style,
    /// Present only for disabled options
    pub badge: Option<Style>,
}

pub fn toggle_visuals(
    option: &PersonalizeOption,
    checked: bool,
    focused: bool,
    theme: &Theme,
) -> ToggleVisuals {
    let background = if focused { theme.focus_bg } else { theme.surface };
    let base = Style::default().bg(background);

    let marker = if option.disabled {
        base.fg(theme.divider)
    } else if checked {
        base.fg(theme.accent)
            .bg(theme.accent_tint)
            .add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.label)
    };

    let mut label = base.fg(theme.label);
    if option.disabled {
        label = label.add_modifier(Modifier::DIM);
    }
    if focused {
        label = label.add_modifier(Modifier::UNDERLINED);
    }

    let badge = option.disabled.then(|| {
        Style::default()
            .fg(theme.badge_fg)
            .bg(theme.badge_bg)
            .add_modifier(Modifier::BOLD)
    });

    ToggleVisuals {
        checked,
        background,
        marker,
        label,
        badge,
    }
}

/// Resolved styles for the "Use Account Research" switch
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchVisuals {
    pub on: bool,
    pub label: Style,
    pub track: Style,
    pub thumb: Style,
}

pub fn switch_visuals(on: bool, focused: bool, theme: &Theme) -> SwitchVisuals {
    let mut label = Style::default().fg(theme.on_accent).bg(theme.accent);
    if focused {
        label = label.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let track_bg = if on { theme.on_accent } else { theme.divider };
    let thumb_fg = if on { theme.accent } else { theme.background };

    SwitchVisuals {
        on,
        label,
        track: Style::default().bg(track_bg),
        thumb: Style::default().fg(thumb_fg).bg(track_bg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_marker_uses_accent() {
        let theme = Theme::light();
        let option = PersonalizeOption::new("LinkedIn Bio", false);

        let on = toggle_visuals(&option, true, false, &theme);
        assert_eq!(on.marker.fg, Some(theme.accent));
        assert_eq!(on.marker.bg, Some(theme.accent_tint));
        assert_eq!(on.label.fg, Some(theme.label));
        assert!(on.badge.is_none());

        let off = toggle_visuals(&option, false, false, &theme);
        assert_eq!(off.marker.fg, Some(theme.label));
    }

    #[test]
    fn test_disabled_option_gets_red_badge() {
        let theme = Theme::light();
        let option = PersonalizeOption::new("Current job description", true);

        let visuals = toggle_visuals(&option, false, false, &theme);
        let badge = visuals.badge.expect("disabled options carry a badge");
        assert_eq!(badge.fg, Some(theme.badge_fg));
        assert_eq!(badge.bg, Some(theme.badge_bg));
        assert!(badge.add_modifier.contains(Modifier::BOLD));
        assert!(visuals.label.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_focus_changes_background() {
        let theme = Theme::light();
        let option = PersonalizeOption::new("Current experience", false);
        assert_eq!(toggle_visuals(&option, false, true, &theme).background, theme.focus_bg);
        assert_eq!(toggle_visuals(&option, false, false, &theme).background, theme.surface);
    }

    #[test]
    fn test_switch_thumb_turns_green_when_on() {
        let theme = Theme::light();
        let on = switch_visuals(true, false, &theme);
        assert_eq!(on.thumb.fg, Some(theme.accent));
        assert_eq!(on.label.fg, Some(theme.on_accent));

        let off = switch_visuals(false, false, &theme);
        assert_eq!(off.thumb.fg, Some(theme.background));
    }
}
