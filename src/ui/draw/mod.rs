//! Drawing functions for the TUI
//!
//! - `root` - Trigger button and status bar
//! - `modal` - Personalization dialog

mod modal;
mod root;

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};
use std::time::Instant;

use crate::app::App;
use crate::ui::hit_map::HitMap;
use crate::ui::host::ThemeHost;
use crate::ui::layout::Viewport;
use crate::ui::option_toggle::Markers;
use crate::ui::transition::{blend, fade_area};

use modal::{draw_dialog, DialogFrame};
use root::{draw_status_bar, draw_trigger};

/// How far the backdrop is tinted toward the overlay color at full opacity
const OVERLAY_STRENGTH: f32 = 0.55;

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let hit_map = {
        let app = &*app;
        let modal_config = &app.config().modal;
        let appearance = &app.config().appearance;

        ThemeHost::new(app.theme()).provide(f, |f, area, theme| {
            let viewport = Viewport::new(area, modal_config.cell_width_px);
            let compact = viewport.is_compact(modal_config.compact_max_width_px);
            let [content, status] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

            let mut hit_map = HitMap {
                trigger: Some(draw_trigger(f, content, theme)),
                ..Default::default()
            };
            // A compact dialog takes the status row too
            let mut status_covered = false;

            if let Some((dialog, opacity, interactive)) = app.visible_dialog(now) {
                let dim = OVERLAY_STRENGTH * opacity;
                fade_area(f.buffer_mut(), area, theme.overlay, dim);

                status_covered = compact;
                let frame = DialogFrame {
                    screen: if compact { area } else { content },
                    compact,
                    panel_width: modal_config.panel_width,
                    markers: Markers {
                        checked: &appearance.checked_marker,
                        unchecked: &appearance.unchecked_marker,
                    },
                };
                let regions = draw_dialog(f, dialog, &frame, theme);

                let backdrop = blend(theme.background, theme.overlay, dim);
                fade_area(f.buffer_mut(), regions.area, backdrop, 1.0 - opacity);

                if interactive {
                    hit_map.dialog = Some(regions.area);
                    hit_map.close = Some(regions.close);
                    hit_map.switch = Some(regions.switch);
                    hit_map.options = regions.options;
                }
            }

            if !status_covered {
                draw_status_bar(f, status, app.is_open(), theme);
            }
            hit_map
        })
    };
    app.set_hit_map(hit_map);
}
