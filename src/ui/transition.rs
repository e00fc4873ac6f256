//! Fade transition for the dialog.
//!
//! A terminal has no alpha channel, so a fade is drawn by blending every
//! cell of the faded area toward a backdrop color.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// A running fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    pub direction: FadeDirection,
    started: Instant,
    duration: Duration,
}

impl Fade {
    pub fn new(direction: FadeDirection, started: Instant, duration: Duration) -> Self {
        Self {
            direction,
            started,
            duration,
        }
    }

    /// 0.0 at start, 1.0 once `duration` has elapsed
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// How visible the dialog is: 0.0 hidden, 1.0 fully shown
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.direction {
            FadeDirection::In => self.progress(now),
            FadeDirection::Out => 1.0 - self.progress(now),
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Linear blend of two colors; `t = 0.0` keeps `from`, `t = 1.0` gives `to`.
/// Non-RGB colors snap at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}

/// Blend every cell in `area` toward `toward` by `amount`
pub fn fade_area(buf: &mut Buffer, area: Rect, toward: Color, amount: f32) {
    if amount <= 0.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = blend(cell.fg, toward, amount);
                let bg = blend(cell.bg, toward, amount);
                cell.set_fg(fg).set_bg(bg);
            }
        }
    }
}
