//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Frame drawing (root view, dialog)
//! - `host.rs` - Theme host, resets every frame
//! - `theme.rs` - Color themes and presets
//! - `style.rs` - Pure visual rules for toggles and the switch
//! - `layout.rs` - Grid, viewport and dialog placement
//! - `option_toggle.rs` - Option toggle widget
//! - `transition.rs` - Fade in/out
//! - `hit_map.rs` - Mouse hit testing

mod draw;
pub mod hit_map;
pub mod host;
pub mod layout;
pub mod option_toggle;
pub mod style;
pub mod theme;
pub mod transition;

#[cfg(test)]
pub mod test_utils;

// Re-export main draw function
pub use draw::draw;
