//! Screen regions of clickable controls, recorded while drawing

use ratatui::layout::{Position, Rect};

use crate::dialog::Focus;

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Trigger,
    Close,
    ResearchSwitch,
    Option(Focus),
    /// Inside the dialog but not on a control
    Dialog,
    /// Outside the dialog while it is open
    Backdrop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub trigger: Option<Rect>,
    pub dialog: Option<Rect>,
    pub close: Option<Rect>,
    pub switch: Option<Rect>,
    pub options: Vec<(Rect, Focus)>,
}

impl HitMap {
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        let inside = |rect: &Option<Rect>| rect.is_some_and(|r| r.contains(pos));

        let Some(dialog) = self.dialog else {
            return inside(&self.trigger).then_some(Hit::Trigger);
        };

        if !dialog.contains(pos) {
            return Some(Hit::Backdrop);
        }
        if inside(&self.close) {
            return Some(Hit::Close);
        }
        if inside(&self.switch) {
            return Some(Hit::ResearchSwitch);
        }
        let option = self
            .options
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, focus)| Hit::Option(*focus));
        Some(option.unwrap_or(Hit::Dialog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_only_when_closed() {
        let map = HitMap {
            trigger: Some(Rect::new(10, 5, 20, 3)),
            ..Default::default()
        };
        assert_eq!(map.hit(12, 6), Some(Hit::Trigger));
        assert_eq!(map.hit(0, 0), None);
    }

    #[test]
    fn test_open_dialog_regions() {
        let focus = Focus::Option { section: 0, index: 1 };
        let map = HitMap {
            trigger: Some(Rect::new(10, 5, 20, 3)),
            dialog: Some(Rect::new(5, 2, 40, 20)),
            close: Some(Rect::new(40, 3, 3, 1)),
            switch: Some(Rect::new(20, 3, 18, 1)),
            options: vec![(Rect::new(8, 8, 15, 1), focus)],
        };
        assert_eq!(map.hit(0, 0), Some(Hit::Backdrop));
        assert_eq!(map.hit(41, 3), Some(Hit::Close));
        assert_eq!(map.hit(25, 3), Some(Hit::ResearchSwitch));
        assert_eq!(map.hit(10, 8), Some(Hit::Option(focus)));
        // The trigger sits under the dialog and is not reachable
        assert_eq!(map.hit(12, 6), Some(Hit::Dialog));
    }
}
