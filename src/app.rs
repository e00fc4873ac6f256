use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use crate::catalog::Section;
use crate::config::Config;
use crate::dialog::{Dialog, Focus};
use crate::ui::hit_map::{Hit, HitMap};
use crate::ui::layout::GridLayout;
use crate::ui::theme::Theme;
use crate::ui::transition::{Fade, FadeDirection};

/// Visibility of the personalization dialog
#[derive(Debug)]
pub enum ModalState {
    Closed,
    /// The open dialog owns every toggle state
    Open(Dialog),
}

/// What the event loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// Open/closed state of the dialog
    modal: ModalState,
    /// Running fade, in or out
    fade: Option<Fade>,
    /// Dialog still painted while it fades out; never receives input
    fading_out: Option<Dialog>,
    /// Sections handed to every new dialog
    sections: Vec<Section>,
    config: Config,
    theme: Theme,
    /// Clickable regions from the last frame
    hit_map: HitMap,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Self {
        let sections = config.sections();
        Self {
            modal: ModalState::Closed,
            fade: None,
            fading_out: None,
            sections,
            config,
            theme,
            hit_map: HitMap::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.dialog().is_some()
    }

    /// The open dialog, if any
    pub fn dialog(&self) -> Option<&Dialog> {
        match &self.modal {
            ModalState::Open(dialog) => Some(dialog),
            ModalState::Closed => None,
        }
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        match &mut self.modal {
            ModalState::Open(dialog) => Some(dialog),
            ModalState::Closed => None,
        }
    }

    /// Dialog to paint at `now` and how opaque it is.
    /// The bool is true when the dialog accepts input.
    pub fn visible_dialog(&self, now: Instant) -> Option<(&Dialog, f32, bool)> {
        let opacity = self.fade.map(|f| f.opacity(now)).unwrap_or(1.0);
        match (&self.modal, &self.fading_out) {
            (ModalState::Open(dialog), _) => Some((dialog, opacity, true)),
            (ModalState::Closed, Some(dialog)) => Some((dialog, opacity, false)),
            (ModalState::Closed, None) => None,
        }
    }

    /// Closed -> Open. A fresh dialog starts with everything unchecked.
    pub fn open(&mut self, now: Instant) {
        if self.is_open() {
            return;
        }
        tracing::info!("Opening personalization settings");
        self.fading_out = None;
        let grid = GridLayout::new(self.config.modal.columns);
        self.modal = ModalState::Open(Dialog::new(&self.sections).with_grid(grid));
        self.fade = Some(Fade::new(
            FadeDirection::In,
            now,
            self.config.modal.fade_duration(),
        ));
    }

    /// Open -> Closed. The dialog and all its toggle state are dropped once
    /// the fade-out finishes; input is refused from this point on.
    pub fn close(&mut self, now: Instant) {
        let ModalState::Open(dialog) = std::mem::replace(&mut self.modal, ModalState::Closed) else {
            return;
        };
        let selected = dialog.toggle_states().filter(|checked| *checked).count();
        tracing::info!("Closing personalization settings ({} selected)", selected);
        self.fading_out = Some(dialog);
        self.fade = Some(Fade::new(
            FadeDirection::Out,
            now,
            self.config.modal.fade_duration(),
        ));
    }

    /// Retire a finished fade
    pub fn tick(&mut self, now: Instant) {
        if self.fade.is_some_and(|f| f.is_finished(now)) {
            self.fade = None;
            self.fading_out = None;
        }
    }

    /// A fade is still running
    pub fn is_animating(&self, now: Instant) -> bool {
        self.fade.is_some_and(|f| !f.is_finished(now))
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Control::Quit;
        }

        if !self.is_open() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Control::Quit,
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => {
                    self.open(now);
                    Control::Continue
                }
                _ => Control::Continue,
            };
        }
        if key.code == KeyCode::Esc {
            self.close(now);
            return Control::Continue;
        }

        let Some(dialog) = self.dialog_mut() else {
            return Control::Continue;
        };
        match key.code {
            KeyCode::Tab => dialog.focus_next(),
            KeyCode::BackTab => dialog.focus_prev(),
            KeyCode::Up | KeyCode::Char('k') => dialog.focus_up(),
            KeyCode::Down | KeyCode::Char('j') => dialog.focus_down(),
            KeyCode::Left | KeyCode::Char('h') => dialog.focus_left(),
            KeyCode::Right | KeyCode::Char('l') => dialog.focus_right(),
            KeyCode::Enter | KeyCode::Char(' ') => dialog.activate_focused(),
            _ => {}
        }
        Control::Continue
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(hit) = self.hit_map.hit(mouse.column, mouse.row) else {
            return;
        };

        match hit {
            Hit::Trigger => self.open(now),
            Hit::Close | Hit::Backdrop => self.close(now),
            Hit::ResearchSwitch => {
                if let Some(dialog) = self.dialog_mut() {
                    dialog.set_focus(Focus::ResearchSwitch);
                    dialog.toggle_research();
                }
            }
            Hit::Option(focus) => {
                if let Some(dialog) = self.dialog_mut() {
                    dialog.set_focus(focus);
                    dialog.activate_focused();
                }
            }
            Hit::Dialog => {}
        }
    }

    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
