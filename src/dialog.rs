//! Personalization dialog state.
//!
//! A [`Dialog`] exists only while the modal is open. Every toggle state and
//! the research switch live inside it, so dropping the dialog on close is
//! what resets them for the next open.

use crate::catalog::{PersonalizeOption, Section};
use crate::ui::layout::GridLayout;

/// Checked state of one rendered option
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    checked: bool,
    disabled: bool,
}

impl Toggle {
    pub fn new(disabled: bool) -> Self {
        Self {
            checked: false,
            disabled,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flip the checked state. Disabled toggles refuse and return false.
    pub fn activate(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.checked = !self.checked;
        true
    }
}

/// A section plus the toggles rendered from its catalog
#[derive(Debug, Clone)]
pub struct SectionState {
    section: Section,
    toggles: Vec<Toggle>,
}

impl SectionState {
    fn new(section: &Section) -> Self {
        let toggles = section
            .catalog
            .options()
            .iter()
            .map(|o| Toggle::new(o.disabled))
            .collect();
        Self {
            section: section.clone(),
            toggles,
        }
    }

    pub fn title(&self) -> &str {
        &self.section.title
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    /// Option `index` paired with its toggle state
    pub fn item(&self, index: usize) -> Option<(&PersonalizeOption, Toggle)> {
        Some((self.section.catalog.get(index)?, *self.toggles.get(index)?))
    }
}

/// Which control inside the dialog has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// "Use Account Research" header switch
    ResearchSwitch,
    /// Option `index` of section `section`
    Option { section: usize, index: usize },
}

/// The open dialog
#[derive(Debug, Clone)]
pub struct Dialog {
    sections: Vec<SectionState>,
    research: bool,
    focus: Focus,
    grid: GridLayout,
}

impl Dialog {
    pub fn new(sections: &[Section]) -> Self {
        Self {
            sections: sections.iter().map(SectionState::new).collect(),
            research: false,
            focus: Focus::ResearchSwitch,
            grid: GridLayout::default(),
        }
    }

    /// Lay the option grids out with `grid` instead of two columns
    pub fn with_grid(mut self, grid: GridLayout) -> Self {
        self.grid = grid;
        self
    }

    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    pub fn grid(&self) -> GridLayout {
        self.grid
    }

    /// Checked state of one option, None if out of range
    #[cfg(test)]
    pub fn is_checked(&self, section: usize, index: usize) -> Option<bool> {
        self.sections
            .get(section)?
            .toggles
            .get(index)
            .map(Toggle::is_checked)
    }

    /// Every toggle state in render order
    pub fn toggle_states(&self) -> impl Iterator<Item = bool> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.toggles.iter().map(Toggle::is_checked))
    }

    /// Toggle one option. Returns whether the state changed.
    pub fn activate_option(&mut self, section: usize, index: usize) -> bool {
        let Some(state) = self.sections.get_mut(section) else {
            return false;
        };
        let Some(toggle) = state.toggles.get_mut(index) else {
            return false;
        };
        let name = &state.section.catalog.options()[index].name;

        if toggle.activate() {
            tracing::debug!(
                "{} {} -> {}",
                state.section.title,
                name,
                toggle.is_checked()
            );
            true
        } else {
            tracing::debug!("{} {} is disabled, ignoring", state.section.title, name);
            false
        }
    }

    pub fn research_enabled(&self) -> bool {
        self.research
    }

    pub fn toggle_research(&mut self) {
        self.research = !self.research;
        tracing::debug!("Use Account Research -> {}", self.research);
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move focus to `focus` if it names an existing control
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focusables().contains(&focus) {
            self.focus = focus;
        }
    }

    /// Activate whatever has focus
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::ResearchSwitch => self.toggle_research(),
            Focus::Option { section, index } => {
                self.activate_option(section, index);
            }
        }
    }

    /// All focusable controls in tab order
    fn focusables(&self) -> Vec<Focus> {
        let mut list = vec![Focus::ResearchSwitch];
        for (section, state) in self.sections.iter().enumerate() {
            list.extend((0..state.len()).map(|index| Focus::Option { section, index }));
        }
        list
    }

    fn cycle_focus(&mut self, forward: bool) {
        let list = self.focusables();
        let current = list.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            self.grid.tab_next(current, list.len())
        } else {
            self.grid.tab_prev(current, list.len())
        };
        self.focus = list[next];
    }

    /// Tab
    pub fn focus_next(&mut self) {
        self.cycle_focus(true);
    }

    /// Shift+Tab
    pub fn focus_prev(&mut self) {
        self.cycle_focus(false);
    }

    pub fn focus_down(&mut self) {
        self.focus = match self.focus {
            Focus::ResearchSwitch => self
                .next_section_entry(0, 0)
                .unwrap_or(Focus::ResearchSwitch),
            Focus::Option { section, index } => {
                let len = self.sections[section].len();
                match self.grid.move_down(index, len) {
                    Some(index) => Focus::Option { section, index },
                    None => {
                        let col = self.grid.index_to_position(index).1;
                        self.next_section_entry(section + 1, col)
                            .unwrap_or(self.focus)
                    }
                }
            }
        };
    }

    pub fn focus_up(&mut self) {
        self.focus = match self.focus {
            Focus::ResearchSwitch => Focus::ResearchSwitch,
            Focus::Option { section, index } => match self.grid.move_up(index) {
                Some(index) => Focus::Option { section, index },
                None => {
                    let col = self.grid.index_to_position(index).1;
                    self.prev_section_entry(section, col)
                        .unwrap_or(Focus::ResearchSwitch)
                }
            },
        };
    }

    pub fn focus_left(&mut self) {
        if let Focus::Option { section, index } = self.focus {
            self.focus = Focus::Option {
                section,
                index: self.grid.move_left(index),
            };
        }
    }

    pub fn focus_right(&mut self) {
        if let Focus::Option { section, index } = self.focus {
            let len = self.sections[section].len();
            self.focus = Focus::Option {
                section,
                index: self.grid.move_right(index, len),
            };
        }
    }

    /// First row of the first non-empty section at or after `from`
    fn next_section_entry(&self, from: usize, col: usize) -> Option<Focus> {
        self.sections
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(section, state)| {
                self.grid
                    .first_row_at(col, state.len())
                    .map(|index| Focus::Option { section, index })
            })
    }

    /// Last row of the closest non-empty section before `before`
    fn prev_section_entry(&self, before: usize, col: usize) -> Option<Focus> {
        self.sections[..before]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(section, state)| {
                self.grid
                    .last_row_at(col, state.len())
                    .map(|index| Focus::Option { section, index })
            })
    }
}
