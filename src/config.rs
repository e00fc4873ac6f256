use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{Catalog, PersonalizeOption, Section};
use crate::ui::theme::{parse_hex_color, Theme, ThemeError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub modal: ModalConfig,
    /// Replaces the built-in "Profile:" / "Account:" sections when non-empty
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset: "light" or "dark"
    pub theme: String,
    /// Accent override as hex (#rrggbb)
    pub accent: Option<String>,
    pub checked_marker: String,
    pub unchecked_marker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Viewports at or below this width (logical pixels) get a full-screen dialog
    pub compact_max_width_px: u32,
    /// Logical pixels per terminal column
    pub cell_width_px: u32,
    /// Dialog width in columns when not compact
    pub panel_width: u16,
    /// Option grid columns per section
    pub columns: u16,
    /// Fade in/out duration
    pub fade_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub title: String,
    #[serde(default)]
    pub options: Vec<PersonalizeOption>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            accent: None,
            checked_marker: "[x]".to_string(),
            unchecked_marker: "[ ]".to_string(),
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            compact_max_width_px: 680,
            cell_width_px: 8,
            panel_width: 84,
            columns: 2,
            fade_ms: 200,
        }
    }
}

impl ModalConfig {
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// `$XDG_CONFIG_HOME/personalize/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("personalize")
            .join("config.toml")
    }

    /// Resolve the theme preset and apply the accent override
    pub fn resolve_theme(&self) -> Result<Theme, ThemeError> {
        let mut theme = Theme::from_preset(&self.appearance.theme)
            .ok_or_else(|| ThemeError::UnknownPreset(self.appearance.theme.clone()))?;
        if let Some(ref accent) = self.appearance.accent {
            theme.accent = parse_hex_color(accent)?;
        }
        Ok(theme)
    }

    /// Sections to render, one catalog per configured section
    pub fn sections(&self) -> Vec<Section> {
        if self.sections.is_empty() {
            return Section::defaults();
        }
        self.sections
            .iter()
            .map(|s| Section::new(s.title.clone(), Catalog::new(s.options.clone())))
            .collect()
    }
}
