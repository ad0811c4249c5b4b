use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            scroll: ScrollConfig::default(),
            ui: UiConfig::default(),
            keymap: KeymapConfig::default(),
            sections: default_sections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Smooth horizontal scroll parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Fraction of the remaining distance covered per frame (0, 1]
    #[serde(default = "default_convergence_rate")]
    pub convergence_rate: f64,
    /// Distance below which the animation snaps to its target
    #[serde(default = "default_settle_threshold")]
    pub settle_threshold: f64,
    /// Frames per second while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            convergence_rate: default_convergence_rate(),
            settle_threshold: default_settle_threshold(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Offset units added per mouse wheel notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,
    /// Initial color scheme
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            wheel_step: default_wheel_step(),
            theme: ThemeMode::default(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "L" (Shift+l), "<C-c>" (Ctrl+c), "<Tab>", "<S-Tab>", "<Left>"
/// Digits 1-9 always jump to the corresponding section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Scroll the strip left by half a screen
    #[serde(default = "default_key_scroll_left")]
    pub scroll_left: String,
    /// Scroll the strip right by half a screen
    #[serde(default = "default_key_scroll_right")]
    pub scroll_right: String,
    /// Navigate to the section after the active one
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Navigate to the section before the active one
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Navigate to the first section
    #[serde(default = "default_key_first_section")]
    pub first_section: String,
    /// Navigate to the last section
    #[serde(default = "default_key_last_section")]
    pub last_section: String,
    /// Switch between dark and light themes
    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_left: default_key_scroll_left(),
            scroll_right: default_key_scroll_right(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            first_section: default_key_first_section(),
            last_section: default_key_last_section(),
            toggle_theme: default_key_toggle_theme(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_left() -> String { "h".to_string() }
fn default_key_scroll_right() -> String { "l".to_string() }
fn default_key_next_section() -> String { "<Tab>".to_string() }
fn default_key_prev_section() -> String { "<S-Tab>".to_string() }
fn default_key_first_section() -> String { "H".to_string() }
fn default_key_last_section() -> String { "L".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }

/// One panel of the horizontal strip, in left-to-right order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Unique identifier used for navigation
    pub key: String,
    /// Label shown in the navigation bar
    pub title: String,
    /// Panel width in columns
    #[serde(default = "default_section_width")]
    pub width: u16,
    /// Body text rendered inside the panel
    #[serde(default)]
    pub body: String,
}

impl SectionConfig {
    fn new(key: &str, title: &str, width: u16, body: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            width,
            body: body.to_string(),
        }
    }
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new(
            "hero",
            "Hero",
            100,
            "Independent creative unit. Designer and software developer.",
        ),
        SectionConfig::new(
            "development",
            "Development",
            140,
            "Web applications, tooling and interactive experiments.",
        ),
        SectionConfig::new(
            "digital-arts",
            "Digital Arts",
            120,
            "3D renders, generative pieces and illustration.",
        ),
        SectionConfig::new(
            "visual-identity",
            "Visual Identity",
            120,
            "UI/UX, logos and icons, print and branding.",
        ),
        SectionConfig::new(
            "motion",
            "Motion",
            100,
            "Title sequences, loops and animated identities.",
        ),
        SectionConfig::new(
            "about",
            "About",
            110,
            "Overview, timeline and resume.",
        ),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_convergence_rate() -> f64 {
    0.14
}

fn default_settle_threshold() -> f64 {
    0.5
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_wheel_step() -> f64 {
    6.0 // ~one panel per 20 notches at default widths
}

fn default_section_width() -> u16 {
    100
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/panorama/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("panorama")
            .join("config.toml")
    }

    /// Reject values the scroll controller cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let rate = self.scroll.convergence_rate;
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(crate::Error::Config(format!(
                "scroll.convergence_rate must be in (0, 1], got {}",
                rate
            )));
        }
        if !(self.scroll.settle_threshold > 0.0) {
            return Err(crate::Error::Config(format!(
                "scroll.settle_threshold must be positive, got {}",
                self.scroll.settle_threshold
            )));
        }
        if !(self.ui.wheel_step > 0.0) {
            return Err(crate::Error::Config(format!(
                "ui.wheel_step must be positive, got {}",
                self.ui.wheel_step
            )));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.key.trim().is_empty() {
                return Err(crate::Error::Config("section key must not be empty".into()));
            }
            if !seen.insert(section.key.as_str()) {
                return Err(crate::Error::Config(format!(
                    "duplicate section key: {}",
                    section.key
                )));
            }
        }

        Ok(())
    }

    /// Look up a section by key
    pub fn section(&self, key: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.key == key)
    }
}
