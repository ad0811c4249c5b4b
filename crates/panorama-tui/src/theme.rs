use panorama_core::ThemeMode;
use ratatui::style::Color;

/// Runtime palette
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,

    // Background colors
    pub bg0: Color,
    pub bg1: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    /// Active nav item and progress fill
    pub accent: Color,
    /// Unfilled progress track
    pub track: Color,
}

impl Theme {
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Near-black canvas with a red accent
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            bg0: Color::Rgb(0x0a, 0x0a, 0x0a),
            bg1: Color::Rgb(0x16, 0x16, 0x16),
            fg0: Color::Rgb(0xed, 0xea, 0xd8),
            fg1: Color::Rgb(0xc8, 0xc5, 0xb5),
            grey0: Color::Rgb(0x5c, 0x5c, 0x5c),
            grey1: Color::Rgb(0x8a, 0x8a, 0x8a),
            accent: Color::Rgb(0xdc, 0x26, 0x26),
            track: Color::Rgb(0x1f, 0x1f, 0x1f),
        }
    }

    /// Paper canvas with a blue accent
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            bg0: Color::Rgb(0xf5, 0xf3, 0xec),
            bg1: Color::Rgb(0xeb, 0xe8, 0xdf),
            fg0: Color::Rgb(0x11, 0x11, 0x11),
            fg1: Color::Rgb(0x33, 0x33, 0x33),
            grey0: Color::Rgb(0xa0, 0x9d, 0x94),
            grey1: Color::Rgb(0x6e, 0x6b, 0x63),
            accent: Color::Rgb(0x25, 0x63, 0xeb),
            track: Color::Rgb(0xdd, 0xd9, 0xce),
        }
    }

    pub fn toggled(&self) -> Self {
        Self::from_mode(self.mode.toggled())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
