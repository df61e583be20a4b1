use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Fixed palette entries shared by both themes
pub mod palette {
    use eframe::egui::Color32;

    pub const OFF_WHITE: Color32 = Color32::from_rgb(0xf8, 0xf8, 0xf8);
    pub const DARK_GREY: Color32 = Color32::from_rgb(0x48, 0x48, 0x48);
    pub const MONEY_YELLOW: Color32 = Color32::from_rgb(0xe8, 0xe8, 0xa8);
    pub const MONEY_SHADOW: Color32 = Color32::from_rgb(0xa0, 0xa0, 0x60);
}

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Default,
    Legacy,
}

impl ThemePreset {
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            ThemePreset::Legacy
        } else {
            ThemePreset::Default
        }
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Default => Theme::dark(),
            ThemePreset::Legacy => Theme::legacy(),
        }
    }
}

/// Text styles used by title screen labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Speech bubble and changelog text
    WindowAlt,
    /// Player count and message box text
    Message,
    /// Splash caption
    Money,
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub preset: ThemePreset,

    pub background: Color32,
    /// Tint behind the title option list
    pub menu_overlay: Color32,
    pub message_bg: Color32,
    pub bubble_fill: Color32,
    pub bubble_border: Color32,

    // Text colors
    pub window_alt_text: Color32,
    pub window_alt_shadow: Color32,
    pub message_text: Color32,
    pub message_shadow: Color32,

    pub accent: Color32,
}

impl Theme {
    /// Default dark theme
    pub fn dark() -> Self {
        Self {
            preset: ThemePreset::Default,
            background: Color32::from_rgb(24, 40, 56),
            menu_overlay: palette::DARK_GREY,
            message_bg: Color32::from_rgb(40, 48, 64),
            bubble_fill: Color32::from_rgb(248, 248, 248),
            bubble_border: Color32::from_rgb(64, 64, 64),

            window_alt_text: Color32::from_rgb(72, 72, 72),
            window_alt_shadow: Color32::from_rgb(208, 208, 200),
            message_text: palette::OFF_WHITE,
            message_shadow: Color32::from_rgb(110, 110, 110),

            accent: Color32::from_rgb(245, 158, 11),
        }
    }

    /// Legacy light theme
    pub fn legacy() -> Self {
        Self {
            preset: ThemePreset::Legacy,
            background: Color32::from_rgb(200, 216, 232),
            menu_overlay: palette::OFF_WHITE,
            message_bg: Color32::from_rgb(232, 232, 216),
            bubble_fill: Color32::WHITE,
            bubble_border: Color32::from_rgb(96, 96, 96),

            window_alt_text: Color32::from_rgb(72, 72, 72),
            window_alt_shadow: Color32::from_rgb(208, 208, 200),
            message_text: Color32::from_rgb(64, 64, 64),
            message_shadow: Color32::from_rgb(200, 200, 200),

            accent: Color32::from_rgb(200, 100, 40),
        }
    }

    /// Foreground and drop-shadow colors for a text style
    pub fn text_colors(&self, style: TextStyle) -> (Color32, Color32) {
        match style {
            TextStyle::WindowAlt => (self.window_alt_text, self.window_alt_shadow),
            TextStyle::Message => (self.message_text, self.message_shadow),
            TextStyle::Money => (palette::MONEY_YELLOW, palette::MONEY_SHADOW),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self.preset {
            ThemePreset::Default => Visuals::dark(),
            ThemePreset::Legacy => Visuals::light(),
        };

        visuals.window_fill = self.message_bg;
        visuals.panel_fill = self.background;
        visuals.hyperlink_color = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}
