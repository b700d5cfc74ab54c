//! Colour palettes for the light and dark themes.

use ratatui::style::Color;
use tradelog_config::Theme;

/// Colours used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Surface behind every panel
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// Curve, focused borders
    pub accent: Color,
    /// Gains
    pub positive: Color,
    /// Losses, warnings
    pub negative: Color,
    /// Axes, hints
    pub muted: Color,
}

impl Palette {
    /// Palette for a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(255, 255, 255),
                text: Color::Rgb(0, 0, 0),
                accent: Color::Rgb(31, 119, 180),
                positive: Color::Rgb(0, 128, 0),
                negative: Color::Rgb(200, 0, 0),
                muted: Color::Rgb(110, 110, 110),
            },
            Theme::Dark => Self {
                background: Color::Rgb(46, 46, 46),
                text: Color::Rgb(255, 255, 255),
                accent: Color::Rgb(0, 200, 255),
                positive: Color::Rgb(0, 255, 128),
                negative: Color::Rgb(255, 80, 120),
                muted: Color::Rgb(150, 150, 160),
            },
        }
    }

    /// Green for gains, red for losses.
    pub fn signed(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backgrounds_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light, Palette::default());
    }

    #[test]
    fn test_signed_colour() {
        let palette = Palette::default();
        assert_eq!(palette.signed(1.0), palette.positive);
        assert_eq!(palette.signed(0.0), palette.positive);
        assert_eq!(palette.signed(-0.5), palette.negative);
    }
}
