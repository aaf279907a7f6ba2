pub mod colors;
pub mod style;

pub use colors::Color;

use avg_config::ThemeConfig;
use avg_core::NumberCategory;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible; invalid color strings fall
/// back to the built-in palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:    Color,
    pub surface:       Color,
    pub foreground:    Color,
    pub muted:         Color,
    pub accent:        Color,
    pub error:         Color,
    pub font_size:     f32,
    pub border_radius: f32,
    pub padding:       u16,
    pub gap:           u16,
    /// When `true`, category buttons show Unicode glyphs.  `false` → ASCII.
    pub use_glyph_icons: bool,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background:    Color::from_hex(&cfg.background).unwrap_or(Color::INDIGO_50),
            surface:       Color::from_hex(&cfg.surface).unwrap_or(Color::WHITE),
            foreground:    Color::from_hex(&cfg.foreground).unwrap_or(Color::GRAY_800),
            muted:         Color::from_hex(&cfg.muted).unwrap_or(Color::GRAY_500),
            accent:        Color::from_hex(&cfg.accent).unwrap_or(Color::INDIGO_600),
            error:         Color::from_hex(&cfg.error).unwrap_or(Color::RED_500),
            font_size:     cfg.font_size,
            border_radius: cfg.border_radius,
            padding:       cfg.padding,
            gap:           cfg.gap,
            use_glyph_icons: cfg.icon_style.to_lowercase() != "ascii",
        }
    }

    /// Icon shown next to a category label.
    pub fn category_icon(&self, category: NumberCategory) -> &'static str {
        if !self.use_glyph_icons {
            return match category {
                NumberCategory::Prime     => "#",
                NumberCategory::Fibonacci => "~",
                NumberCategory::Even      => "=",
                NumberCategory::Random    => "?",
            };
        }
        match category {
            NumberCategory::Prime     => "#",
            NumberCategory::Fibonacci => "∞",
            NumberCategory::Even      => "÷",
            NumberCategory::Random    => "⚀",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colors_fall_back() {
        let cfg = ThemeConfig {
            accent: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&cfg).accent, Color::INDIGO_600);
    }

    #[test]
    fn ascii_icon_style() {
        let cfg = ThemeConfig {
            icon_style: "ASCII".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert!(!theme.use_glyph_icons);
        for category in NumberCategory::ALL {
            assert!(theme.category_icon(category).is_ascii());
        }
    }
}
