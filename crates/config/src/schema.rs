use avg_core::{NumberCategory, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `avg.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvgConfig {
    /// Window geometry and start-up selection.
    pub global: GlobalConfig,
    /// Sliding-window settings.
    pub averager: AveragerConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Global application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Initial window width in logical pixels.
    pub width: f32,
    /// Initial window height in logical pixels.
    pub height: f32,
    /// Category highlighted on start-up.
    pub category: NumberCategory,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            width:    900.0,
            height:   720.0,
            category: NumberCategory::default(),
        }
    }
}

/// Sliding-window settings.  Read once at start-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AveragerConfig {
    /// Maximum number of samples kept; must be at least 1.
    pub capacity: usize,
}

impl Default for AveragerConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Page background color (hex, e.g. `"#eef2ff"`).
    pub background: String,
    /// Card background color.
    pub surface: String,
    /// Primary text color.
    pub foreground: String,
    /// Secondary text (headings, descriptions).
    pub muted: String,
    /// Accent / highlight color.
    pub accent: String,
    /// Inline error text color.
    pub error: String,
    /// Base font size in points.
    pub font_size: f32,
    /// Corner radius for cards and buttons (pixels).
    pub border_radius: f32,
    /// Inner padding for each card (pixels).
    pub padding: u16,
    /// Gap between elements (pixels).
    pub gap: u16,
    /// `"glyph"` for Unicode category icons, `"ascii"` for plain letters.
    pub icon_style: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:    "#eef2ff".to_string(), // indigo-50
            surface:       "#ffffff".to_string(),
            foreground:    "#1f2937".to_string(), // gray-800
            muted:         "#6b7280".to_string(), // gray-500
            accent:        "#4f46e5".to_string(), // indigo-600
            error:         "#ef4444".to_string(), // red-500
            font_size:     15.0,
            border_radius: 12.0,
            padding:       24,
            gap:           16,
            icon_style:    "glyph".to_string(),
        }
    }
}
