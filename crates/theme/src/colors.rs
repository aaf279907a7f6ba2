/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const INDIGO_50:  Self = Self { r: 0.933, g: 0.949, b: 1.0,   a: 1.0 }; // #eef2ff
    pub const WHITE:      Self = Self { r: 1.0,   g: 1.0,   b: 1.0,   a: 1.0 }; // #ffffff
    pub const GRAY_50:    Self = Self { r: 0.976, g: 0.980, b: 0.984, a: 1.0 }; // #f9fafb
    pub const GRAY_200:   Self = Self { r: 0.898, g: 0.906, b: 0.922, a: 1.0 }; // #e5e7eb
    pub const GRAY_500:   Self = Self { r: 0.420, g: 0.447, b: 0.502, a: 1.0 }; // #6b7280
    pub const GRAY_800:   Self = Self { r: 0.122, g: 0.161, b: 0.216, a: 1.0 }; // #1f2937
    pub const INDIGO_600: Self = Self { r: 0.310, g: 0.275, b: 0.898, a: 1.0 }; // #4f46e5
    pub const RED_500:    Self = Self { r: 0.937, g: 0.267, b: 0.267, a: 1.0 }; // #ef4444

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |i: usize| -> Option<f32> {
            u8::from_str_radix(hex.get(i..i + 2)?, 16)
                .ok()
                .map(|b| b as f32 / 255.0)
        };

        match hex.len() {
            6 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: 1.0 }),
            8 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Linear blend towards `other` by `t` (0 = self, 1 = other).
    #[must_use]
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb() {
        let c = Color::from_hex("#4f46e5").unwrap();
        assert!((c.r - 79.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 70.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 229.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn parse_rgba() {
        let c = Color::from_hex("ffffff80").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn reject_bad_hex() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn mix_endpoints() {
        let a = Color::WHITE;
        let b = Color::GRAY_800;
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }
}
