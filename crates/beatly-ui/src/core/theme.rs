//! Brand palette and theme tokens for the Beatly client.
//!
//! Styling is a swappable concern: components render one markup tree and the
//! active [`ThemeMode`] selects the palette through a CSS dataset attribute,
//! so no screen logic is ever duplicated per visual revision.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade.
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades.
    pub shades: &'static [ColorToken],
}

/// Primary brand palette (Beatly yellow).
pub const PRIMARY: Palette = Palette {
    id: "primary",
    shades: &[
        ColorToken { name: "100", hex: "#FFF9DB" },
        ColorToken { name: "300", hex: "#FFE98A" },
        ColorToken { name: "500", hex: "#FFD700" },
        ColorToken { name: "600", hex: "#FFC107" },
        ColorToken { name: "700", hex: "#C79A00" },
    ],
};

/// Neutral palette for light surfaces and text.
pub const NEUTRALS_LIGHT: Palette = Palette {
    id: "neutral",
    shades: &[
        ColorToken { name: "surface", hex: "#FFFFFF" },
        ColorToken { name: "surface-raised", hex: "#FFFBEB" },
        ColorToken { name: "border", hex: "#E5E0CC" },
        ColorToken { name: "text-primary", hex: "#333333" },
        ColorToken { name: "text-muted", hex: "#6B6B6B" },
    ],
};

/// Neutral palette for dark surfaces and text.
pub const NEUTRALS_DARK: Palette = Palette {
    id: "dark",
    shades: &[
        ColorToken { name: "surface", hex: "#0F172A" },
        ColorToken { name: "surface-raised", hex: "#1E293B" },
        ColorToken { name: "border", hex: "#334155" },
        ColorToken { name: "text-primary", hex: "#F8FAFC" },
        ColorToken { name: "text-muted", hex: "#94A3B8" },
    ],
};

/// Error feedback palette.
pub const ERROR: Palette = Palette {
    id: "error",
    shades: &[
        ColorToken { name: "100", hex: "#FCE6EE" },
        ColorToken { name: "500", hex: "#C43A61" },
        ColorToken { name: "700", hex: "#8E2643" },
    ],
};

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and persistence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode, for toggle controls.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a persisted identifier, defaulting to light.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ERROR, NEUTRALS_DARK, NEUTRALS_LIGHT, PRIMARY, ThemeMode};

    #[test]
    fn both_neutral_palettes_expose_the_same_token_names() {
        let light: Vec<_> = NEUTRALS_LIGHT.shades.iter().map(|t| t.name).collect();
        let dark: Vec<_> = NEUTRALS_DARK.shades.iter().map(|t| t.name).collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn theme_mode_round_trips_and_toggles() {
        assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("unknown"), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn palettes_are_non_empty() {
        assert!(!PRIMARY.shades.is_empty());
        assert!(!ERROR.shades.is_empty());
    }
}
