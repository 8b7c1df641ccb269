//! Color palette with light and dark theme support.
//!
//! Neutral zinc tones with a single dark primary, in the spirit of the
//! shadcn/ui default palette.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme (default).
    #[default]
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary action colors
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_pressed: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub backdrop: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_green: Color,
    pub accent_red: Color,

    // State colors
    pub hover: Color,
    pub chip: Color,
    pub ring: Color,

    // Border colors
    pub border: Color,
    pub border_strong: Color,

    // Shadow color
    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.09, 0.09, 0.11), // zinc-900
            primary_hover: Color::from_rgb(0.25, 0.25, 0.27),
            primary_pressed: Color::from_rgb(0.0, 0.0, 0.0),

            background: Color::WHITE,
            surface: Color::WHITE,
            surface_muted: Color::from_rgb(0.96, 0.96, 0.96), // zinc-100
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.5),

            text_primary: Color::from_rgb(0.04, 0.04, 0.05),
            text_secondary: Color::from_rgb(0.25, 0.25, 0.27),
            text_muted: Color::from_rgb(0.44, 0.44, 0.48), // zinc-500
            text_on_primary: Color::from_rgb(0.98, 0.98, 0.98),

            accent_green: Color::from_rgb(0.09, 0.64, 0.29),
            accent_red: Color::from_rgb(0.86, 0.15, 0.15),

            hover: Color::from_rgb(0.96, 0.96, 0.96),
            chip: Color::from_rgb(0.94, 0.94, 0.95),
            ring: Color::from_rgb(0.63, 0.63, 0.67),

            border: Color::from_rgb(0.89, 0.89, 0.91), // zinc-200
            border_strong: Color::from_rgb(0.83, 0.83, 0.85),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.10),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.98, 0.98, 0.98), // zinc-50
            primary_hover: Color::from_rgb(0.83, 0.83, 0.85),
            primary_pressed: Color::from_rgb(0.71, 0.71, 0.74),

            background: Color::from_rgb(0.04, 0.04, 0.05), // zinc-950
            surface: Color::from_rgb(0.06, 0.06, 0.07),
            surface_muted: Color::from_rgb(0.15, 0.15, 0.16), // zinc-800
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.7),

            text_primary: Color::from_rgb(0.98, 0.98, 0.98),
            text_secondary: Color::from_rgb(0.83, 0.83, 0.85),
            text_muted: Color::from_rgb(0.63, 0.63, 0.67), // zinc-400
            text_on_primary: Color::from_rgb(0.09, 0.09, 0.11),

            accent_green: Color::from_rgb(0.29, 0.87, 0.50),
            accent_red: Color::from_rgb(0.94, 0.27, 0.27),

            hover: Color::from_rgb(0.15, 0.15, 0.16),
            chip: Color::from_rgb(0.15, 0.15, 0.16),
            ring: Color::from_rgb(0.44, 0.44, 0.48),

            border: Color::from_rgb(0.15, 0.15, 0.16),
            border_strong: Color::from_rgb(0.25, 0.25, 0.27),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.40),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to dark mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
