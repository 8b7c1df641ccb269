//! Shadow presets and rounded corner radii.

use iced::{Shadow, Vector};

use super::palette;

/// Rounded corner radii.
pub mod radius {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 6.0;
    pub const LARGE: f32 = 8.0;
    pub const PILL: f32 = 9999.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

/// Shadow under inputs and outline buttons.
pub fn subtle() -> Shadow {
    Shadow {
        color: palette::current().shadow,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    }
}

/// Shadow under floating surfaces (dialog, popover, toasts).
pub fn large() -> Shadow {
    Shadow {
        color: palette::current().shadow,
        offset: Vector::new(0.0, 10.0),
        blur_radius: 30.0,
    }
}
