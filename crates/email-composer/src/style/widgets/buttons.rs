//! Button style functions with theme support.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Primary button style - solid fill, used for "New Email" and "Send Email".
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.primary)),
        text_color: p.text_on_primary,
        border: Border {
            color: p.primary,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::subtle(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.primary_hover)),
            border: Border {
                color: p.primary_hover,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_pressed)),
            shadow: shadows::none(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: 0.5,
                ..p.primary
            })),
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Outline button style - bordered, transparent fill ("Load All Customers").
pub fn outline_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.surface)),
        text_color: p.text_primary,
        border: Border {
            color: p.border,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::subtle(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: p.text_muted,
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Ghost button style - transparent until hovered ("Cancel").
pub fn ghost_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
    }
}

/// Round "x" on a recipient chip.
pub fn chip_remove_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_muted,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            text_color: p.text_primary,
            border: Border {
                color: p.ring,
                width: 1.0,
                ..base.border
            },
            ..base
        },
    }
}

/// Row in the suggestion popover.
pub fn suggestion_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border::default(),
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
    }
}
