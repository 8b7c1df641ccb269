//! Container style functions with theme support.

use email_composer_core::ToastKind;
use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Full-window page background.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Dimmed layer behind the dialog.
pub fn backdrop_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.backdrop)),
        ..Default::default()
    }
}

/// Dialog card.
pub fn dialog_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        text_color: Some(p.text_primary),
        border: Border {
            color: p.border,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::large(),
        ..Default::default()
    }
}

/// Box around the chips and the search input, mimicking a text input.
pub fn recipient_field_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Recipient chip (secondary badge).
pub fn chip_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.chip)),
        text_color: Some(p.text_primary),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Suggestion popover.
pub fn popover_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        text_color: Some(p.text_primary),
        border: Border {
            color: p.border,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::large(),
        ..Default::default()
    }
}

/// Toast card, with the border tinted by severity.
pub fn toast_style(kind: ToastKind) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let accent = match kind {
            ToastKind::Success => p.accent_green,
            ToastKind::Error => p.accent_red,
            ToastKind::Info => p.border_strong,
        };

        container::Style {
            background: Some(Background::Color(p.surface)),
            text_color: Some(p.text_primary),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::LARGE.into(),
            },
            shadow: shadows::large(),
            ..Default::default()
        }
    }
}
