//! Iced style closures built from a [`Theme`].

use crate::{Color, Theme};
use iced::{
    widget::{button, container, text_input},
    Background, Border, Shadow, Vector,
};

/// White rounded card with a soft drop shadow.
pub fn card(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let surface = theme.surface;
    let radius  = theme.border_radius;
    move |_| container::Style {
        background: Some(Background::Color(surface.to_iced())),
        border: Border { radius: radius.into(), ..Default::default() },
        shadow: Shadow {
            color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Grey box holding one window field in the results panel.
pub fn value_box(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let fg     = theme.foreground;
    let radius = theme.border_radius * 0.66;
    move |_| container::Style {
        background: Some(Background::Color(Color::GRAY_50.to_iced())),
        text_color: Some(fg.to_iced()),
        border: Border { radius: radius.into(), ..Default::default() },
        ..Default::default()
    }
}

/// Accent-tinted box for the average.
pub fn average_box(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let accent = theme.accent;
    let radius = theme.border_radius * 0.66;
    move |_| container::Style {
        background: Some(Background::Color(accent.with_alpha(0.08).to_iced())),
        text_color: Some(accent.to_iced()),
        border: Border { radius: radius.into(), ..Default::default() },
        ..Default::default()
    }
}

/// Outlined category button; accent border and tint when `selected`.
pub fn category_button(
    theme: &Theme,
    selected: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    let accent  = theme.accent;
    let surface = theme.surface;
    let fg      = theme.foreground;
    let radius  = theme.border_radius * 0.66;
    move |_, status| {
        let border_color = match (selected, status) {
            (true, _)                        => accent,
            (false, button::Status::Hovered) => Color::GRAY_200.mix(accent, 0.35),
            (false, _)                       => Color::GRAY_200,
        };
        let background = if selected {
            accent.with_alpha(0.08)
        } else {
            surface
        };
        button::Style {
            background: Some(Background::Color(background.to_iced())),
            text_color: fg.to_iced(),
            border: Border {
                color: border_color.to_iced(),
                width: 2.0,
                radius: radius.into(),
            },
            ..Default::default()
        }
    }
}

/// Solid accent button ("Add Number").
pub fn primary_button(theme: &Theme) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    let accent = theme.accent;
    let radius = theme.border_radius * 0.66;
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => accent.mix(Color::GRAY_800, 0.2),
            _ => accent,
        };
        button::Style {
            background: Some(Background::Color(bg.to_iced())),
            text_color: Color::WHITE.to_iced(),
            border: Border { radius: radius.into(), ..Default::default() },
            ..Default::default()
        }
    }
}

/// Number field with a 2px border that turns accent on focus.
pub fn number_input(
    theme: &Theme,
) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style {
    let accent  = theme.accent;
    let surface = theme.surface;
    let fg      = theme.foreground;
    let muted   = theme.muted;
    let radius  = theme.border_radius * 0.66;
    move |_, status| {
        let border_color = match status {
            text_input::Status::Focused { .. } => accent,
            _ => Color::GRAY_200,
        };
        text_input::Style {
            background: Background::Color(surface.to_iced()),
            border: Border {
                color: border_color.to_iced(),
                width: 2.0,
                radius: radius.into(),
            },
            icon: muted.to_iced(),
            placeholder: muted.to_iced(),
            value: fg.to_iced(),
            selection: accent.with_alpha(0.25).to_iced(),
        }
    }
}
