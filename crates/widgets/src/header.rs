use avg_core::{event::Message, state::AppState};
use avg_theme::Theme;
use iced::{
    widget::{column, text},
    Element,
};

/// Title plus a one-line description of the window size.
#[derive(Debug, Default)]
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        column![
            text("Average Calculator")
                .size(theme.font_size * 2.0)
                .font(crate::bold())
                .color(theme.foreground.to_iced()),
            text(subtitle(state.averager.capacity()))
                .size(theme.font_size)
                .color(theme.muted.to_iced()),
        ]
        .spacing(theme.gap as f32 / 2.0)
        .into()
    }
}

fn subtitle(capacity: usize) -> String {
    format!("Calculate running averages with a sliding window of {capacity} numbers")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_names_capacity() {
        assert_eq!(
            subtitle(10),
            "Calculate running averages with a sliding window of 10 numbers"
        );
    }
}
