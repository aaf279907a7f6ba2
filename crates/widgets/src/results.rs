use avg_core::{
    event::Message,
    format::{format_average, format_previous, join_window},
    state::AppState,
    Snapshot,
};
use avg_theme::{style, Theme};
use iced::{
    widget::{column, container, row, text},
    Element, Length,
};

/// Before/after window contents, the sample just added and the average.
///
/// Hidden entirely until the first sample lands in the window.
#[derive(Debug, Default)]
pub struct ResultsWidget;

/// The four rendered fields of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsText {
    pub previous: String,
    pub current:  String,
    pub added:    String,
    pub average:  String,
}

impl ResultsText {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            previous: format_previous(&snapshot.previous_window),
            current:  join_window(&snapshot.current_window),
            added:    join_window(&snapshot.added_samples),
            average:  format_average(snapshot.average),
        }
    }
}

impl ResultsWidget {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` while the window is empty; callers should skip rendering.
    pub fn view<'a>(
        &'a self,
        state: &'a AppState,
        theme: &'a Theme,
    ) -> Option<Element<'a, Message>> {
        if !state.show_results() {
            return None;
        }
        let fields = ResultsText::from_snapshot(state.snapshot.as_ref()?);
        let gap = theme.gap as f32;

        let left = column![
            field("Previous Window State", fields.previous, theme, false),
            field("Current Window State", fields.current, theme, false),
        ]
        .spacing(gap)
        .width(Length::FillPortion(1));

        let right = column![
            field("New Numbers Added", fields.added, theme, false),
            field("Current Average", fields.average, theme, true),
        ]
        .spacing(gap)
        .width(Length::FillPortion(1));

        Some(
            column![
                text("Results")
                    .size(theme.font_size * 1.3)
                    .font(crate::bold())
                    .color(theme.foreground.to_iced()),
                row![left, right].spacing(gap * 1.5),
            ]
            .spacing(gap)
            .into(),
        )
    }
}

fn field<'a>(label: &'static str, value: String, theme: &Theme, highlight: bool) -> Element<'a, Message> {
    let value = if highlight {
        text(value).size(theme.font_size).font(crate::bold())
    } else {
        text(value).size(theme.font_size)
    };

    let boxed = container(value).padding(12).width(Length::Fill);
    let boxed = if highlight {
        boxed.style(style::average_box(theme))
    } else {
        boxed.style(style::value_box(theme))
    };

    column![
        text(label)
            .size(theme.font_size - 2.0)
            .color(theme.muted.to_iced()),
        boxed,
    ]
    .spacing(theme.gap as f32 / 2.0)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use avg_core::WindowAverager;

    #[test]
    fn first_insert_shows_empty_previous() {
        let mut avg = WindowAverager::new();
        let fields = ResultsText::from_snapshot(&avg.insert(5.0));

        assert_eq!(fields.previous, "Empty");
        assert_eq!(fields.current, "5");
        assert_eq!(fields.added, "5");
        assert_eq!(fields.average, "5.00");
    }

    #[test]
    fn full_window_rollover_text() {
        let mut avg = WindowAverager::new();
        for i in 1..=10 {
            avg.insert(f64::from(i));
        }
        let fields = ResultsText::from_snapshot(&avg.insert(11.0));

        assert_eq!(fields.previous, "1, 2, 3, 4, 5, 6, 7, 8, 9, 10");
        assert_eq!(fields.current, "2, 3, 4, 5, 6, 7, 8, 9, 10, 11");
        assert_eq!(fields.added, "11");
        assert_eq!(fields.average, "6.50");
    }

    #[test]
    fn hidden_until_first_sample() {
        let state = AppState::default();
        let theme = Theme::default();
        assert!(ResultsWidget::new().view(&state, &theme).is_none());
    }
}
