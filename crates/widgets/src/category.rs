use avg_core::{event::Message, state::AppState, NumberCategory};
use avg_theme::{style, Theme};
use iced::{
    widget::{button, column, row, text},
    Alignment, Element, Length,
};

/// Four mutually exclusive category buttons laid out in a row.
///
/// Clicking one emits `Message::CategorySelected`; the choice is purely
/// visual and never reaches the averager.
#[derive(Debug, Default)]
pub struct CategoryWidget;

impl CategoryWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let buttons: Vec<Element<'a, Message>> = NumberCategory::ALL
            .into_iter()
            .map(|category| self.view_button(category, state.category == category, theme))
            .collect();

        iced::widget::Row::from_vec(buttons)
            .spacing(theme.gap as f32)
            .width(Length::Fill)
            .into()
    }

    fn view_button<'a>(
        &'a self,
        category: NumberCategory,
        selected: bool,
        theme: &'a Theme,
    ) -> Element<'a, Message> {
        let heading = row![
            text(theme.category_icon(category)).size(theme.font_size * 1.3),
            text(category.label()).size(theme.font_size).font(crate::bold()),
        ]
        .spacing(theme.gap as f32 * 0.75)
        .align_y(Alignment::Center);

        let body = column![
            heading,
            text(category.description())
                .size(theme.font_size - 2.0)
                .color(theme.muted.to_iced()),
        ]
        .spacing(theme.gap as f32 / 2.0);

        button(body)
            .on_press(Message::CategorySelected(category))
            .padding(theme.gap)
            .width(Length::FillPortion(1))
            .style(style::category_button(theme, selected))
            .into()
    }
}
