use avg_core::{event::Message, state::AppState};
use avg_theme::{style, Theme};
use iced::{
    widget::{button, column, row, text, text_input},
    Alignment, Element, Length,
};

/// Number field, "Add Number" button and the inline validation message.
///
/// Enter inside the field submits, same as the button.
#[derive(Debug, Default)]
pub struct InputWidget;

impl InputWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let field = text_input("Enter a number", &state.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .size(theme.font_size)
            .padding([8, 16])
            .width(Length::Fill)
            .style(style::number_input(theme));

        let add = button(text("Add Number").size(theme.font_size).font(crate::bold()))
            .on_press(Message::Submit)
            .padding([8, 24])
            .style(style::primary_button(theme));

        let entry = row![field, add]
            .spacing(theme.gap as f32)
            .align_y(Alignment::Center);

        match &state.error {
            Some(error) => column![
                entry,
                text(error.as_str())
                    .size(theme.font_size - 2.0)
                    .color(theme.error.to_iced()),
            ]
            .spacing(theme.gap as f32 / 2.0)
            .into(),
            None => entry.into(),
        }
    }
}
