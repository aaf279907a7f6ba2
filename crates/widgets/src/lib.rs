pub mod category;
pub mod header;
pub mod input;
pub mod results;

pub use category::CategoryWidget;
pub use header::HeaderWidget;
pub use input::InputWidget;
pub use results::ResultsWidget;

/// Default font at bold weight, used for labels and headings.
pub(crate) fn bold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    }
}
