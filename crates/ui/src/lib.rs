//! Desktop window for `avg`.
//!
//! Owns the Iced application loop and wires together:
//! - the [`AppState`] reducer (number input, category selection)
//! - the widget views (header, categories, input, results)
//! - the config file watcher (live theme reload)

use avg_config::{default_path, load as load_config, AvgConfig, ConfigWatcher};
use avg_core::{event::Message, state::AppState};
use avg_theme::{style, Theme};
use avg_widgets::{CategoryWidget, HeaderWidget, InputWidget, ResultsWidget};
use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, scrollable},
    Element, Length, Size, Subscription, Task,
};
use std::time::Duration;
use tracing::{info, warn};

/// Content never grows wider than this (logical pixels).
const MAX_CONTENT_WIDTH: f32 = 896.0;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the calculator window and block until it is closed.
pub fn run() -> iced::Result {
    let config = load_settings();
    let size = Size::new(config.global.width, config.global.height);

    iced::application(App::new, App::update, App::view)
        .title("Average Calculator")
        .subscription(App::subscription)
        .style(App::style)
        .window_size(size)
        .run()
}

/// Read the config file, falling back to defaults on any error.
fn load_settings() -> AvgConfig {
    match load_config(default_path()) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Invalid config, using defaults: {e}");
            AvgConfig::default()
        }
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    state:      AppState,
    theme:      Theme,
    header:     HeaderWidget,
    categories: CategoryWidget,
    input:      InputWidget,
    results:    ResultsWidget,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (Self::with_config(load_settings()), Task::none())
    }

    fn with_config(config: AvgConfig) -> Self {
        let theme = Theme::from_config(&config.theme);
        let state = AppState::new(config.averager.capacity, config.global.category);

        info!(
            capacity = config.averager.capacity,
            category = %config.global.category,
            "calculator ready"
        );

        Self {
            state,
            theme,
            header:     HeaderWidget::new(),
            categories: CategoryWidget::new(),
            input:      InputWidget::new(),
            results:    ResultsWidget::new(),
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => self.apply_config(cfg),
                Err(e)  => warn!("Config reload failed: {e}"),
            },
            other => self.state.apply(other),
        }
        Task::none()
    }

    /// Swap in a reloaded config.  The live window keeps its capacity.
    fn apply_config(&mut self, cfg: AvgConfig) {
        if cfg.averager.capacity != self.state.averager.capacity() {
            info!(
                "averager.capacity changed to {}; takes effect on restart",
                cfg.averager.capacity
            );
        }
        info!("Config reloaded");
        self.theme = Theme::from_config(&cfg.theme);
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let gap = self.theme.gap as f32;
        let pad = self.theme.padding;

        let controls = container(
            column![
                self.header.view(&self.state, &self.theme),
                self.categories.view(&self.state, &self.theme),
                self.input.view(&self.state, &self.theme),
            ]
            .spacing(gap * 1.5),
        )
        .padding(pad)
        .width(Length::Fill)
        .style(style::card(&self.theme));

        let mut page = column![controls].spacing(gap * 1.5);

        if let Some(results) = self.results.view(&self.state, &self.theme) {
            page = page.push(
                container(results)
                    .padding(pad)
                    .width(Length::Fill)
                    .style(style::card(&self.theme)),
            );
        }

        scrollable(
            container(page.max_width(MAX_CONTENT_WIDTH))
                .center_x(Length::Fill)
                .padding(pad),
        )
        .height(Length::Fill)
        .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run(config_stream)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/avg/avg.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher gave up (no config dir); stall rather than end the subscription.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
