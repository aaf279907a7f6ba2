use crate::{
    category::NumberCategory,
    event::Message,
    sample::parse_sample,
    window::{Snapshot, WindowAverager},
};
use tracing::{debug, warn};

/// Central application state; every view reads from this.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The sliding window itself.
    pub averager: WindowAverager,
    /// Result of the most recent successful insertion.
    pub snapshot: Option<Snapshot>,
    /// Raw contents of the number field.
    pub input:    String,
    /// Inline validation message, if the last submit failed.
    pub error:    Option<String>,
    /// Currently highlighted category button.
    pub category: NumberCategory,
}

impl AppState {
    pub fn new(capacity: usize, category: NumberCategory) -> Self {
        Self {
            averager: WindowAverager::with_capacity(capacity),
            category,
            ..Self::default()
        }
    }

    /// Apply one message to the state.
    pub fn apply(&mut self, message: Message) {
        match message {
            Message::InputChanged(text) => self.input = text,
            Message::Submit => self.submit(),
            Message::CategorySelected(category) => {
                debug!(%category, "category selected");
                self.category = category;
            }
            Message::ConfigReloaded => {}
        }
    }

    /// Parse the input buffer and feed it to the averager.
    ///
    /// On failure the window, the last snapshot and the buffer are left as-is.
    fn submit(&mut self) {
        match parse_sample(&self.input) {
            Ok(sample) => {
                self.snapshot = Some(self.averager.insert(sample));
                self.error = None;
                self.input.clear();
            }
            Err(e) => {
                warn!("rejected input: {e}");
                self.error = Some(e.user_message());
            }
        }
    }

    /// The results panel is only shown once the window holds something.
    pub fn show_results(&self) -> bool {
        !self.averager.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: &mut AppState, text: &str) {
        state.apply(Message::InputChanged(text.to_string()));
        state.apply(Message::Submit);
    }

    #[test]
    fn submit_valid_number_clears_input_and_error() {
        let mut state = AppState::default();
        submit(&mut state, "abc");
        assert!(state.error.is_some());

        submit(&mut state, "4");
        assert_eq!(state.error, None);
        assert_eq!(state.input, "");
        assert_eq!(state.averager.window(), vec![4.0]);
        assert!(state.show_results());
    }

    #[test]
    fn invalid_input_on_empty_window() {
        let mut state = AppState::default();
        submit(&mut state, "abc");

        assert_eq!(state.error.as_deref(), Some("Please enter a valid number"));
        assert!(state.averager.is_empty());
        assert!(state.snapshot.is_none());
        assert!(!state.show_results());
    }

    #[test]
    fn invalid_input_leaves_window_untouched() {
        let mut state = AppState::default();
        for text in ["1", "2", "3"] {
            submit(&mut state, text);
        }
        let before = state.snapshot.clone();

        submit(&mut state, "not a number");

        assert_eq!(state.snapshot, before);
        assert_eq!(state.averager.window(), vec![1.0, 2.0, 3.0]);
        assert_eq!(state.input, "not a number");
        let snap = state.snapshot.unwrap();
        assert_eq!(snap.previous_window, vec![1.0, 2.0]);
        assert_eq!(snap.average, 2.0);
    }

    #[test]
    fn category_does_not_affect_computation() {
        let mut plain = AppState::default();
        let mut switched = AppState::default();

        for (i, text) in ["1.5", "-2", "7"].iter().enumerate() {
            submit(&mut plain, text);
            switched.apply(Message::CategorySelected(NumberCategory::ALL[i + 1]));
            submit(&mut switched, text);
        }

        assert_eq!(switched.category, NumberCategory::Random);
        assert_eq!(plain.snapshot, switched.snapshot);
    }

    #[test]
    fn new_uses_configured_capacity() {
        let mut state = AppState::new(2, NumberCategory::Even);
        for text in ["1", "2", "3"] {
            submit(&mut state, text);
        }
        assert_eq!(state.category, NumberCategory::Even);
        assert_eq!(state.averager.window(), vec![2.0, 3.0]);
    }
}
