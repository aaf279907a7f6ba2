pub mod category;
pub mod error;
pub mod event;
pub mod format;
pub mod sample;
pub mod state;
pub mod window;

pub use category::NumberCategory;
pub use error::{AvgError, Result};
pub use event::Message;
pub use state::AppState;
pub use window::{Snapshot, WindowAverager, DEFAULT_CAPACITY};
