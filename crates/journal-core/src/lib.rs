pub mod animation;
pub mod config;
pub mod error;
pub mod pagination;
pub mod result;
pub mod selection;

pub use animation::{CursorBlink, Delay, Typewriter};
pub use config::AppConfig;
pub use error::JournalError;
pub use pagination::{compute_window, total_pages, PageMarker, Paginator, DEFAULT_MAX_DIRECT};
pub use result::JournalResult;
pub use selection::SelectionState;
