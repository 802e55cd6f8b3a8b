pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod keybindings;
pub mod markdown_renderer;
pub mod post_view;
pub mod theme;
pub mod ui;
pub mod welcome;

pub use app::{App, AppMode, HomeFocus};
