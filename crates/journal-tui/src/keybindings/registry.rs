use super::{
    dialog::TerminalDialogProvider,
    home::{HomePaginationProvider, HomePostsProvider},
    post::PostProvider,
    welcome::WelcomeProvider,
    KeybindingProvider,
};
use crate::app::{App, AppMode, HomeFocus};

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        if let Some(dialog) = &app.dialog {
            return Box::new(TerminalDialogProvider::new(dialog.page.title.clone()));
        }
        Self::get_provider_for_mode(&app.mode, app.home_focus)
    }

    fn get_provider_for_mode(mode: &AppMode, focus: HomeFocus) -> Box<dyn KeybindingProvider> {
        match mode {
            AppMode::Welcome => Box::new(WelcomeProvider),
            AppMode::Home => match focus {
                HomeFocus::Posts => Box::new(HomePostsProvider),
                HomeFocus::Pagination => Box::new(HomePaginationProvider),
            },
            AppMode::Post => Box::new(PostProvider),
            AppMode::Help(previous_mode) => Self::get_provider_for_mode(previous_mode, focus),
        }
    }
}
