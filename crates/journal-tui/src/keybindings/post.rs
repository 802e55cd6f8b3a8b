use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct PostProvider;

impl KeybindingProvider for PostProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Post",
            vec![
                Keybinding::new("j/↓", "down", "Scroll down"),
                Keybinding::new("k/↑", "up", "Scroll up"),
                Keybinding::new("Space", "skip", "Finish typing the title"),
                Keybinding::new("Esc/b", "cd ..", "Back to the post list"),
                Keybinding::new("1-3", "nav", "Open header link (Blog, About, Contact)"),
                Keybinding::new("?", "help", "Show help"),
                Keybinding::new("q", "quit", "Quit"),
            ],
        )
    }
}
