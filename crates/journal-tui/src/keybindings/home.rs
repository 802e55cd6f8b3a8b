use super::{Keybinding, KeybindingContext, KeybindingProvider};

fn shared() -> Vec<Keybinding> {
    vec![
        Keybinding::new("1-3", "nav", "Open header link (Blog, About, Contact)"),
        Keybinding::new("a", "about", "Show About dialog"),
        Keybinding::new("c", "contact", "Show Contact dialog"),
        Keybinding::new("Tab", "focus", "Switch between posts and pagination"),
        Keybinding::new("?", "help", "Show help"),
        Keybinding::new("q", "quit", "Quit"),
    ]
}

pub struct HomePostsProvider;

impl KeybindingProvider for HomePostsProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![
            Keybinding::new("j/↓", "down", "Select next post"),
            Keybinding::new("k/↑", "up", "Select previous post"),
            Keybinding::new("Enter", "read", "Open selected post"),
            Keybinding::new("h/←/p", "prev page", "Previous page"),
            Keybinding::new("l/→/n", "next page", "Next page"),
            Keybinding::new("g/G", "first/last", "Jump to first or last page"),
        ];
        bindings.extend(shared());
        KeybindingContext::new("Home - Posts", bindings)
    }
}

pub struct HomePaginationProvider;

impl KeybindingProvider for HomePaginationProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![
            Keybinding::new("h/←", "left", "Move to previous page marker"),
            Keybinding::new("l/→", "right", "Move to next page marker"),
            Keybinding::new("Enter", "go", "Go to highlighted page"),
            Keybinding::new("Esc", "posts", "Back to the post list"),
        ];
        bindings.extend(shared());
        KeybindingContext::new("Home - Pagination", bindings)
    }
}
