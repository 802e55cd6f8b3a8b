use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct TerminalDialogProvider {
    title: String,
}

impl TerminalDialogProvider {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl KeybindingProvider for TerminalDialogProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            format!("{} - Dialog", self.title),
            vec![
                Keybinding::new("j/↓", "down", "Scroll down"),
                Keybinding::new("k/↑", "up", "Scroll up"),
                Keybinding::new("Esc/q", "close", "Close dialog"),
            ],
        )
    }
}
