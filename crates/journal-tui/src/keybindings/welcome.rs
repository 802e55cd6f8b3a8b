use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct WelcomeProvider;

impl KeybindingProvider for WelcomeProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Welcome",
            vec![Keybinding::new("any key", "skip", "Skip the welcome screen")],
        )
    }
}
