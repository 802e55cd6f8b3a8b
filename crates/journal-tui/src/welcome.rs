use journal_core::{Delay, Typewriter};
use std::time::{Duration, Instant};

pub const WELCOME_TEXT: &str = "Welcome to Stdout Journal";

/// How long the finished greeting stays up before the home page appears.
pub const WELCOME_HOLD: Duration = Duration::from_millis(1000);

/// Splash screen: types the greeting, holds it, then reports done.
#[derive(Debug, Clone)]
pub struct WelcomeScreen {
    pub greeting: Typewriter,
    hold: Option<Delay>,
}

impl WelcomeScreen {
    pub fn new(typing_step: Duration, now: Instant) -> Self {
        Self {
            greeting: Typewriter::starting_at(WELCOME_TEXT, typing_step, now),
            hold: None,
        }
    }

    /// Advance the splash. Returns true once it should be dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.greeting.tick(now);
        if !self.greeting.is_done() {
            return false;
        }
        self.hold
            .get_or_insert_with(|| Delay::starting_at(WELCOME_HOLD, now))
            .tick(now)
    }
}
