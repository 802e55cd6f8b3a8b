//! Tick-driven animation clocks.
//!
//! The terminal look relies on a few cosmetic timers: a blinking cursor, a
//! typing effect that reveals text one character at a time, and one-shot
//! delays. Each clock is a plain value advanced by `tick(now)` from the UI
//! loop, so it can be driven by any event source and tested with synthetic
//! instants. Dropping a clock cancels it.

use std::time::{Duration, Instant};

fn elapsed_steps(since: Instant, now: Instant, step: Duration) -> u32 {
    if step.is_zero() {
        return 0;
    }
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_nanos() / step.as_nanos()).min(u32::MAX as u128) as u32
}

/// Cursor that flips between visible and hidden every `interval`.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    interval: Duration,
    visible: bool,
    last_toggle: Instant,
}

impl CursorBlink {
    /// Start visible at `now`.
    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            visible: true,
            last_toggle: now,
        }
    }

    /// Advance to `now`. Returns true when visibility changed.
    ///
    /// Missed intervals are caught up, so a late tick lands on the same
    /// state a punctual one would have.
    pub fn tick(&mut self, now: Instant) -> bool {
        let steps = elapsed_steps(self.last_toggle, now, self.interval);
        if steps == 0 {
            return false;
        }
        self.last_toggle += self.interval * steps;
        if steps % 2 == 1 {
            self.visible = !self.visible;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Reveals `target` one character per `step`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: String,
    step: Duration,
    revealed: usize,
    total_chars: usize,
    last_step: Instant,
}

impl Typewriter {
    /// Start with nothing revealed at `now`. A zero `step` reveals everything
    /// immediately.
    pub fn starting_at(target: impl Into<String>, step: Duration, now: Instant) -> Self {
        let target = target.into();
        let total_chars = target.chars().count();
        let revealed = if step.is_zero() { total_chars } else { 0 };
        Self {
            target,
            step,
            revealed,
            total_chars,
            last_step: now,
        }
    }

    /// Advance to `now`. Returns true when more text became visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_done() {
            return false;
        }
        let steps = elapsed_steps(self.last_step, now, self.step);
        if steps == 0 {
            return false;
        }
        self.last_step += self.step * steps;
        self.revealed = (self.revealed + steps as usize).min(self.total_chars);
        true
    }

    /// The revealed prefix. Never splits a character.
    pub fn visible_text(&self) -> &str {
        let end = self
            .target
            .char_indices()
            .nth(self.revealed)
            .map(|(idx, _)| idx)
            .unwrap_or(self.target.len());
        &self.target[..end]
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.total_chars
    }

    /// Skip to the fully typed state.
    pub fn finish(&mut self) {
        self.revealed = self.total_chars;
    }

    /// Start typing again from an empty string.
    pub fn restart(&mut self, now: Instant) {
        self.revealed = if self.step.is_zero() { self.total_chars } else { 0 };
        self.last_step = now;
    }
}

/// One-shot timer.
#[derive(Debug, Clone)]
pub struct Delay {
    duration: Duration,
    started: Instant,
    fired: bool,
}

impl Delay {
    pub fn starting_at(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            started: now,
            fired: false,
        }
    }

    /// Returns true exactly once, on the first tick at or after the deadline.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.fired || now.saturating_duration_since(self.started) < self.duration {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_cursor_starts_visible_and_toggles_per_interval() {
        let t0 = Instant::now();
        let mut cursor = CursorBlink::starting_at(MS * 500, t0);

        assert!(cursor.is_visible());
        assert!(!cursor.tick(t0 + MS * 499));
        assert!(cursor.is_visible());

        assert!(cursor.tick(t0 + MS * 500));
        assert!(!cursor.is_visible());

        assert!(cursor.tick(t0 + MS * 1000));
        assert!(cursor.is_visible());
    }

    #[test]
    fn test_cursor_catches_up_missed_intervals() {
        let t0 = Instant::now();
        let mut cursor = CursorBlink::starting_at(MS * 500, t0);

        // Two intervals elapsed: back to visible, nothing changed.
        assert!(!cursor.tick(t0 + MS * 1200));
        assert!(cursor.is_visible());

        assert!(cursor.tick(t0 + MS * 1500));
        assert!(!cursor.is_visible());
    }

    #[test]
    fn test_typewriter_reveals_one_char_per_step() {
        let t0 = Instant::now();
        let mut typing = Typewriter::starting_at("ls -la", MS * 100, t0);

        assert_eq!(typing.visible_text(), "");
        assert!(typing.tick(t0 + MS * 100));
        assert_eq!(typing.visible_text(), "l");
        assert!(!typing.tick(t0 + MS * 150));
        assert!(typing.tick(t0 + MS * 300));
        assert_eq!(typing.visible_text(), "ls ");
        assert!(!typing.is_done());

        assert!(typing.tick(t0 + MS * 10_000));
        assert_eq!(typing.visible_text(), "ls -la");
        assert!(typing.is_done());
        assert!(!typing.tick(t0 + MS * 20_000));
    }

    #[test]
    fn test_typewriter_respects_char_boundaries() {
        let t0 = Instant::now();
        let mut typing = Typewriter::starting_at("© 2023", MS * 10, t0);

        typing.tick(t0 + MS * 10);
        assert_eq!(typing.visible_text(), "©");
    }

    #[test]
    fn test_typewriter_finish_and_restart() {
        let t0 = Instant::now();
        let mut typing = Typewriter::starting_at("About", MS * 100, t0);

        typing.finish();
        assert_eq!(typing.visible_text(), "About");

        typing.restart(t0 + MS * 50);
        assert_eq!(typing.visible_text(), "");
        typing.tick(t0 + MS * 150);
        assert_eq!(typing.visible_text(), "A");
    }

    #[test]
    fn test_zero_step_typewriter_is_done_immediately() {
        let typing = Typewriter::starting_at("instant", Duration::ZERO, Instant::now());
        assert!(typing.is_done());
        assert_eq!(typing.visible_text(), "instant");
    }

    #[test]
    fn test_delay_fires_once() {
        let t0 = Instant::now();
        let mut delay = Delay::starting_at(MS * 1000, t0);

        assert!(!delay.tick(t0 + MS * 999));
        assert!(delay.tick(t0 + MS * 1000));
        assert!(delay.has_fired());
        assert!(!delay.tick(t0 + MS * 5000));
    }
}
