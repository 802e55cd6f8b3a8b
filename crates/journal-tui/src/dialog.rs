use crossterm::event::{KeyCode, KeyEvent};
use journal_core::{Delay, Typewriter};
use journal_domain::{about_page, contact_page, InfoPage};
use std::time::{Duration, Instant};

/// Delay before the scanline overlay switches on.
pub const SCANLINE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    About,
    Contact,
}

impl DialogKind {
    pub fn page(self) -> InfoPage {
        match self {
            DialogKind::About => about_page(),
            DialogKind::Contact => contact_page(),
        }
    }
}

/// Modal showing an About/Contact page with a typed title bar.
#[derive(Debug, Clone)]
pub struct TerminalDialog {
    pub kind: DialogKind,
    pub page: InfoPage,
    pub title: Typewriter,
    scanlines: Delay,
    pub scroll: u16,
}

impl TerminalDialog {
    pub fn open(kind: DialogKind, typing_step: Duration, now: Instant) -> Self {
        let page = kind.page();
        let title = Typewriter::starting_at(page.title.clone(), typing_step, now);
        Self {
            kind,
            page,
            title,
            scanlines: Delay::starting_at(SCANLINE_DELAY, now),
            scroll: 0,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.title.tick(now);
        self.scanlines.tick(now);
    }

    pub fn scanlines_on(&self) -> bool {
        self.scanlines.has_fired()
    }

    /// Stop scrolling once the last of `content_rows` is on screen.
    pub fn clamp_scroll(&mut self, content_rows: usize, viewport_rows: u16) {
        let max = content_rows.saturating_sub(viewport_rows as usize);
        self.scroll = self.scroll.min(max.min(u16::MAX as usize) as u16);
    }
}

pub enum DialogAction {
    None,
    Close,
}

pub fn handle_dialog_key(dialog: &mut TerminalDialog, key: KeyEvent) -> DialogAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('x') => {
            DialogAction::Close
        }
        KeyCode::Char('j') | KeyCode::Down => {
            dialog.scroll = dialog.scroll.saturating_add(1);
            DialogAction::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            dialog.scroll = dialog.scroll.saturating_sub(1);
            DialogAction::None
        }
        KeyCode::Char('g') | KeyCode::Home => {
            dialog.scroll = 0;
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_title_types_and_scanlines_follow() {
        let t0 = Instant::now();
        let mut dialog = TerminalDialog::open(DialogKind::Contact, Duration::from_millis(100), t0);

        assert_eq!(dialog.title.visible_text(), "");
        assert!(!dialog.scanlines_on());

        dialog.tick(t0 + Duration::from_millis(300));
        assert_eq!(dialog.title.visible_text(), "Con");
        assert!(!dialog.scanlines_on());

        dialog.tick(t0 + Duration::from_millis(400));
        assert!(dialog.scanlines_on());
    }

    #[test]
    fn test_keys_scroll_and_close() {
        let mut dialog = TerminalDialog::open(DialogKind::About, Duration::ZERO, Instant::now());

        assert!(matches!(handle_dialog_key(&mut dialog, key(KeyCode::Char('j'))), DialogAction::None));
        assert!(matches!(handle_dialog_key(&mut dialog, key(KeyCode::Down)), DialogAction::None));
        assert_eq!(dialog.scroll, 2);

        handle_dialog_key(&mut dialog, key(KeyCode::Up));
        assert_eq!(dialog.scroll, 1);

        assert!(matches!(handle_dialog_key(&mut dialog, key(KeyCode::Esc)), DialogAction::Close));
    }

    #[test]
    fn test_scroll_stops_at_last_row() {
        let mut dialog = TerminalDialog::open(DialogKind::About, Duration::ZERO, Instant::now());
        dialog.scroll = 50;

        dialog.clamp_scroll(30, 10);
        assert_eq!(dialog.scroll, 20);

        dialog.clamp_scroll(5, 10);
        assert_eq!(dialog.scroll, 0);
    }
}
