use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use journal_core::AppConfig;
use journal_domain::MockCatalog;
use journal_tui::{ui, App};
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

fn screen(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn settled_app() -> App {
    let mut app = App::new(
        AppConfig {
            show_welcome: false,
            ..AppConfig::default()
        },
        Box::new(MockCatalog::new()),
    );
    app.on_tick(Instant::now() + Duration::from_secs(30));
    app
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_home_screen() {
    let mut app = settled_app();
    let text = screen(&mut app, 120, 40);

    assert!(text.contains("Stdout Journal"));
    assert!(text.contains("[1] Blog [2] About [3] Contact"));
    assert!(text.contains("user@codeterminal:~$ cat welcome.txt"));
    assert!(text.contains("user@stdout:~$ ls -la /posts"));
    assert!(text.contains("$ Getting Started with Terminal Commands"));
    assert!(text.contains("cat read_more.md"));
    assert!(text.contains("Showing page 1 of 2"));
    assert!(text.contains("« Prev"));
    assert!(text.contains("Next »"));
    assert!(text.contains("All rights reserved."));
}

#[test]
fn test_second_page_lists_remaining_posts() {
    let mut app = settled_app();
    press(&mut app, KeyCode::Char('l'));
    app.on_tick(Instant::now() + Duration::from_secs(30));

    let text = screen(&mut app, 120, 40);

    assert!(text.contains("Showing page 2 of 2"));
    assert!(text.contains("$ Optimizing Website Performance"));
    assert!(!text.contains("$ Getting Started with Terminal Commands"));
}

#[test]
fn test_post_screen() {
    let mut app = settled_app();
    press(&mut app, KeyCode::Enter);
    app.on_tick(Instant::now() + Duration::from_secs(30));

    let text = screen(&mut app, 120, 60);

    assert!(text.contains("cd .."));
    assert!(text.contains("$ Building a Terminal-Inspired Blog"));
    assert!(text.contains("Stdout User"));
    assert!(text.contains("user@stdout:~$ cat post.md"));
    assert!(text.contains("## Getting Started"));
}

#[test]
fn test_about_dialog_overlay() {
    let mut app = settled_app();
    press(&mut app, KeyCode::Char('a'));
    app.on_tick(Instant::now() + Duration::from_secs(30));

    let text = screen(&mut app, 120, 40);

    assert!(text.contains("cat about.txt"));
    assert!(text.contains("whoami"));
}

#[test]
fn test_help_popup_lists_bindings() {
    let mut app = settled_app();
    press(&mut app, KeyCode::Char('?'));

    let text = screen(&mut app, 120, 40);

    assert!(text.contains("Help - Home - Posts"));
    assert!(text.contains("Open selected post"));
}

#[test]
fn test_welcome_screen() {
    let mut app = App::new(AppConfig::default(), Box::new(MockCatalog::new()));
    app.on_tick(Instant::now() + Duration::from_secs(5));

    let text = screen(&mut app, 80, 20);

    assert!(text.contains("Welcome to Stdout Journal"));
    assert!(text.contains("Loading system resources..."));
}

#[test]
fn test_narrow_post_scrolls_to_related_posts() {
    let mut app = settled_app();
    press(&mut app, KeyCode::Enter);
    app.on_tick(Instant::now() + Duration::from_secs(30));

    assert!(!screen(&mut app, 50, 30).contains("Terminal Productivity Hacks"));

    for _ in 0..400 {
        press(&mut app, KeyCode::Char('j'));
    }
    let text = screen(&mut app, 50, 30);

    assert!(text.contains("Terminal Productivity Hacks"));
    assert!(app.post_view.as_ref().unwrap().scroll < 400);
}

#[test]
fn test_selected_card_stays_visible_on_small_terminal() {
    let mut app = settled_app();

    let text = screen(&mut app, 80, 24);
    assert!(text.contains("$ Getting Started with Terminal Commands"));

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    let text = screen(&mut app, 80, 24);

    assert_eq!(app.post_selection.get(), Some(2));
    assert!(text.contains("$ CSS Grid vs Flexbox: When to Use Each"));
    assert!(!text.contains("$ Getting Started with Terminal Commands"));

    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('k'));
    let text = screen(&mut app, 80, 24);
    assert!(text.contains("$ Getting Started with Terminal Commands"));
}

#[test]
fn test_dialog_scroll_stops_at_end_of_page() {
    let mut app = settled_app();
    press(&mut app, KeyCode::Char('a'));
    app.on_tick(Instant::now() + Duration::from_secs(30));

    for _ in 0..200 {
        press(&mut app, KeyCode::Char('j'));
    }
    let text = screen(&mut app, 120, 40);
    let clamped = app.dialog.as_ref().unwrap().scroll;

    assert!(clamped < 200);
    assert!(text.contains("better serve developers worldwide."));

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.dialog.as_ref().unwrap().scroll, clamped.saturating_sub(1));
}
