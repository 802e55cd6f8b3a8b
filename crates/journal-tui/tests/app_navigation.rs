use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use journal_core::{AppConfig, JournalError, JournalResult};
use journal_domain::{Article, MockCatalog, PostId, PostSource, PostSummary};
use journal_tui::dialog::DialogKind;
use journal_tui::{App, AppMode, HomeFocus};
use std::time::{Duration, Instant};

mockall::mock! {
    pub Source {}

    impl PostSource for Source {
        fn list_posts(&self) -> Vec<PostSummary>;
        fn article(&self, id: PostId) -> JournalResult<Article>;
    }
}

fn config() -> AppConfig {
    AppConfig {
        show_welcome: false,
        ..AppConfig::default()
    }
}

fn app() -> App {
    App::new(config(), Box::new(MockCatalog::new()))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn press_char(app: &mut App, c: char) {
    press(app, KeyCode::Char(c));
}

#[test]
fn test_starts_on_first_page_with_first_post_selected() {
    let app = app();

    assert_eq!(app.mode, AppMode::Home);
    assert_eq!(app.paginator.current_page(), 1);
    assert_eq!(app.paginator.total_pages(), 2);
    assert_eq!(app.page_posts().len(), 3);
    assert_eq!(app.post_selection.get(), Some(0));
    assert_eq!(app.card_titles.len(), 3);
}

#[test]
fn test_welcome_skipped_by_any_key() {
    let mut app = App::new(AppConfig::default(), Box::new(MockCatalog::new()));
    assert_eq!(app.mode, AppMode::Welcome);

    press_char(&mut app, 'x');

    assert_eq!(app.mode, AppMode::Home);
    assert!(app.welcome.is_none());
}

#[test]
fn test_welcome_dismisses_itself_after_hold() {
    let mut app = App::new(AppConfig::default(), Box::new(MockCatalog::new()));
    let later = Instant::now() + Duration::from_secs(10);

    app.on_tick(later);
    assert_eq!(app.mode, AppMode::Welcome);

    app.on_tick(later + Duration::from_secs(2));
    assert_eq!(app.mode, AppMode::Home);
}

#[test]
fn test_page_keys_move_between_pages() {
    let mut app = app();

    press_char(&mut app, 'j');
    assert_eq!(app.post_selection.get(), Some(1));

    press_char(&mut app, 'l');
    assert_eq!(app.paginator.current_page(), 2);
    assert_eq!(app.page_posts().len(), 2);
    assert_eq!(app.post_selection.get(), Some(0));
    assert_eq!(app.card_titles.len(), 2);

    press_char(&mut app, 'n');
    assert_eq!(app.paginator.current_page(), 2);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.paginator.current_page(), 1);

    press_char(&mut app, 'G');
    assert_eq!(app.paginator.current_page(), 2);
    press_char(&mut app, 'g');
    assert_eq!(app.paginator.current_page(), 1);
}

#[test]
fn test_pagination_focus_selects_marker() {
    let mut app = app();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.home_focus, HomeFocus::Pagination);
    assert_eq!(app.pager_cursor, 1);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.pager_cursor, 2);
    assert_eq!(app.paginator.current_page(), 1);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.paginator.current_page(), 2);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.home_focus, HomeFocus::Posts);
}

#[test]
fn test_enter_opens_selected_post_and_escape_returns() {
    let mut app = app();

    press_char(&mut app, 'j');
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Post);
    let view = app.post_view.as_ref().unwrap();
    assert_eq!(view.article.id, 2);
    assert!(view.is_loading());

    press_char(&mut app, 'j');
    assert_eq!(app.post_view.as_ref().unwrap().scroll, 1);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, AppMode::Home);
    assert!(app.post_view.is_none());
}

#[test]
fn test_tick_finishes_typing() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);

    app.on_tick(Instant::now() + Duration::from_secs(30));

    assert!(app.card_titles.iter().all(|title| title.is_done()));
    assert!(!app.post_view.as_ref().unwrap().is_loading());
}

#[test]
fn test_nav_items_open_dialogs_and_go_home() {
    let mut app = app();

    press_char(&mut app, '2');
    assert_eq!(app.dialog.as_ref().map(|d| d.kind), Some(DialogKind::About));

    press_char(&mut app, 'q');
    assert!(app.dialog.is_none());
    assert!(!app.should_quit);

    press_char(&mut app, '3');
    assert_eq!(app.dialog.as_ref().map(|d| d.kind), Some(DialogKind::Contact));
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, AppMode::Post);
    press_char(&mut app, '1');
    assert_eq!(app.mode, AppMode::Home);
}

#[test]
fn test_dialog_swallows_other_keys() {
    let mut app = app();

    press_char(&mut app, 'c');
    press_char(&mut app, 'l');
    press(&mut app, KeyCode::Down);

    assert_eq!(app.paginator.current_page(), 1);
    assert_eq!(app.dialog.as_ref().unwrap().scroll, 1);
}

#[test]
fn test_help_closes_on_any_key() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);

    press_char(&mut app, '?');
    assert_eq!(app.mode, AppMode::Help(Box::new(AppMode::Post)));

    press_char(&mut app, 'z');
    assert_eq!(app.mode, AppMode::Post);
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press_char(&mut app, 'q');
    assert!(app.should_quit);

    let mut app = self::app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = app();
    let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;

    app.handle_key(key);
    assert!(!app.should_quit);
}

#[test]
fn test_missing_article_shows_banner() {
    let mut source = MockSource::new();
    source.expect_list_posts().returning(|| {
        vec![PostSummary::new(
            7,
            "Ghost post",
            "Listed but never written.",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )]
    });
    source
        .expect_article()
        .withf(|id| *id == 7)
        .times(1)
        .returning(|id| Err(JournalError::NotFound(format!("post {id}"))));

    let mut app = App::new(config(), Box::new(source));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Home);
    assert!(app.banner.as_ref().unwrap().message.contains("post 7"));
}

#[test]
fn test_empty_source_has_single_page() {
    let mut source = MockSource::new();
    source.expect_list_posts().returning(Vec::new);
    source.expect_article().never();

    let mut app = App::new(config(), Box::new(source));
    assert_eq!(app.paginator.total_pages(), 1);
    assert_eq!(app.post_selection.get(), None);

    press(&mut app, KeyCode::Enter);
    press_char(&mut app, 'l');
    assert_eq!(app.mode, AppMode::Home);
    assert_eq!(app.paginator.current_page(), 1);
}

fn summary(id: PostId, read_more_link: &str) -> PostSummary {
    PostSummary {
        read_more_link: read_more_link.to_string(),
        ..PostSummary::new(
            id,
            "Moved post",
            "Its link points elsewhere.",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
    }
}

#[test]
fn test_enter_follows_read_more_link() {
    let mut source = MockSource::new();
    source
        .expect_list_posts()
        .returning(|| vec![summary(7, "#post-9")]);
    source
        .expect_article()
        .withf(|id| *id == 9)
        .times(1)
        .returning(|id| MockCatalog::new().article(id % 5 + 1).map(|a| Article { id, ..a }));

    let mut app = App::new(config(), Box::new(source));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Post);
    assert_eq!(app.post_view.as_ref().unwrap().article.id, 9);
}

#[test]
fn test_malformed_read_more_link_shows_banner() {
    let mut source = MockSource::new();
    source
        .expect_list_posts()
        .returning(|| vec![summary(7, "read-more")]);
    source.expect_article().never();

    let mut app = App::new(config(), Box::new(source));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Home);
    assert!(app.banner.as_ref().unwrap().message.contains("read-more"));
}

#[test]
fn test_back_from_post_retypes_card_titles() {
    let mut app = app();
    app.on_tick(Instant::now() + Duration::from_secs(30));
    assert!(app.card_titles.iter().all(|title| title.is_done()));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    assert!(app.card_titles.iter().all(|title| title.visible_text().is_empty()));
}
