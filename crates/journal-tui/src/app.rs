use crate::{
    components::{neighbour_page, Banner, BANNER_TTL},
    dialog::{handle_dialog_key, DialogAction, DialogKind, TerminalDialog},
    events::{is_interrupt, Event, EventHandler},
    post_view::PostView,
    ui,
    welcome::WelcomeScreen,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use journal_core::{AppConfig, CursorBlink, JournalResult, Paginator, SelectionState, Typewriter};
use journal_domain::{
    default_nav_items, NavHandler, NavItem, NavTarget, PageChangeHandler, PostId, PostSource,
    PostSummary,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Welcome,
    Home,
    Post,
    /// Help popup over the mode it was opened from.
    Help(Box<AppMode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Posts,
    Pagination,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub config: AppConfig,
    source: Box<dyn PostSource>,
    pub posts: Vec<PostSummary>,
    pub paginator: Paginator,
    pub post_selection: SelectionState,
    pub home_focus: HomeFocus,
    /// Page marker under the cursor while the pagination bar has focus.
    pub pager_cursor: usize,
    pub nav_items: Vec<NavItem>,
    pub welcome: Option<WelcomeScreen>,
    /// One typewriter per card on the current page.
    pub card_titles: Vec<Typewriter>,
    pub cursor: CursorBlink,
    pub post_view: Option<PostView>,
    pub dialog: Option<TerminalDialog>,
    pub banner: Option<Banner>,
}

impl App {
    pub fn new(config: AppConfig, source: Box<dyn PostSource>) -> Self {
        let now = Instant::now();
        let posts = source.list_posts();
        let paginator = Paginator::new(posts.len(), config.effective_posts_per_page())
            .with_max_direct(config.max_direct_pages);

        let (mode, welcome) = if config.show_welcome {
            (
                AppMode::Welcome,
                Some(WelcomeScreen::new(config.typing_step(), now)),
            )
        } else {
            (AppMode::Home, None)
        };

        tracing::debug!(
            "Loaded {} posts over {} pages",
            posts.len(),
            paginator.total_pages()
        );

        let mut app = Self {
            should_quit: false,
            mode,
            cursor: CursorBlink::starting_at(config.cursor_blink(), now),
            config,
            source,
            posts,
            paginator,
            post_selection: SelectionState::new(),
            home_focus: HomeFocus::Posts,
            pager_cursor: 1,
            nav_items: default_nav_items(),
            welcome,
            card_titles: Vec::new(),
            post_view: None,
            dialog: None,
            banner: None,
        };
        app.reset_page_state(now);
        app
    }

    /// Posts shown on the current page.
    pub fn page_posts(&self) -> &[PostSummary] {
        self.paginator.slice(&self.posts)
    }

    pub fn selected_post(&self) -> Option<&PostSummary> {
        self.post_selection
            .get()
            .and_then(|idx| self.page_posts().get(idx))
    }

    /// Mode the app returns to once the help popup closes.
    pub fn base_mode(&self) -> &AppMode {
        match &self.mode {
            AppMode::Help(previous) => previous,
            other => other,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.cursor.tick(now);

        if let Some(welcome) = self.welcome.as_mut() {
            if welcome.tick(now) {
                self.enter_home();
            }
        }

        for title in &mut self.card_titles {
            title.tick(now);
        }

        if let Some(view) = self.post_view.as_mut() {
            view.title.tick(now);
        }

        if let Some(dialog) = self.dialog.as_mut() {
            dialog.tick(now);
        }

        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.is_expired_at(now, BANNER_TTL))
        {
            self.banner = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if is_interrupt(&key) {
            self.should_quit = true;
            return;
        }

        if let AppMode::Help(previous) = &self.mode {
            self.mode = (**previous).clone();
            return;
        }

        if let Some(dialog) = self.dialog.as_mut() {
            if let DialogAction::Close = handle_dialog_key(dialog, key) {
                tracing::debug!("Closing {:?} dialog", dialog.kind);
                self.dialog = None;
            }
            return;
        }

        match self.mode {
            AppMode::Welcome => self.enter_home(),
            AppMode::Home => self.handle_home_key(key),
            AppMode::Post => self.handle_post_key(key),
            AppMode::Help(_) => {}
        }
    }

    /// Keys available everywhere outside dialogs. Returns true if consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => {
                self.mode = AppMode::Help(Box::new(self.mode.clone()));
            }
            KeyCode::Char('a') => self.open_dialog(DialogKind::About),
            KeyCode::Char('c') => self.open_dialog(DialogKind::Contact),
            KeyCode::Char(digit @ '1'..='9') => {
                let idx = digit as usize - '1' as usize;
                self.activate_nav(idx);
            }
            _ => return false,
        }
        true
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }

        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            self.toggle_home_focus();
            return;
        }

        match self.home_focus {
            HomeFocus::Posts => self.handle_posts_key(key),
            HomeFocus::Pagination => self.handle_pagination_key(key),
        }
    }

    fn handle_posts_key(&mut self, key: KeyEvent) {
        let len = self.page_posts().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.post_selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.post_selection.prev(len),
            KeyCode::Enter => self.open_selected_post(),
            KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => {
                self.step_page(Paginator::next)
            }
            KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left => {
                self.step_page(Paginator::prev)
            }
            KeyCode::Char('g') | KeyCode::Home => self.step_page(Paginator::first),
            KeyCode::Char('G') | KeyCode::End => self.step_page(Paginator::last),
            _ => {}
        }
    }

    fn handle_pagination_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('l') | KeyCode::Right => {
                if let Some(page) = neighbour_page(&self.paginator.window(), self.pager_cursor, true)
                {
                    self.pager_cursor = page;
                }
            }
            KeyCode::Char('h') | KeyCode::Left => {
                if let Some(page) =
                    neighbour_page(&self.paginator.window(), self.pager_cursor, false)
                {
                    self.pager_cursor = page;
                }
            }
            KeyCode::Enter => self.request_page(self.pager_cursor),
            KeyCode::Esc => self.home_focus = HomeFocus::Posts,
            _ => {}
        }
    }

    fn handle_post_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.close_post(),
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(view) = self.post_view.as_mut() {
                    view.scroll_down(1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(view) = self.post_view.as_mut() {
                    view.scroll_up(1);
                }
            }
            KeyCode::PageDown => {
                if let Some(view) = self.post_view.as_mut() {
                    view.scroll_down(10);
                }
            }
            KeyCode::PageUp => {
                if let Some(view) = self.post_view.as_mut() {
                    view.scroll_up(10);
                }
            }
            KeyCode::Char(' ') => {
                if let Some(view) = self.post_view.as_mut() {
                    view.title.finish();
                }
            }
            _ => {}
        }
    }

    fn toggle_home_focus(&mut self) {
        self.home_focus = match self.home_focus {
            HomeFocus::Posts => {
                self.pager_cursor = self.paginator.current_page();
                HomeFocus::Pagination
            }
            HomeFocus::Pagination => HomeFocus::Posts,
        };
    }

    /// Follow the selected card's read-more link.
    fn open_selected_post(&mut self) {
        let Some(post) = self.selected_post() else {
            return;
        };
        match post.article_id() {
            Some(id) => self.open_post(id),
            None => {
                let link = post.read_more_link.clone();
                tracing::warn!("Malformed read-more link {}", link);
                self.banner = Some(Banner::error(format!("No route for {link}")));
            }
        }
    }

    /// Apply a paginator move to a copy and report the resulting page.
    fn step_page(&mut self, step: fn(&mut Paginator) -> bool) {
        let mut requested = self.paginator.clone();
        if step(&mut requested) {
            self.on_page_change(requested.current_page());
        }
    }

    /// Hands a page request to the page-change handler, ignoring requests
    /// that would not change anything.
    fn request_page(&mut self, page: usize) {
        if page == 0 || page > self.paginator.total_pages() {
            return;
        }
        if page != self.paginator.current_page() {
            self.on_page_change(page);
        }
    }

    /// Follow the header link at `idx` unless the intercept handles it.
    pub fn activate_nav(&mut self, idx: usize) {
        let Some(item) = self.nav_items.get(idx).cloned() else {
            return;
        };
        if self.on_nav_item_click(&item.href) {
            return;
        }

        match item.target() {
            NavTarget::Home => self.go_home(),
            NavTarget::About => self.open_dialog(DialogKind::About),
            NavTarget::Contact => self.open_dialog(DialogKind::Contact),
            NavTarget::Post(id) => self.open_post(id),
            NavTarget::Unknown(href) => {
                tracing::warn!("No route for link {}", href);
                self.banner = Some(Banner::error(format!("No route for {href}")));
            }
        }
    }

    pub fn open_dialog(&mut self, kind: DialogKind) {
        tracing::debug!("Opening {:?} dialog", kind);
        self.dialog = Some(TerminalDialog::open(
            kind,
            self.config.typing_step(),
            Instant::now(),
        ));
    }

    pub fn open_post(&mut self, id: PostId) {
        match self.source.article(id) {
            Ok(article) => {
                tracing::info!("Opening post {} ({})", id, article.title);
                self.post_view = Some(PostView::new(
                    article,
                    self.config.title_typing_step(),
                    Instant::now(),
                ));
                self.mode = AppMode::Post;
            }
            Err(err) => {
                tracing::warn!("Failed to open post {}: {}", id, err);
                self.banner = Some(Banner::error(err.to_string()));
            }
        }
    }

    /// Back to the list; card titles type out again as on first arrival.
    fn close_post(&mut self) {
        self.post_view = None;
        self.mode = AppMode::Home;
        let now = Instant::now();
        for title in &mut self.card_titles {
            title.restart(now);
        }
    }

    fn go_home(&mut self) {
        self.post_view = None;
        self.dialog = None;
        self.mode = AppMode::Home;
    }

    fn enter_home(&mut self) {
        self.welcome = None;
        self.mode = AppMode::Home;
        self.reset_page_state(Instant::now());
    }

    fn reset_page_state(&mut self, now: Instant) {
        let step = self.config.typing_step();
        self.post_selection = SelectionState::first_of(self.page_posts().len());
        self.card_titles = self
            .page_posts()
            .iter()
            .map(|post| Typewriter::starting_at(post.title.clone(), step, now))
            .collect();
    }

    pub async fn run(&mut self) -> JournalResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new(self.config.tick_rate());

        let result = loop {
            if let Err(err) = terminal.draw(|frame| ui::render(self, frame)) {
                break Err(err);
            }

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Tick) => self.on_tick(Instant::now()),
                Some(Event::Resize) => {}
                None => break Ok(()),
            }

            if self.should_quit {
                break Ok(());
            }
        };

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(result?)
    }
}

impl NavHandler for App {
    fn on_nav_item_click(&mut self, href: &str) -> bool {
        match NavTarget::from_href(href) {
            NavTarget::About if href.starts_with('#') => {
                self.open_dialog(DialogKind::About);
                true
            }
            NavTarget::Contact if href.starts_with('#') => {
                self.open_dialog(DialogKind::Contact);
                true
            }
            _ => false,
        }
    }
}

impl PageChangeHandler for App {
    fn on_page_change(&mut self, page: usize) {
        if self.paginator.set_page(page) {
            tracing::debug!(
                "Page changed to {} of {}",
                self.paginator.current_page(),
                self.paginator.total_pages()
            );
        }
        self.pager_cursor = self.paginator.current_page();
        self.reset_page_state(Instant::now());
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
