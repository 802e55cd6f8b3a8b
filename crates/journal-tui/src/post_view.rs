use journal_core::Typewriter;
use journal_domain::{Article, ContentBlock};
use std::time::{Duration, Instant};

/// State of the single-post page.
#[derive(Debug, Clone)]
pub struct PostView {
    pub article: Article,
    pub blocks: Vec<ContentBlock>,
    pub title: Typewriter,
    pub scroll: u16,
}

impl PostView {
    pub fn new(article: Article, typing_step: Duration, now: Instant) -> Self {
        let title = Typewriter::starting_at(article.title.clone(), typing_step, now);
        let blocks = article.blocks();
        Self {
            article,
            blocks,
            title,
            scroll: 0,
        }
    }

    /// The title is still being typed out.
    pub fn is_loading(&self) -> bool {
        !self.title.is_done()
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Keep the scroll offset inside content of `content_rows` rows shown in
    /// a viewport of `viewport_rows`.
    pub fn clamp_scroll(&mut self, content_rows: usize, viewport_rows: u16) {
        let max = content_rows.saturating_sub(viewport_rows as usize);
        self.scroll = self.scroll.min(max.min(u16::MAX as usize) as u16);
    }
}
