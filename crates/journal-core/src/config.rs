use crate::pagination::DEFAULT_MAX_DIRECT;
use crate::JournalResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_POSTS_PER_PAGE: usize = 3;
const DEFAULT_TYPING_MS: u64 = 100;
const DEFAULT_TITLE_TYPING_MS: u64 = 50;
const DEFAULT_CURSOR_BLINK_MS: u64 = 500;
const DEFAULT_TICK_RATE_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub posts_per_page: usize,
    pub max_direct_pages: usize,
    pub show_welcome: bool,
    pub typing_ms: u64,
    pub title_typing_ms: u64,
    pub cursor_blink_ms: u64,
    pub tick_rate_ms: u64,
    pub prompt_user: String,
    pub prompt_host: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            max_direct_pages: DEFAULT_MAX_DIRECT,
            show_welcome: true,
            typing_ms: DEFAULT_TYPING_MS,
            title_typing_ms: DEFAULT_TITLE_TYPING_MS,
            cursor_blink_ms: DEFAULT_CURSOR_BLINK_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            prompt_user: "user".to_string(),
            prompt_host: "stdout".to_string(),
        }
    }
}

fn or_default(value: u64, default: u64) -> Duration {
    Duration::from_millis(if value == 0 { default } else { value })
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/stdout-journal/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("stdout-journal/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("stdout-journal\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config location, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. A missing file yields defaults; a broken one is
    /// logged and also yields defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> JournalResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> JournalResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn effective_posts_per_page(&self) -> usize {
        if self.posts_per_page == 0 {
            DEFAULT_POSTS_PER_PAGE
        } else {
            self.posts_per_page
        }
    }

    pub fn typing_step(&self) -> Duration {
        or_default(self.typing_ms, DEFAULT_TYPING_MS)
    }

    pub fn title_typing_step(&self) -> Duration {
        or_default(self.title_typing_ms, DEFAULT_TITLE_TYPING_MS)
    }

    pub fn cursor_blink(&self) -> Duration {
        or_default(self.cursor_blink_ms, DEFAULT_CURSOR_BLINK_MS)
    }

    pub fn tick_rate(&self) -> Duration {
        or_default(self.tick_rate_ms, DEFAULT_TICK_RATE_MS)
    }

    /// `user@host` as shown in front of every prompt.
    pub fn prompt(&self) -> String {
        format!("{}@{}", self.prompt_user, self.prompt_host)
    }
}
