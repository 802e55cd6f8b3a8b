use journal_core::{AppConfig, Paginator};
use journal_domain::{MockCatalog, PostListing, PostSource};
use std::path::Path;

/// Everything a subcommand needs: resolved config and the post source.
pub struct CliContext {
    pub config: AppConfig,
    pub source: Box<dyn PostSource>,
}

impl CliContext {
    pub fn load(config_path: Option<&Path>) -> Self {
        let config = match config_path {
            Some(path) => AppConfig::load_or_default(path),
            None => AppConfig::load(),
        };
        tracing::debug!("Using config: {:?}", config);
        Self {
            config,
            source: Box::new(MockCatalog::new()),
        }
    }

    /// The listing for `page`, clamped into range.
    pub fn listing(&self, page: usize, per_page: Option<usize>) -> PostListing {
        let posts = self.source.list_posts();
        let per_page = per_page
            .filter(|&n| n > 0)
            .unwrap_or_else(|| self.config.effective_posts_per_page());
        let mut paginator =
            Paginator::new(posts.len(), per_page).with_max_direct(self.config.max_direct_pages);
        paginator.set_page(page);
        PostListing::build(&posts, &paginator)
    }
}
