use crate::cli::PostsArgs;
use crate::context::CliContext;
use crate::output;
use journal_core::JournalError;
use journal_domain::{ContentBlock, PostId, PostSource, RelatedPost};
use serde::Serialize;

#[derive(Serialize)]
struct ArticleView {
    id: PostId,
    title: String,
    date: String,
    author: String,
    read_time: String,
    blocks: Vec<ContentBlock>,
    related: Vec<RelatedPost>,
}

pub fn handle_posts(ctx: &CliContext, args: PostsArgs) -> anyhow::Result<()> {
    let listing = ctx.listing(args.page, args.per_page);
    tracing::debug!(
        "Listing page {} of {} ({} posts)",
        listing.page,
        listing.total_pages,
        listing.posts.len()
    );
    output::output_success(&listing)
}

pub fn handle_show(ctx: &CliContext, id: PostId) -> anyhow::Result<()> {
    match ctx.source.article(id) {
        Ok(article) => {
            let view = ArticleView {
                blocks: article.blocks(),
                id: article.id,
                title: article.title,
                date: article.date.to_string(),
                author: article.author,
                read_time: article.read_time,
                related: article.related,
            };
            output::output_success(&view)
        }
        Err(err @ JournalError::NotFound(_)) => output::output_error(&err.to_string()),
        Err(err) => Err(err.into()),
    }
}
