use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PostId = u32;

const POST_LINK_PREFIX: &str = "#post-";

/// What the home page shows for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_more_link: String,
}

impl PostSummary {
    pub fn new(id: PostId, title: impl Into<String>, excerpt: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            excerpt: excerpt.into(),
            date,
            read_more_link: format!("{POST_LINK_PREFIX}{id}"),
        }
    }

    /// Id of the article behind the read-more link (`#post-<id>`).
    pub fn article_id(&self) -> Option<PostId> {
        parse_post_link(&self.read_more_link)
    }
}

pub fn parse_post_link(link: &str) -> Option<PostId> {
    link.strip_prefix(POST_LINK_PREFIX)?.parse().ok()
}
