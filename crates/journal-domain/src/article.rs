use crate::content::ContentBlock;
use crate::post::PostId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPost {
    pub title: String,
    pub blurb: String,
}

impl RelatedPost {
    pub fn new(title: impl Into<String>, blurb: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blurb: blurb.into(),
        }
    }
}

/// A full post as shown on its own page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: PostId,
    pub title: String,
    pub date: NaiveDate,
    pub author: String,
    pub read_time: String,
    /// Raw paragraphs; see [`ContentBlock::parse`] for the format.
    pub content: Vec<String>,
    #[serde(default)]
    pub related: Vec<RelatedPost>,
}

impl Article {
    pub fn blocks(&self) -> Vec<ContentBlock> {
        ContentBlock::parse_all(&self.content)
    }
}
