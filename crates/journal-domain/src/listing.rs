use crate::post::PostSummary;
use journal_core::{PageMarker, Paginator};
use serde::Serialize;

/// One page of the post list together with its pagination markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostListing {
    pub page: usize,
    pub total_pages: usize,
    pub per_page: usize,
    pub posts: Vec<PostSummary>,
    pub markers: Vec<PageMarker>,
}

impl PostListing {
    pub fn build(posts: &[PostSummary], paginator: &Paginator) -> Self {
        Self {
            page: paginator.current_page(),
            total_pages: paginator.total_pages(),
            per_page: paginator.page_size(),
            posts: paginator.slice(posts).to_vec(),
            markers: paginator.window(),
        }
    }
}

/// Receives page selections from a pagination control. The implementor owns
/// the authoritative current page and re-renders the list.
pub trait PageChangeHandler {
    fn on_page_change(&mut self, page: usize);
}
