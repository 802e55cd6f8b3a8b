pub mod article;
pub mod catalog;
pub mod content;
pub mod info;
pub mod listing;
pub mod nav;
pub mod post;

pub use article::{Article, RelatedPost};
pub use catalog::{MockCatalog, PostSource};
pub use content::ContentBlock;
pub use info::{about_page, contact_page, ContactChannel, InfoPage, InfoSection};
pub use listing::{PageChangeHandler, PostListing};
pub use nav::{default_nav_items, NavHandler, NavItem, NavTarget};
pub use post::{PostId, PostSummary};
