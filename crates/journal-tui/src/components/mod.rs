pub mod banner;
pub mod info_page;
pub mod pagination_bar;
pub mod panel;
pub mod popup;
pub mod post_card;

pub use banner::*;
pub use info_page::*;
pub use pagination_bar::*;
pub use panel::*;
pub use popup::*;
pub use post_card::*;
