use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn target(&self) -> NavTarget {
        NavTarget::from_href(&self.href)
    }
}

/// Header links: Blog, About, Contact.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Blog", "/"),
        NavItem::new("About", "#about"),
        NavItem::new("Contact", "#contact"),
    ]
}

/// Where a link leads when nobody intercepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    About,
    Contact,
    Post(crate::post::PostId),
    Unknown(String),
}

impl NavTarget {
    pub fn from_href(href: &str) -> Self {
        match href {
            "/" | "/blog" => NavTarget::Home,
            "#about" | "/about" => NavTarget::About,
            "#contact" | "/contact" => NavTarget::Contact,
            other => other
                .strip_prefix("/blog/")
                .and_then(|id| id.parse().ok())
                .or_else(|| crate::post::parse_post_link(other))
                .map(NavTarget::Post)
                .unwrap_or_else(|| NavTarget::Unknown(other.to_string())),
        }
    }
}

/// Receives header link activations.
///
/// Returning `true` means the click was handled and default navigation must
/// not happen (used to open an in-page dialog instead of following a link).
pub trait NavHandler {
    fn on_nav_item_click(&mut self, href: &str) -> bool;
}
