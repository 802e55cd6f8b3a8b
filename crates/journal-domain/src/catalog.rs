use crate::article::{Article, RelatedPost};
use crate::post::{PostId, PostSummary};
use chrono::NaiveDate;
use journal_core::{JournalError, JournalResult};

/// Where posts come from. The app only ever reads through this trait, so
/// the compiled-in catalog can be swapped for a real source.
#[cfg_attr(test, mockall::automock)]
pub trait PostSource {
    /// All posts, newest first.
    fn list_posts(&self) -> Vec<PostSummary>;

    fn article(&self, id: PostId) -> JournalResult<Article>;
}

/// Compiled-in sample content.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    posts: Vec<PostSummary>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            posts: sample_posts(),
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PostSource for MockCatalog {
    fn list_posts(&self) -> Vec<PostSummary> {
        self.posts.clone()
    }

    fn article(&self, id: PostId) -> JournalResult<Article> {
        if !self.posts.iter().any(|post| post.id == id) {
            return Err(JournalError::NotFound(format!("post {id}")));
        }
        tracing::debug!(post_id = id, "loading sample article");
        Ok(sample_article(id))
    }
}

fn sample_posts() -> Vec<PostSummary> {
    vec![
        PostSummary::new(
            1,
            "Getting Started with Terminal Commands",
            "Learn the essential terminal commands every developer should know. This guide covers navigation, file manipulation, and basic system operations.",
            date(2023, 5, 15),
        ),
        PostSummary::new(
            2,
            "Building a React App from Scratch",
            "A step-by-step tutorial on creating a React application without using create-react-app. Learn about webpack configuration, babel, and project structure.",
            date(2023, 5, 10),
        ),
        PostSummary::new(
            3,
            "CSS Grid vs Flexbox: When to Use Each",
            "An in-depth comparison of CSS Grid and Flexbox layout systems. Understand their strengths, weaknesses, and ideal use cases for modern web design.",
            date(2023, 5, 5),
        ),
        PostSummary::new(
            4,
            "JavaScript Promises Explained",
            "Demystifying JavaScript Promises and asynchronous programming. Learn how to write cleaner, more maintainable code for handling async operations.",
            date(2023, 4, 28),
        ),
        PostSummary::new(
            5,
            "Optimizing Website Performance",
            "Practical techniques to improve your website's loading speed and overall performance. Covers image optimization, code splitting, and caching strategies.",
            date(2023, 4, 20),
        ),
    ]
}

fn sample_article(id: PostId) -> Article {
    let content = [
        "In this tutorial, we'll explore how to create a terminal-inspired blog. The aesthetic combines the nostalgic charm of command-line interfaces with modern functionality.",
        "## Getting Started",
        "First, let's set up the project with the necessary dependencies. We'll use a small styling layer and some custom animations to achieve the terminal effect.",
        "```bash\ncargo new terminal-blog\ncd terminal-blog\ncargo add ratatui crossterm\n```",
        "## Creating the Terminal Aesthetic",
        "The key to achieving a convincing terminal look is in the details: monospace fonts, a dark background with bright text, and subtle animations like cursor blinking and typing effects.",
        "```rust\n// Terminal-inspired container\nlet block = Block::default()\n    .borders(Borders::ALL)\n    .border_style(Style::default().fg(Color::Green));\n```",
        "## Adding Typing Effects",
        "To create the illusion of text being typed out in real-time, reveal the text character by character on a timer and stop once the whole string is visible.",
        "```rust\nif typed.len() < target.len() {\n    typed.push(next_char);\n}\n```",
        "## Conclusion",
        "With these techniques, you can create a unique and engaging blog experience that stands out from typical designs. The terminal aesthetic not only looks cool but can also enhance the reading experience for technical content.",
        "Remember that while visual effects are fun, they should enhance rather than detract from the readability of your content. Balance is key!",
    ];

    Article {
        id,
        title: "Building a Terminal-Inspired Blog".to_string(),
        date: date(2023, 5, 15),
        author: "Stdout User".to_string(),
        read_time: "5 min read".to_string(),
        content: content.iter().map(|p| p.to_string()).collect(),
        related: vec![
            RelatedPost::new(
                "Creating Custom Terminal Commands",
                "Explore how to build your own CLI tools...",
            ),
            RelatedPost::new(
                "Terminal Productivity Hacks",
                "Boost your workflow with these terminal tips...",
            ),
        ],
    }
}
