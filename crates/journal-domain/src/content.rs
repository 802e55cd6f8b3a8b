use serde::Serialize;

const FENCE: &str = "```";
const HEADING_PREFIX: &str = "## ";

/// A paragraph of article content, classified for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { text: String },
    Paragraph { text: String },
    Code { language: String, body: String },
}

impl ContentBlock {
    /// Classify one raw paragraph.
    ///
    /// A fenced block keeps everything between its first and last line; a
    /// `## ` prefix marks a heading; anything else is a paragraph.
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix(FENCE) {
            let language = rest.lines().next().unwrap_or_default().trim().to_string();
            let lines: Vec<&str> = raw.split('\n').collect();
            let body = if lines.len() > 2 {
                lines[1..lines.len() - 1].join("\n")
            } else {
                String::new()
            };
            return ContentBlock::Code { language, body };
        }

        if let Some(text) = raw.strip_prefix(HEADING_PREFIX) {
            return ContentBlock::Heading {
                text: text.to_string(),
            };
        }

        ContentBlock::Paragraph {
            text: raw.to_string(),
        }
    }

    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Vec<Self> {
        raw.iter().map(|p| Self::parse(p.as_ref())).collect()
    }
}
