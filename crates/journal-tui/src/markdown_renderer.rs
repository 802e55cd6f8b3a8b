use crate::theme::{code_text, heading, muted_text, normal_text};
use journal_domain::ContentBlock;
use pulldown_cmark::{CowStr, Event, Parser, Tag, TagEnd};
use ratatui::prelude::Stylize;
use ratatui::text::{Line, Span};

/// Render a prose paragraph (emphasis, strong, code spans) as lines.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let parser = Parser::new(text);
    let mut renderer = MarkdownRenderer::new();

    for event in parser {
        renderer.process_event(event);
    }

    renderer.finish()
}

/// Render article content blocks: headings, paragraphs and code listings.
pub fn render_article(blocks: &[ContentBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Heading { text } => {
                lines.push(Line::from(Span::styled(format!("## {text}"), heading())));
                lines.push(Line::from(""));
            }
            ContentBlock::Paragraph { text } => {
                lines.extend(render_markdown(text));
                lines.push(Line::from(""));
            }
            ContentBlock::Code { language, body } => {
                if !language.is_empty() {
                    lines.push(Line::from(Span::styled(format!("  ┌─ {language}"), muted_text())));
                }
                for spans in highlight_code(language, body) {
                    let mut line = vec![Span::styled("  │ ", muted_text())];
                    line.extend(spans);
                    lines.push(Line::from(line));
                }
                lines.push(Line::from(""));
            }
        }
    }

    while lines.last().is_some_and(|line| line.spans.is_empty()) {
        lines.pop();
    }
    lines
}

/// Inline renderer for prose paragraphs. Headings and fenced code are
/// classified before they get here, so block-level tags only break lines.
struct MarkdownRenderer {
    lines: Vec<Line<'static>>,
    current_line: Vec<Span<'static>>,
    in_emphasis: bool,
    in_strong: bool,
}

impl MarkdownRenderer {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current_line: Vec::new(),
            in_emphasis: false,
            in_strong: false,
        }
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.handle_tag_start(tag),
            Event::End(tag_end) => self.handle_tag_end(tag_end),
            Event::Text(text) => self.handle_text(text),
            Event::Code(code) => self.handle_inline_code(code),
            Event::SoftBreak => self.current_line.push(Span::raw(" ")),
            Event::HardBreak => self.flush_line(),
            _ => {}
        }
    }

    fn handle_tag_start(&mut self, tag: Tag) {
        match tag {
            Tag::Emphasis => self.in_emphasis = true,
            Tag::Strong => self.in_strong = true,
            Tag::Paragraph => self.flush_line(),
            _ => {}
        }
    }

    fn handle_tag_end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Emphasis => self.in_emphasis = false,
            TagEnd::Strong => self.in_strong = false,
            TagEnd::Paragraph => {
                self.flush_line();
                self.lines.push(Line::from(""));
            }
            TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock => self.flush_line(),
            _ => {}
        }
    }

    fn handle_text(&mut self, text: CowStr) {
        let mut style = normal_text();
        if self.in_strong {
            style = style.bold();
        }
        if self.in_emphasis {
            style = style.italic();
        }
        self.current_line.push(Span::styled(text.to_string(), style));
    }

    fn handle_inline_code(&mut self, code: CowStr) {
        self.current_line
            .push(Span::styled(format!("`{}`", code), code_text()));
    }

    fn flush_line(&mut self) {
        if !self.current_line.is_empty() {
            let line = Line::from(std::mem::take(&mut self.current_line));
            self.lines.push(line);
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Shell-ish comment dimming; everything else uses the code colour.
fn highlight_code(language: &str, code: &str) -> Vec<Vec<Span<'static>>> {
    let comment_prefix = match language {
        "bash" | "sh" | "shell" | "toml" | "python" => "#",
        _ => "//",
    };

    code.lines()
        .map(|line| {
            let style = if line.trim_start().starts_with(comment_prefix) {
                muted_text().italic()
            } else {
                code_text()
            };
            vec![Span::styled(line.to_string(), style)]
        })
        .collect()
}
