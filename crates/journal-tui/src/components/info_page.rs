use crate::theme::{excerpt_text, heading, label_text, muted_text, normal_text};
use journal_domain::{InfoPage, InfoSection};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

/// Lines for an About/Contact page; wrap them with a `Paragraph`.
pub fn info_lines(page: &InfoPage) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in &page.sections {
        match section {
            InfoSection::Heading { text } => {
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(text.clone(), heading())));
            }
            InfoSection::Paragraph { text } => {
                lines.push(Line::from(Span::styled(text.clone(), normal_text())));
                lines.push(Line::from(""));
            }
            InfoSection::Bullets { items } => {
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", label_text()),
                        Span::styled(item.clone(), normal_text()),
                    ]));
                }
                lines.push(Line::from(""));
            }
            InfoSection::Channel(channel) => {
                lines.push(Line::from(vec![
                    Span::styled("▸ ", excerpt_text()),
                    Span::styled(
                        channel.name.clone(),
                        normal_text().add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", channel.handle),
                    label_text(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", channel.note),
                    muted_text(),
                )));
                lines.push(Line::from(""));
            }
            InfoSection::Callout {
                title,
                command,
                text,
            } => {
                if let Some(title) = title {
                    lines.push(Line::from(Span::styled(
                        format!("┃ {title}"),
                        normal_text().add_modifier(Modifier::BOLD),
                    )));
                }
                lines.push(Line::from(Span::styled(format!("┃ $ {command}"), label_text())));
                lines.push(Line::from(vec![
                    Span::styled("┃ ", label_text()),
                    Span::styled(text.clone(), normal_text()),
                ]));
                lines.push(Line::from(""));
            }
        }
    }

    while lines.last().is_some_and(|line| line.spans.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_domain::{about_page, contact_page};

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_about_has_whoami_callout() {
        let text = plain(&info_lines(&about_page()));
        assert_eq!(text[0], "About Stdout Journal");
        assert!(text.iter().any(|l| l == "┃ $ whoami"));
        assert!(text.iter().any(|l| l.starts_with("  • ")));
    }

    #[test]
    fn test_contact_lists_handles_without_trailing_blank() {
        let lines = info_lines(&contact_page());
        let text = plain(&lines);

        assert!(text.iter().any(|l| l == "  hello@stdoutjournal.dev"));
        assert!(!lines.last().unwrap().spans.is_empty());
    }
}
