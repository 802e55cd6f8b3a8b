use crate::theme::{card_border, excerpt_text, label_text, normal_text, title_text};
use journal_domain::PostSummary;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a card needs: border, title, two excerpt rows, read-more, border.
pub const CARD_HEIGHT: u16 = 6;

pub struct PostCardConfig<'a> {
    pub post: &'a PostSummary,
    /// Title as typed so far.
    pub typed_title: &'a str,
    pub is_typing: bool,
    pub cursor_visible: bool,
    pub is_selected: bool,
}

/// Title, excerpt and read-more rows.
pub fn post_card_lines(config: &PostCardConfig) -> [Line<'static>; 3] {
    let mut title = vec![
        Span::styled("$ ", normal_text()),
        Span::styled(config.typed_title.to_string(), title_text()),
    ];
    if config.is_typing && config.cursor_visible {
        title.push(Span::styled("█", normal_text()));
    }

    let read_more_marker = if config.is_selected && config.cursor_visible {
        " ◂"
    } else {
        "  "
    };
    let mut read_more_style = normal_text();
    if config.is_selected {
        read_more_style = read_more_style.add_modifier(Modifier::BOLD);
    }

    [
        Line::from(title),
        Line::from(Span::styled(config.post.excerpt.clone(), excerpt_text())),
        Line::from(vec![
            Span::styled("cat read_more.md", read_more_style),
            Span::styled(read_more_marker, read_more_style),
        ]),
    ]
}

pub fn render_post_card(frame: &mut Frame, area: Rect, config: &PostCardConfig) {
    let border_type = if config.is_selected {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(card_border(config.is_selected))
        .title_top(
            Line::from(Span::styled(format!(" {} ", config.post.date), label_text()))
                .right_aligned(),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, excerpt, read_more] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .areas(inner);

    let [t, e, r] = post_card_lines(config);
    frame.render_widget(Paragraph::new(t), title);
    frame.render_widget(Paragraph::new(e).wrap(Wrap { trim: true }), excerpt);
    frame.render_widget(Paragraph::new(r), read_more);
}
