use crate::{
    app::{App, AppMode, HomeFocus},
    components::{
        info_lines, prompt_line, render_pagination_bar, render_panel, render_popup_with_block,
        render_post_card, PaginationBarConfig, PanelConfig, PostCardConfig, CARD_HEIGHT,
    },
    dialog::TerminalDialog,
    keybindings::{KeybindingProvider, KeybindingRegistry},
    markdown_renderer::render_article,
    post_view::PostView,
    theme::*,
};
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const SITE_NAME: &str = "Stdout Journal";

pub fn render(app: &mut App, frame: &mut Frame) {
    frame.render_widget(Block::default().style(base()), frame.area());

    let area = frame.area();
    if app.base_mode() == &AppMode::Welcome {
        render_welcome(app, frame, area);
        return;
    }

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    render_header(app, frame, header);

    if app.base_mode() == &AppMode::Post {
        render_post(app, frame, body);
    } else {
        render_home(app, frame, body);
    }

    render_footer(app, frame, footer);

    if let Some(banner) = &app.banner {
        banner.render(frame, body);
    }

    let cursor_visible = app.cursor.is_visible();
    let prompt = app.config.prompt();
    if let Some(dialog) = app.dialog.as_mut() {
        render_dialog(frame, dialog, &prompt, cursor_visible);
    }

    if matches!(app.mode, AppMode::Help(_)) {
        render_help(app, frame);
    }
}

fn cursor_glyph(app: &App, glyph: &'static str) -> &'static str {
    blink(app.cursor.is_visible(), glyph)
}

fn blink(visible: bool, glyph: &'static str) -> &'static str {
    if visible {
        glyph
    } else {
        " "
    }
}

fn render_welcome(app: &App, frame: &mut Frame, area: Rect) {
    let Some(welcome) = &app.welcome else {
        return;
    };

    let mut greeting = vec![
        Span::styled("> ", label_text()),
        Span::styled(welcome.greeting.visible_text().to_string(), title_text()),
    ];
    if app.cursor.is_visible() {
        greeting.push(Span::styled("█", normal_text()));
    }

    let lines = vec![
        Line::from(greeting),
        Line::from(""),
        Line::from(Span::styled("Loading system resources...", muted_text())),
    ];

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(unfocused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let logo = Line::from(vec![
        Span::styled(SITE_NAME, title_text()),
        Span::styled(cursor_glyph(app, "_"), label_text()),
    ]);

    let mut nav = Vec::new();
    for (idx, item) in app.nav_items.iter().enumerate() {
        if idx > 0 {
            nav.push(Span::raw(" "));
        }
        nav.push(Span::styled(format!("[{}] ", idx + 1), muted_text()));
        nav.push(Span::styled(item.label.clone(), normal_text()));
    }

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Min(0)]).areas(inner);
    frame.render_widget(Paragraph::new(logo), left);
    frame.render_widget(
        Paragraph::new(Line::from(nav)).alignment(Alignment::Right),
        right,
    );
}

fn render_home(app: &App, frame: &mut Frame, area: Rect) {
    let [intro, posts, listing_footer, pagination] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let intro_prompt = format!("{}@codeterminal", app.config.prompt_user);
    render_panel(
        frame,
        intro,
        &PanelConfig::new(&intro_prompt, "cat welcome.txt"),
        Paragraph::new(Span::styled(
            "Notes on terminals, systems and the code in between. Pick a post with j/k and press Enter.",
            excerpt_text(),
        ))
        .wrap(Wrap { trim: true }),
    );

    render_post_list(app, frame, posts);

    let prompt = app.config.prompt();
    let footer_line = prompt_line(
        &prompt,
        &format!(
            "| Showing page {} of {}",
            app.paginator.current_page(),
            app.paginator.total_pages()
        ),
    );
    frame.render_widget(Paragraph::new(footer_line), listing_footer);

    let focused_page =
        (app.home_focus == HomeFocus::Pagination).then_some(app.pager_cursor);
    render_pagination_bar(
        frame,
        pagination,
        &PaginationBarConfig::new(&app.paginator)
            .cursor_visible(app.cursor.is_visible())
            .focused_page(focused_page),
    );
}

fn render_post_list(app: &App, frame: &mut Frame, area: Rect) {
    let prompt = app.config.prompt();
    let panel = PanelConfig::new(&prompt, "ls -la /posts")
        .focused(app.home_focus == HomeFocus::Posts && app.dialog.is_none());
    let block = panel.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let posts = app.page_posts();
    if posts.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No posts found.", muted_text())),
            inner,
        );
        return;
    }

    let selected = app.post_selection.get();
    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
    let first = first_visible_card(selected, visible);

    let mut y = inner.y;
    for (idx, post) in posts.iter().enumerate().skip(first).take(visible) {
        let height = CARD_HEIGHT.min((inner.y + inner.height).saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, height);
        let (typed_title, is_typing) = match app.card_titles.get(idx) {
            Some(title) => (title.visible_text(), !title.is_done()),
            None => (post.title.as_str(), false),
        };
        render_post_card(
            frame,
            card_area,
            &PostCardConfig {
                post,
                typed_title,
                is_typing,
                cursor_visible: app.cursor.is_visible(),
                is_selected: selected == Some(idx),
            },
        );
        y += CARD_HEIGHT;
    }
}

/// First card to draw so that the selected one stays on screen when only
/// `visible` cards fit.
fn first_visible_card(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(idx) if idx >= visible => idx + 1 - visible,
        _ => 0,
    }
}

fn post_content_lines(view: &PostView) -> Vec<Line<'static>> {
    let mut lines = render_article(&view.blocks);

    if !view.article.related.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "$ ls -la ./related-posts",
            label_text(),
        )));
        for related in &view.article.related {
            lines.push(Line::from(vec![
                Span::styled("▸ ", excerpt_text()),
                Span::styled(
                    related.title.clone(),
                    normal_text().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", related.blurb),
                muted_text(),
            )));
        }
    }
    lines
}

fn render_post(app: &mut App, frame: &mut Frame, area: Rect) {
    let cursor_visible = app.cursor.is_visible();
    let prompt = app.config.prompt();
    let Some(view) = app.post_view.as_mut() else {
        return;
    };

    let [back, title, meta, content] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("$ ", label_text()),
            Span::styled("cd ..", normal_text().add_modifier(Modifier::UNDERLINED)),
        ])),
        back,
    );

    let mut title_spans = vec![
        Span::styled("$ ", label_text()),
        Span::styled(view.title.visible_text().to_string(), title_text()),
    ];
    if view.is_loading() && cursor_visible {
        title_spans.push(Span::styled("█", normal_text()));
    }
    frame.render_widget(Paragraph::new(Line::from(title_spans)), title);

    let article = &view.article;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(article.date.to_string(), label_text()),
            Span::styled("  |  ", muted_text()),
            Span::styled(article.author.clone(), excerpt_text()),
            Span::styled("  |  ", muted_text()),
            Span::styled(article.read_time.clone(), excerpt_text()),
        ])),
        meta,
    );

    let panel = PanelConfig::new(&prompt, "cat post.md").focused(true);
    let block = panel.block();
    let inner = block.inner(content);
    let widget = Paragraph::new(post_content_lines(view)).wrap(Wrap { trim: false });
    view.clamp_scroll(widget.line_count(inner.width), inner.height);

    let widget = widget.scroll((view.scroll, 0)).block(block);
    frame.render_widget(widget, content);
}

fn render_dialog(
    frame: &mut Frame,
    dialog: &mut TerminalDialog,
    prompt: &str,
    cursor_visible: bool,
) {
    let title = format!(" {} ", dialog.page.title);
    let inner = render_popup_with_block(frame, title, 70, 70);

    let [title_bar_area, prompt_area, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let mut typed = dialog.title.visible_text().to_string();
    if !dialog.title.is_done() {
        typed.push_str(blink(cursor_visible, "█"));
    }
    frame.render_widget(
        Paragraph::new(format!(" ● ● ●  {typed}")).style(title_bar()),
        title_bar_area,
    );

    let command = format!("cat {}", dialog.page.file_name());
    frame.render_widget(Paragraph::new(prompt_line(prompt, &command)), prompt_area);

    let body = Paragraph::new(info_lines(&dialog.page)).wrap(Wrap { trim: false });
    dialog.clamp_scroll(body.line_count(content.width), content.height);
    frame.render_widget(body.scroll((dialog.scroll, 0)), content);

    frame.render_widget(
        Paragraph::new(prompt_line(prompt, blink(cursor_visible, "|"))),
        footer,
    );

    if dialog.scanlines_on() {
        let buf = frame.buffer_mut();
        for row in (inner.y..inner.y + inner.height).step_by(2) {
            buf.set_style(
                Rect::new(inner.x, row, inner.width, 1),
                Style::default().add_modifier(Modifier::DIM),
            );
        }
    }
}

fn render_help(app: &App, frame: &mut Frame) {
    let context = KeybindingRegistry::get_provider(app).get_context();
    let inner = render_popup_with_block(frame, format!(" Help - {} ", context.name), 60, 60);

    let key_width = context
        .bindings
        .iter()
        .map(|b| b.key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = context
        .bindings
        .iter()
        .map(|binding| {
            Line::from(vec![
                Span::styled(format!("  {:<key_width$}  ", binding.key), label_text()),
                Span::styled(binding.description.clone(), normal_text()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        muted_text(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(unfocused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let year = chrono::Local::now().year();
    let prompt = app.config.prompt();
    let echo = format!("echo \"© {year} {SITE_NAME}. All rights reserved.\"");
    let hints = KeybindingRegistry::get_provider(app)
        .get_context()
        .footer_hint();

    let [copyright, keys] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(prompt_line(&prompt, &echo)), copyright);
    frame.render_widget(Paragraph::new(Span::styled(hints, muted_text())), keys);
}
