use crate::theme::{active_page, disabled_control, focused_border, normal_text, unfocused_border};
use journal_core::{PageMarker, Paginator};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const ELLIPSIS: &str = "…";

pub struct PaginationBarConfig<'a> {
    pub paginator: &'a Paginator,
    pub cursor_visible: bool,
    /// Page under the marker cursor when the bar has focus.
    pub focused_page: Option<usize>,
}

impl<'a> PaginationBarConfig<'a> {
    pub fn new(paginator: &'a Paginator) -> Self {
        Self {
            paginator,
            cursor_visible: false,
            focused_page: None,
        }
    }

    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    pub fn focused_page(mut self, page: Option<usize>) -> Self {
        self.focused_page = page;
        self
    }
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        normal_text()
    } else {
        disabled_control()
    }
}

/// `« Prev  1  … 4  5_ 6  … 10  Next »`
pub fn pagination_line(config: &PaginationBarConfig) -> Line<'static> {
    let paginator = config.paginator;
    let active = paginator.current_page();

    let mut spans = vec![Span::styled("« Prev", control_style(paginator.has_prev()))];

    for marker in paginator.window() {
        spans.push(Span::raw(" "));
        match marker {
            PageMarker::Page(page) if page == active => {
                let cursor = if config.cursor_visible { "_" } else { " " };
                let mut style = active_page();
                if config.focused_page == Some(page) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                spans.push(Span::styled(format!(" {page}{cursor}"), style));
            }
            PageMarker::Page(page) => {
                let mut style = normal_text();
                if config.focused_page == Some(page) {
                    style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
                }
                spans.push(Span::styled(format!(" {page} "), style));
            }
            PageMarker::Elision => {
                spans.push(Span::styled(format!(" {ELLIPSIS} "), normal_text()));
            }
        }
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled("Next »", control_style(paginator.has_next())));

    Line::from(spans)
}

/// The numeric marker next to `from` in `markers`, skipping elisions.
pub fn neighbour_page(markers: &[PageMarker], from: usize, forward: bool) -> Option<usize> {
    let pages = markers.iter().filter_map(|m| m.page());
    if forward {
        pages.filter(|&p| p > from).min()
    } else {
        pages.filter(|&p| p < from).max()
    }
}

pub fn render_pagination_bar(frame: &mut Frame, area: Rect, config: &PaginationBarConfig) {
    let border = if config.focused_page.is_some() {
        focused_border()
    } else {
        unfocused_border()
    };
    let widget = Paragraph::new(pagination_line(config))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::PageMarker::{Elision, Page};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_line_shows_cursor_on_active_page() {
        let mut paginator = Paginator::new(30, 3);
        paginator.set_page(5);

        let line = pagination_line(&PaginationBarConfig::new(&paginator).cursor_visible(true));
        assert_eq!(text(&line), "« Prev  1   …   4   5_  6   …   10  Next »");
    }

    #[test]
    fn test_line_hides_cursor_keeping_width() {
        let paginator = Paginator::new(5, 3);
        let on = pagination_line(&PaginationBarConfig::new(&paginator).cursor_visible(true));
        let off = pagination_line(&PaginationBarConfig::new(&paginator));

        assert_eq!(text(&on).chars().count(), text(&off).chars().count());
        assert!(text(&on).contains(" 1_"));
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        let paginator = Paginator::new(10, 3);
        let line = pagination_line(&PaginationBarConfig::new(&paginator));

        assert_eq!(line.spans[0].style, disabled_control());
        assert_eq!(line.spans.last().unwrap().style, normal_text());
    }

    #[test]
    fn test_neighbour_page_skips_elisions() {
        let markers = vec![Page(1), Elision, Page(4), Page(5), Page(6), Elision, Page(10)];

        assert_eq!(neighbour_page(&markers, 4, false), Some(1));
        assert_eq!(neighbour_page(&markers, 6, true), Some(10));
        assert_eq!(neighbour_page(&markers, 10, true), None);
        assert_eq!(neighbour_page(&markers, 1, false), None);
    }
}
