use crate::theme::{focused_border, popup_bg};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

/// Area of `percent_x` by `percent_y` centred in `area`.
pub fn centered_area(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y.min(100))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x.min(100))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Clear a centred box, draw its border and return the inner area.
pub fn render_popup_with_block<'a>(
    frame: &mut Frame,
    title: impl Into<Line<'a>>,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_area(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}
