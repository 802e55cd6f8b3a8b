use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn base() -> Style {
    Style::default().fg(PRIMARY).bg(BACKGROUND)
}

pub fn normal_text() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn excerpt_text() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn label_text() -> Style {
    Style::default().fg(BRIGHT)
}

pub fn muted_text() -> Style {
    Style::default().fg(MUTED)
}

pub fn prompt_user() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD)
}

pub fn title_text() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn code_text() -> Style {
    Style::default().fg(BRIGHT).bg(CODE_BG)
}

pub fn focused_border() -> Style {
    Style::default().fg(BRIGHT)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(DIM_BORDER)
}

pub fn card_border(selected: bool) -> Style {
    if selected {
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(PRIMARY)
    }
}

pub fn active_page() -> Style {
    Style::default()
        .fg(BRIGHT)
        .bg(SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn disabled_control() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::DIM)
}

/// Black text on the green title strip of a terminal dialog.
pub fn title_bar() -> Style {
    Style::default()
        .fg(BACKGROUND)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(BACKGROUND)
}
