use crate::theme::{focused_border, label_text, prompt_user, unfocused_border};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered box whose title reads like a shell prompt, e.g.
/// `user@stdout:~$ cat welcome.txt`.
pub struct PanelConfig<'a> {
    pub prompt: &'a str,
    pub command: &'a str,
    pub is_focused: bool,
}

impl<'a> PanelConfig<'a> {
    pub fn new(prompt: &'a str, command: &'a str) -> Self {
        Self {
            prompt,
            command,
            is_focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn border_style(&self) -> ratatui::style::Style {
        if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(prompt_line(self.prompt, self.command))
    }
}

/// `<prompt>:~$ <command>` styled like a shell.
pub fn prompt_line<'a>(prompt: &str, command: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(prompt.to_string(), prompt_user()),
        Span::styled(format!(":~$ {command}"), label_text()),
    ])
}

pub fn render_panel<'a>(frame: &mut Frame, area: Rect, config: &PanelConfig<'a>, content: Paragraph<'a>) {
    let widget = content.block(config.block());
    frame.render_widget(widget, area);
}
