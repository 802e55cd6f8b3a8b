use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Black;

pub const PRIMARY: Color = Color::Rgb(34, 197, 94);
pub const SECONDARY: Color = Color::Rgb(74, 222, 128);
pub const BRIGHT: Color = Color::Rgb(134, 239, 172);
pub const DIM_BORDER: Color = Color::Rgb(21, 94, 47);
pub const MUTED: Color = Color::Rgb(22, 101, 52);

pub const CODE_BG: Color = Color::Rgb(17, 24, 39);
pub const SELECTED_BG: Color = Color::Rgb(17, 24, 39);

pub const ERROR_COLOR: Color = Color::Red;
