// src/style.rs
// Terminal styling for table titles. Applied only when printing.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

pub const PALETTE: [Style; 6] = [
    Style::Red,
    Style::Green,
    Style::Yellow,
    Style::Blue,
    Style::Magenta,
    Style::Cyan,
];

const RESET: &str = "\x1b[0m";

impl Style {
    pub fn ansi(self) -> &'static str {
        match self {
            Style::Red => "\x1b[91m",
            Style::Green => "\x1b[92m",
            Style::Yellow => "\x1b[93m",
            Style::Blue => "\x1b[94m",
            Style::Magenta => "\x1b[95m",
            Style::Cyan => "\x1b[96m",
        }
    }

    pub fn paint(self, text: &str, enabled: bool) -> String {
        if enabled {
            format!("{}{}{}", self.ansi(), text, RESET)
        } else {
            s!(text)
        }
    }
}

/// Style for the table at 1-based `idx`; cycles through [`PALETTE`].
pub fn style_for(idx: usize) -> Style {
    PALETTE[idx.saturating_sub(1) % PALETTE.len()]
}
