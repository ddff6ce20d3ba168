use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};
use rust_decimal::Decimal;

use super::app::InputMode;

// Warm dark palette; saffron marks the active element.
pub(crate) const CANVAS: Color = Color::Rgb(29, 32, 33);
pub(crate) const PANEL: Color = Color::Rgb(50, 48, 47);
pub(crate) const EDGE: Color = Color::Rgb(80, 73, 69);
pub(crate) const INK: Color = Color::Rgb(235, 219, 178);
pub(crate) const MUTED: Color = Color::Rgb(146, 131, 116);
pub(crate) const SAFFRON: Color = Color::Rgb(250, 189, 47);
pub(crate) const WITHIN: Color = Color::Rgb(184, 187, 38);
pub(crate) const OVER: Color = Color::Rgb(251, 73, 52);
pub(crate) const SKY: Color = Color::Rgb(131, 165, 152);

/// Bordered block with a padded title, used by every screen section.
pub(crate) fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(EDGE))
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        ))
}

pub(crate) fn text() -> Style {
    Style::default().fg(INK)
}

pub(crate) fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub(crate) fn heading() -> Style {
    Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)
}

pub(crate) fn column_header() -> Style {
    Style::default()
        .fg(INK)
        .bg(CANVAS)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Zebra striping with the cursor row inverted.
pub(crate) fn row(position: usize, selected: bool) -> Style {
    if selected {
        Style::default().fg(CANVAS).bg(SAFFRON)
    } else if position % 2 == 1 {
        Style::default().fg(INK).bg(PANEL)
    } else {
        text()
    }
}

/// A single bill amount: warning colour when it alone exceeds the budget.
pub(crate) fn bill_amount(amount: Decimal, budget: Decimal) -> Style {
    if amount > budget {
        warning().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(WITHIN)
    }
}

/// Money left over: red once the budget is overrun.
pub(crate) fn balance(remaining: Decimal) -> Style {
    let fg = if remaining.is_sign_negative() && !remaining.is_zero() {
        OVER
    } else {
        WITHIN
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

pub(crate) fn warning() -> Style {
    Style::default().fg(OVER)
}

pub(crate) fn due(overdue: bool, set: bool) -> Style {
    match (overdue, set) {
        (true, _) => warning(),
        (false, true) => Style::default().fg(SKY),
        (false, false) => muted(),
    }
}

pub(crate) fn mode_badge(mode: InputMode) -> Style {
    let bg = match mode {
        InputMode::Normal => SAFFRON,
        InputMode::Command | InputMode::Editing => SKY,
        InputMode::Confirm => OVER,
    };
    Style::default().fg(CANVAS).bg(bg).add_modifier(Modifier::BOLD)
}

pub(crate) fn status_bar() -> Style {
    Style::default().fg(MUTED).bg(PANEL)
}

pub(crate) fn prompt_bar() -> Style {
    Style::default().fg(INK).bg(CANVAS)
}

pub(crate) fn bar() -> Style {
    Style::default().fg(SAFFRON)
}

pub(crate) fn bar_value() -> Style {
    Style::default()
        .fg(CANVAS)
        .bg(SAFFRON)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
