pub(crate) mod bills;
pub(crate) mod dashboard;
pub(crate) mod optimizer;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::theme;

/// Shorten `s` to at most `width` characters, marking the cut with "…".
pub(crate) fn ellipsize(s: &str, width: usize) -> String {
    match s.char_indices().nth(width) {
        None => s.to_string(),
        Some(_) if width == 0 => String::new(),
        Some(_) => {
            let keep: String = s.chars().take(width - 1).collect();
            keep + "…"
        }
    }
}

/// Fraction of `whole` taken by `part`, clamped to `0.0..=1.0` for gauges.
pub(crate) fn budget_ratio(part: Decimal, whole: Decimal) -> f64 {
    if whole <= Decimal::ZERO {
        return 0.0;
    }
    part.checked_div(whole)
        .and_then(|r| r.to_f64())
        .unwrap_or(1.0)
        .clamp(0.0, 1.0)
}

/// Centered placeholder text inside `block`, one muted line per entry.
fn placeholder(f: &mut Frame, area: Rect, block: Block<'static>, lines: &[&str]) {
    let mut text = vec![Line::from("")];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push(Line::from(""));
        }
        text.push(Line::from(Span::styled(line.to_string(), theme::muted())));
    }
    f.render_widget(Paragraph::new(text).centered().block(block), area);
}
