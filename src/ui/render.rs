use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands::{self, COMMANDS};
use super::format::rupees;
use super::theme;

/// Commands grouped the way the help overlay lists them.
pub(crate) const HELP_SECTIONS: [(&str, &[&str]); 3] = [
    ("Bills", &["add", "edit", "rename", "due", "delete", "select"]),
    ("Budget", &["budget", "filter"]),
    ("Screens", &["dashboard", "bills", "optimizer", "help", "quit"]),
];

const KEY_BINDINGS: [(&str, &str); 8] = [
    ("j/k  Up/Down", "move the bill cursor"),
    ("g/G", "first / last bill"),
    ("Ctrl-d/Ctrl-u", "half page down / up"),
    ("1-3  Tab", "switch screens"),
    ("f", "cycle the category filter"),
    ("D", "delete the selected bill"),
    (":  ?", "command line / this help"),
    ("Ctrl-q", "quit"),
];

pub(crate) fn render(f: &mut Frame, app: &App) {
    let [header, body, status, prompt] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_header(f, header, app);
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, body, app),
        Screen::Bills => super::screens::bills::render(f, body, app),
        Screen::Optimizer => super::screens::optimizer::render(f, body, app),
    }
    render_status(f, status, app);
    render_prompt(f, prompt, app);

    if app.show_help {
        render_help(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(" billtui ", theme::mode_badge(InputMode::Normal))];
    for (i, screen) in Screen::all().iter().enumerate() {
        let style = if *screen == app.screen {
            theme::heading()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!("  {} {screen}", i + 1), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).style(theme::status_bar()), area);
}

fn screen_hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => ":add  :budget  ? ",
        Screen::Bills => "D delete  f filter  :edit  ? ",
        Screen::Optimizer => ":budget  ? ",
    }
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let remaining = store.remaining_budget();
    let filter = store
        .category_filter()
        .map(|c| c.as_str())
        .unwrap_or("all");

    let left = vec![
        Span::styled(format!(" {} ", app.input_mode), theme::mode_badge(app.input_mode)),
        Span::raw(format!(
            " budget {}  spent {}  left ",
            rupees(store.monthly_budget()),
            rupees(store.total_amount())
        )),
        Span::styled(rupees(remaining), theme::balance(remaining)),
        Span::raw(format!("  filter {filter}  {} bills", store.len())),
    ];
    let hint = screen_hint(app.screen);
    let used: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = usize::from(area.width).saturating_sub(used + hint.len());

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::raw(hint));
    f.render_widget(Paragraph::new(Line::from(spans)).style(theme::status_bar()), area);
}

fn render_prompt(f: &mut Frame, area: Rect, app: &App) {
    let (line, cursor) = match app.input_mode {
        InputMode::Command => prompt_line(":", &app.command_input),
        InputMode::Editing => prompt_line("rename> ", &app.command_input),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(app.confirm_message.as_str(), theme::heading()),
                Span::styled("  y to confirm, any key cancels", theme::muted()),
            ]),
            None,
        ),
        InputMode::Normal if app.status_message.is_empty() => (
            Line::from(Span::styled(" : for commands, ? for help", theme::muted())),
            None,
        ),
        InputMode::Normal => (Line::from(format!(" {}", app.status_message)), None),
    };

    f.render_widget(Paragraph::new(line).style(theme::prompt_bar()), area);
    if let Some(column) = cursor {
        f.set_cursor_position((area.x.saturating_add(column), area.y));
    }
}

fn prompt_line<'a>(label: &'a str, input: &'a str) -> (Line<'a>, Option<u16>) {
    let column = (label.chars().count() + input.chars().count()).min(usize::from(u16::MAX));
    let line = Line::from(vec![
        Span::styled(label, theme::heading()),
        Span::styled(input, theme::text()),
    ]);
    (line, u16::try_from(column).ok())
}

// ── Help overlay ─────────────────────────────────────────────

/// Text of the help overlay: command sections from the registry, then keys.
pub(crate) fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, names) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(title, theme::heading())));
        for name in names {
            let Some(cmd) = COMMANDS.get(name) else {
                continue;
            };
            let call = format!(":{} {}", commands::aliases_of(name).join("/:"), cmd.usage);
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<46}", call.trim_end()), theme::text()),
                Span::styled(cmd.description, theme::muted()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Keys", theme::heading())));
    for (keys, action) in KEY_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<16}"), theme::text()),
            Span::styled(action, theme::muted()),
        ]));
    }
    lines
}

fn render_help(f: &mut Frame, area: Rect) {
    let lines = help_lines();
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let [column] = Layout::horizontal([Constraint::Length(84)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    f.render_widget(Clear, popup);
    let help = Paragraph::new(lines)
        .style(theme::prompt_bar())
        .block(theme::panel("Help · any key closes"));
    f.render_widget(help, popup);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
