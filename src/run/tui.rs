use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::models::Category;
use crate::store::BillStore;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;

pub(crate) fn as_tui(store: BillStore) -> Result<()> {
    let mut app = App::new(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("tui exited with error: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, table borders + header, total footer
            let content_height = f.area().height.saturating_sub(9) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Editing => handle_editing_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => app.screen = Screen::Dashboard,
        KeyCode::Char('2') => switch_to_bills(app),
        KeyCode::Char('3') => app.screen = Screen::Optimizer,
        KeyCode::Tab => {
            app.screen = app.screen.next();
            app.clamp_selection();
        }
        KeyCode::BackTab => {
            app.screen = app.screen.prev();
            app.clamp_selection();
        }
        KeyCode::Esc => app.status_message.clear(),
        KeyCode::Char('g') if app.screen == Screen::Bills => app.reset_selection(),
        KeyCode::Char('G') if app.screen == Screen::Bills => app.move_to_bottom(),
        KeyCode::Char('f') => {
            let next = Category::cycle(app.store.category_filter());
            let arg = next.map(|c| c.as_str()).unwrap_or("");
            commands::handle_command(&format!("filter {arg}"), app)?;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('D') if app.screen == Screen::Bills => {
            commands::handle_command("delete", app)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let new_description = app.command_input.trim().to_string();
            if !new_description.is_empty() {
                commands::rename_selected(app, &new_description);
            }
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => commands::confirm_pending(app),
        // Any other key = cancel
        _ => commands::cancel_pending(app),
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_to_bills(app: &mut App) {
    app.screen = Screen::Bills;
    app.clamp_selection();
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Bills {
        app.move_down();
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Bills {
        app.move_up();
    }
}
