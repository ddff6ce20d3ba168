use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{ellipsize, placeholder};
use crate::ui::app::App;
use crate::ui::format::{due_label, rupees};
use crate::ui::theme;

const COLUMNS: [(&str, Constraint); 6] = [
    ("#", Constraint::Length(4)),
    ("Date", Constraint::Length(11)),
    ("Description", Constraint::Min(20)),
    ("Category", Constraint::Length(14)),
    ("Due", Constraint::Length(11)),
    ("Amount", Constraint::Length(18)),
];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).areas(area);

    render_table(f, table_area, app);
    render_footer(f, footer_area, app);
}

fn panel_title(app: &App, shown: usize) -> String {
    let scope = app
        .store
        .category_filter()
        .map(|c| format!("{c}, within budget"))
        .unwrap_or_else(|| "all categories".into());
    format!("Bills · {shown} · {scope}")
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let bills = app.visible_bills();
    let block = theme::panel(panel_title(app, bills.len()));

    if bills.is_empty() {
        let lines: &[&str] = if app.store.is_empty() {
            &[
                "No bills yet",
                "Add one with :add <YYYY-MM-DD> <amount> <category> <description>",
            ]
        } else {
            &[
                "No bills found for this category.",
                "Press f to cycle categories or :filter to clear",
            ]
        };
        placeholder(f, area, block, lines);
        return;
    }

    let budget = app.store.monthly_budget();
    let description_width = usize::from(area.width.saturating_sub(62)).max(12);
    let rows: Vec<Row> = bills
        .iter()
        .enumerate()
        .skip(app.cursor.offset)
        .take(app.visible_rows)
        .map(|(i, bill)| {
            let due_style = theme::due(bill.is_overdue(app.today), bill.due_date.is_some());
            Row::new([
                Cell::from(format!("{:>3}", i + 1)),
                Cell::from(bill.date.format("%Y-%m-%d").to_string()),
                Cell::from(ellipsize(&bill.description, description_width)),
                Cell::from(bill.category.as_str()),
                Cell::from(Span::styled(due_label(bill.due_date), due_style)),
                Cell::from(Span::styled(
                    format!("{:>17}", rupees(bill.amount)),
                    theme::bill_amount(bill.amount, budget),
                )),
            ])
            .style(theme::row(i, i == app.cursor.index))
        })
        .collect();

    let header = Row::new(COLUMNS.iter().map(|(name, _)| Cell::from(*name)))
        .style(theme::column_header());
    let table = Table::new(rows, COLUMNS.iter().map(|(_, width)| *width))
        .header(header)
        .block(block);

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let line = Line::from(vec![
        Span::styled("Total ", theme::muted()),
        Span::styled(rupees(store.total_amount()), theme::text()),
        Span::styled("  /  budget ", theme::muted()),
        Span::styled(rupees(store.monthly_budget()), theme::text()),
        Span::styled("  /  left ", theme::muted()),
        Span::styled(
            rupees(store.remaining_budget()),
            theme::balance(store.remaining_budget()),
        ),
    ]);
    let footer = Paragraph::new(line)
        .centered()
        .block(theme::panel("Total Amount"));
    f.render_widget(footer, area);
}
