use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use super::{budget_ratio, ellipsize, placeholder};
use crate::store::Optimization;
use crate::ui::app::App;
use crate::ui::format::rupees;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let result = app.store.optimize();
    let [gauge_area, list_area, summary_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(4),
    ])
    .areas(area);

    render_usage(f, gauge_area, app, &result);
    render_selection(f, list_area, app, &result);
    render_summary(f, summary_area, &result);
}

/// How much of the monthly budget the greedy pick uses.
fn render_usage(f: &mut Frame, area: Rect, app: &App, result: &Optimization) {
    let budget = app.store.monthly_budget();
    let gauge = Gauge::default()
        .block(theme::panel(format!("Budget Optimizer · budget {}", rupees(budget))))
        .gauge_style(theme::bar())
        .ratio(budget_ratio(result.total_selected, budget))
        .label(Span::styled(
            format!("{} of {}", rupees(result.total_selected), rupees(budget)),
            theme::text(),
        ));
    f.render_widget(gauge, area);
}

fn render_selection(f: &mut Frame, area: Rect, app: &App, result: &Optimization) {
    let budget = app.store.monthly_budget();
    let block = theme::panel("Optimized Bills Within Budget");
    if result.selected_bills.is_empty() {
        placeholder(f, area, block, &["No bills fit within the budget."]);
        return;
    }

    let rows = result
        .selected_bills
        .iter()
        .enumerate()
        .map(|(i, bill)| {
            Row::new([
                Cell::from(ellipsize(&bill.description, 32)),
                Cell::from(Span::styled(bill.category.as_str(), theme::muted())),
                Cell::from(Span::styled(
                    bill.date.format("%Y-%m-%d").to_string(),
                    theme::muted(),
                )),
                Cell::from(Span::styled(
                    format!("{:>17}", rupees(bill.amount)),
                    theme::bill_amount(bill.amount, budget),
                )),
            ])
            .style(theme::row(i, false))
        });
    let widths = [
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(11),
        Constraint::Length(18),
    ];
    f.render_widget(Table::new(rows, widths).block(block), area);
}

fn render_summary(f: &mut Frame, area: Rect, result: &Optimization) {
    let count = result.selected_bills.len();
    let verdict = if count == 0 {
        Span::styled("Adjust your budget to include more bills.", theme::warning())
    } else {
        Span::styled(
            format!("{count} bills optimized to fit your budget!"),
            theme::heading(),
        )
    };

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Total Selected Amount  ", theme::muted()),
            Span::styled(rupees(result.total_selected), theme::balance(result.total_selected)),
        ]),
        Line::from(verdict),
    ])
    .centered()
    .block(theme::panel("Summary"));
    f.render_widget(summary, area);
}
