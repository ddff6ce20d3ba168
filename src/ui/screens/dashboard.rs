use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{budget_ratio, placeholder};
use crate::store::{BillStore, MONTH_LABELS};
use crate::ui::app::App;
use crate::ui::format::rupees;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let [spend_area, facts_area, chart_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Min(8),
    ])
    .areas(area);

    render_spend(f, spend_area, &app.store);
    render_facts(f, facts_area, &app.store);
    render_chart(f, chart_area, &app.store);
}

/// Bar height in whole rupees; negative or oversized totals collapse to zero.
pub(super) fn bar_height(amount: Decimal) -> u64 {
    amount.trunc().to_u64().unwrap_or(0)
}

fn render_spend(f: &mut Frame, area: Rect, store: &BillStore) {
    let budget = store.monthly_budget();
    let total = store.total_amount();
    let style = if total > budget {
        theme::warning()
    } else {
        theme::bar()
    };
    let gauge = Gauge::default()
        .block(theme::panel("Spent this session"))
        .gauge_style(style)
        .ratio(budget_ratio(total, budget))
        .label(Span::styled(
            format!("{} of {}", rupees(total), rupees(budget)),
            theme::text(),
        ));
    f.render_widget(gauge, area);
}

fn render_facts(f: &mut Frame, area: Rect, store: &BillStore) {
    let budget = store.monthly_budget();
    let remaining = store.remaining_budget();
    let oversized = store.bills().iter().filter(|b| b.amount > budget).count();
    let scope = store
        .category_filter()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "all categories".into());

    let mut money = vec![
        Span::styled("Left ", theme::muted()),
        Span::styled(rupees(remaining), theme::balance(remaining)),
        Span::styled(format!("   {} bills", store.len()), theme::text()),
    ];
    if oversized > 0 {
        money.push(Span::styled(
            format!("   {oversized} above the whole budget"),
            theme::warning(),
        ));
    }
    let facts = Paragraph::new(vec![
        Line::from(money),
        Line::from(vec![
            Span::styled("Showing ", theme::muted()),
            Span::styled(scope, theme::heading()),
        ]),
    ])
    .centered()
    .block(theme::panel("Budget"));
    f.render_widget(facts, area);
}

fn render_chart(f: &mut Frame, area: Rect, store: &BillStore) {
    let block = theme::panel("Monthly Bills");
    if store.is_empty() {
        placeholder(
            f,
            area,
            block,
            &["No bills available for charting.", "Add one with :add"],
        );
        return;
    }

    let bars: Vec<Bar> = MONTH_LABELS
        .iter()
        .zip(store.monthly_totals())
        .map(|(label, amount)| {
            let shown = if amount.is_zero() {
                String::new()
            } else {
                format!("{:.0}", amount.trunc())
            };
            Bar::default()
                .value(bar_height(amount))
                .label(Line::from(*label))
                .text_value(shown)
                .style(theme::bar())
                .value_style(theme::bar_value())
        })
        .collect();

    let inner = area.width.saturating_sub(2);
    let width = (inner / 12).saturating_sub(1).max(1);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1);
    f.render_widget(chart, area);
}
