//! Expenses table component
//!
//! One row per expense, in the order the backend returned them. The
//! highlighted row is the target of the delete action.

use crate::model::{DATE_FORMAT, format_number};
use crate::ui::App;
use crate::ui::input::Focus;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render_expenses_table(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Expenses;
    let block = Block::default()
        .title(format!("EXPENSES ({})", app.dashboard.expenses.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(Color::LightYellow)
        } else {
            Style::default().fg(Color::Cyan)
        });

    if app.dashboard.expenses.is_empty() {
        let empty = Paragraph::new("No expenses recorded yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Description", "Amount", "Date", "Action"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.dashboard.expenses.iter().map(|expense| {
        Row::new([
            Cell::from(expense.description.clone()),
            Cell::from(format_number(expense.amount)).style(Style::default().fg(Color::LightGreen)),
            Cell::from(expense.date.format(DATE_FORMAT).to_string()),
            Cell::from("[d] Delete").style(Style::default().fg(Color::LightRed)),
        ])
    });

    let highlight = if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Fill(3),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(highlight)
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}
