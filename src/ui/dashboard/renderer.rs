//! Dashboard main renderer

use super::components::{expense_form, expenses_table, footer, logs, ml_panel};
use crate::ui::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

pub fn render_dashboard(f: &mut Frame, area: Rect, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .horizontal_margin(1)
        .split(area);

    let title = Paragraph::new("SavvySpend Dashboard")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, main_chunks[0]);

    expense_form::render_expense_form(f, main_chunks[1], app);
    expenses_table::render_expenses_table(f, main_chunks[2], app);
    ml_panel::render_ml_panel(f, main_chunks[3], app);
    logs::render_logs_panel(f, main_chunks[4], &app.dashboard);
    footer::render_footer(f, main_chunks[5], app.focus);
}
