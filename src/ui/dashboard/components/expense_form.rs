//! Expense form component
//!
//! Three inputs side by side: description, amount and date.

use super::super::utils::{input_block, input_text};
use crate::model::DraftField;
use crate::ui::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;

pub fn render_expense_form(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let fields = [
        (DraftField::Description, "Description"),
        (DraftField::Amount, "Amount"),
        (DraftField::Date, "Date (YYYY-MM-DD)"),
    ];

    for ((field, title), chunk) in fields.into_iter().zip(chunks.iter()) {
        let focused = app.focus.draft_field() == Some(field);
        let title = if app.dashboard.is_adding() && field == DraftField::Description {
            format!("{} (saving...)", title)
        } else {
            title.to_string()
        };
        let input = Paragraph::new(input_text(app.dashboard.draft.get(field), focused))
            .block(input_block(&title, focused));
        f.render_widget(input, *chunk);
    }
}
