//! Budget prediction panel
//!
//! Instructions, the features input and whichever of the training message,
//! the error or the predictions is current.

use super::super::utils::{input_block, input_text, spinner};
use crate::consts::cli_consts::ml::FEATURES_FORMAT_HINT;
use crate::model::Predictions;
use crate::ui::App;
use crate::ui::input::Focus;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_ml_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title("BUDGET PREDICTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(inner);

    let state = &app.dashboard;

    let instructions = Paragraph::new(vec![
        Line::from(FEATURES_FORMAT_HINT),
        Line::from(Span::styled(
            "[Enter] Predict  [Ctrl+T] Train with example data",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(instructions, chunks[0]);

    let focused = app.focus == Focus::Features;
    let title = if state.ml_loading {
        format!("Features {} Loading...", spinner(app.tick))
    } else {
        "Features".to_string()
    };
    let input = Paragraph::new(input_text(&state.ml_features_text, focused && !state.ml_loading))
        .block(input_block(&title, focused));
    f.render_widget(input, chunks[1]);

    let mut lines = Vec::new();
    if let Some(message) = &state.ml_train_message {
        lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::LightGreen),
        )));
    }
    if let Some(error) = &state.ml_error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::LightRed),
        )));
    }
    if let Some(predictions) = &state.ml_result {
        lines.push(Line::from(Span::styled(
            format!("Predictions: {}", Predictions(predictions)),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[2]);
}
