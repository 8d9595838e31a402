//! Application bar
//!
//! Renders the "SavvySpend" title and the backend the dashboard talks to.

use crate::environment::Environment;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_navbar(f: &mut Frame, area: Rect, environment: &Environment) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Fill(1)])
        .horizontal_margin(1)
        .split(inner);

    let title = Paragraph::new("SavvySpend").style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    let env_color = match environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    let backend = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", environment), Style::default().fg(env_color)),
        Span::styled(environment.api_url(), Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(backend, chunks[1]);
}
