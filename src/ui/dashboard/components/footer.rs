//! Dashboard footer component
//!
//! Renders the key hints for the focused widget

use crate::ui::input::Focus;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Description | Focus::Amount | Focus::Date => {
            "[Tab] Next field | [Enter] Add expense | [Ctrl+R] Reload | [Esc] Quit"
        }
        Focus::Features => "[Tab] Next | [Enter] Predict | [Ctrl+T] Train | [Esc] Quit",
        Focus::Expenses => "[Up/Down] Select | [D] Delete | [Ctrl+R] Reload | [Q] Quit",
    }
}

/// Render enhanced footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, focus: Focus) {
    let footer = Paragraph::new(key_hints(focus))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
