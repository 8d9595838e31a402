//! Keyboard handling
//!
//! Maps key presses to dashboard actions according to the focused widget.

use crate::model::DraftField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The widget receiving keyboard input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
pub enum Focus {
    #[default]
    Description,
    Amount,
    Date,
    Features,
    Expenses,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Description,
        Focus::Amount,
        Focus::Date,
        Focus::Features,
        Focus::Expenses,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The form field edited while this widget has focus, if any.
    pub fn draft_field(self) -> Option<DraftField> {
        match self {
            Focus::Description => Some(DraftField::Description),
            Focus::Amount => Some(DraftField::Amount),
            Focus::Date => Some(DraftField::Date),
            Focus::Features | Focus::Expenses => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrevious,
    Insert(char),
    Backspace,
    /// Enter in a text field: add the expense, or predict from the features.
    Submit,
    SelectNext,
    SelectPrevious,
    DeleteSelected,
    Train,
    Reload,
}

/// Translate a key press into an action. Returns `None` for unbound keys.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::Train),
            KeyCode::Char('r') => Some(Action::Reload),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrevious),
        _ if focus == Focus::Expenses => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Delete | KeyCode::Char('d') => Some(Action::DeleteSelected),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Insert(c)),
        _ => None,
    }
}
