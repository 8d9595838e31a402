//! Main application state and UI loop
//!
//! Contains the App struct, the root renderer (navbar above the dashboard)
//! and the event loop that dispatches backend commands onto tokio tasks.

use crate::api::ExpenseApi;
use crate::consts::cli_consts::OUTCOME_QUEUE_SIZE;
use crate::dashboard::{Command, DashboardState, Outcome, execute};
use crate::environment::Environment;
use crate::model::Expense;
use crate::ui::dashboard::render_dashboard;
use crate::ui::input::{Action, Focus, map_key};
use crate::ui::navbar::render_navbar;
use crossterm::event::{self, Event};
use log::debug;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, TableState};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Application state
pub struct App {
    /// The backend the dashboard talks to.
    pub(crate) environment: Environment,

    /// Expense and ML workflow state.
    pub(crate) dashboard: DashboardState,

    /// The widget receiving keyboard input.
    pub(crate) focus: Focus,

    /// Selected row of the expense table.
    pub(crate) table_state: TableState,

    /// Animation tick counter
    pub(crate) tick: usize,

    /// Whether to paint a dark background
    pub(crate) with_background_color: bool,

    api: Arc<dyn ExpenseApi>,

    /// Carries request outcomes from spawned tasks back to the UI loop.
    outcome_sender: mpsc::Sender<Outcome>,
    outcome_receiver: mpsc::Receiver<Outcome>,

    should_quit: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(api: Arc<dyn ExpenseApi>, with_background_color: bool) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::channel(OUTCOME_QUEUE_SIZE);
        Self {
            environment: api.environment().clone(),
            dashboard: DashboardState::new(),
            focus: Focus::default(),
            table_state: TableState::default(),
            tick: 0,
            with_background_color,
            api,
            outcome_sender,
            outcome_receiver,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_expense(&self) -> Option<&Expense> {
        self.table_state
            .selected()
            .and_then(|i| self.dashboard.expenses.get(i))
    }

    /// Applies a user action, returning the backend command it triggers.
    pub fn handle_action(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            Action::FocusPrevious => {
                self.focus = self.focus.previous();
                None
            }
            Action::Insert(c) => {
                self.edit_focused(|text| text.push(c));
                None
            }
            Action::Backspace => {
                self.edit_focused(|text| {
                    text.pop();
                });
                None
            }
            Action::Submit => match self.focus {
                Focus::Description | Focus::Amount | Focus::Date => self.dashboard.add_expense(),
                Focus::Features => self.dashboard.predict(),
                Focus::Expenses => None,
            },
            Action::SelectNext => {
                self.move_selection(1);
                None
            }
            Action::SelectPrevious => {
                self.move_selection(-1);
                None
            }
            Action::DeleteSelected => {
                let id = self.selected_expense()?.id;
                Some(self.dashboard.delete_expense(id))
            }
            Action::Train => self.dashboard.train_with_example_data(),
            Action::Reload => Some(self.dashboard.load_expenses()),
        }
    }

    /// Folds a finished request into the dashboard, returning any follow-up.
    pub fn apply_outcome(&mut self, outcome: Outcome) -> Option<Command> {
        let next = match self.dashboard.apply(outcome) {
            Ok(next) => next,
            Err(err) => {
                // Already recorded in the activity log by the dashboard.
                debug!("expense request failed: {}", err);
                None
            }
        };
        self.clamp_selection();
        next
    }

    /// Runs a command on a background task; its outcome arrives on the channel.
    fn dispatch(&self, command: Command) {
        let api = Arc::clone(&self.api);
        let sender = self.outcome_sender.clone();
        tokio::spawn(async move {
            let outcome = execute(api.as_ref(), command).await;
            // The receiver is gone once the UI has quit; the result is discarded.
            let _ = sender.send(outcome).await;
        });
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(field) = self.focus.draft_field() {
            let mut value = self.dashboard.draft.get(field).to_string();
            edit(&mut value);
            self.dashboard.update_draft_field(field, value);
        } else if self.focus == Focus::Features && !self.dashboard.ml_loading {
            let mut text = self.dashboard.ml_features_text.clone();
            edit(&mut text);
            self.dashboard.set_ml_features_text(text);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.dashboard.expenses.len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.table_state.select(Some(next as usize));
    }

    fn clamp_selection(&mut self) {
        let len = self.dashboard.expenses.len();
        let selected = match (self.table_state.selected(), len) {
            (_, 0) => None,
            (Some(i), _) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Initial load on mount
    let command = app.dashboard.load_expenses();
    app.dispatch(command);

    // UI event loop
    loop {
        // Apply every finished request before drawing
        while let Ok(outcome) = app.outcome_receiver.try_recv() {
            if let Some(command) = app.apply_outcome(outcome) {
                app.dispatch(command);
            }
        }

        app.tick = app.tick.wrapping_add(1);
        terminal.draw(|f| render(f, &mut app))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if let Some(action) = map_key(key, app.focus) {
                    if let Some(command) = app.handle_action(action) {
                        app.dispatch(command);
                    }
                }

                if app.should_quit() {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the page shell: navbar on top, dashboard below.
pub fn render(f: &mut Frame, app: &mut App) {
    if app.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(f.area());

    render_navbar(f, chunks[0], &app.environment);
    render_dashboard(f, chunks[1], app);
}
