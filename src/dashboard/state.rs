//! Dashboard state management
//!
//! The dashboard owns every piece of application state. User intents mutate
//! local fields and return the [`Command`] to run against the backend; the
//! resulting [`Outcome`] is folded back in with [`DashboardState::apply`].

use super::command::{Command, Outcome};
use crate::api::error::RequestError;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::consts::cli_consts::ml::{
    FEATURES_FORMAT_HINT, TRAIN_FAILURE_PREFIX, TRAIN_SUCCESS_MESSAGE,
};
use crate::error_classifier::ErrorClassifier;
use crate::events::{ActivityEvent, EventType};
use crate::logging::LogLevel;
use crate::model::{
    DraftError, DraftField, Expense, ExpenseFormDraft, ExpenseId, FeatureMatrix, PredictionResult,
    Predictions, TrainingRequest, format_number,
};

use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct DashboardState {
    /// Expenses as of the last successful fetch.
    pub expenses: Vec<Expense>,
    /// Contents of the expense form.
    pub draft: ExpenseFormDraft,
    /// Raw text of the prediction features input.
    pub ml_features_text: String,
    /// Predictions from the last successful request.
    pub ml_result: Option<PredictionResult>,
    /// Inline error of the ML workflow.
    pub ml_error: Option<String>,
    /// Confirmation shown after training.
    pub ml_train_message: Option<String>,
    /// Whether a prediction or training request is in flight.
    pub ml_loading: bool,
    /// Activity logs for display (last MAX_ACTIVITY_LOGS events)
    pub activity_logs: VecDeque<ActivityEvent>,

    /// Whether an expense creation is in flight
    adding: bool,
    error_classifier: ErrorClassifier,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Refetch the whole expense collection.
    pub fn load_expenses(&mut self) -> Command {
        Command::LoadExpenses
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn set_ml_features_text(&mut self, text: impl Into<String>) {
        self.ml_features_text = text.into();
    }

    /// Submit the draft. Returns `None` when a field is empty or unparsable,
    /// or when a previous submission has not completed yet.
    pub fn add_expense(&mut self) -> Option<Command> {
        if self.adding {
            self.add_to_activity_log(ActivityEvent::expenses(
                "Still saving the previous expense",
                EventType::Waiting,
                LogLevel::Debug,
            ));
            return None;
        }

        let expense = match self.draft.to_new_expense() {
            Ok(expense) => expense,
            Err(err @ DraftError::MissingField(_)) => {
                self.add_to_activity_log(ActivityEvent::expenses(
                    err.to_string(),
                    EventType::Waiting,
                    LogLevel::Debug,
                ));
                return None;
            }
            Err(err) => {
                self.add_to_activity_log(ActivityEvent::expenses(
                    err.to_string(),
                    EventType::Error,
                    LogLevel::Warn,
                ));
                return None;
            }
        };

        self.adding = true;
        Some(Command::AddExpense(expense))
    }

    pub fn delete_expense(&mut self, id: ExpenseId) -> Command {
        Command::DeleteExpense(id)
    }

    /// Start a prediction for the current features text. Fails locally with
    /// a format hint, without a request, when no row is usable.
    pub fn predict(&mut self) -> Option<Command> {
        if self.ml_loading {
            return None;
        }
        self.ml_loading = true;
        self.ml_result = None;
        self.ml_error = None;

        let features = FeatureMatrix::parse(&self.ml_features_text);
        if features.is_empty() {
            self.ml_error = Some(FEATURES_FORMAT_HINT.to_string());
            self.ml_loading = false;
            self.add_to_activity_log(ActivityEvent::ml(
                FEATURES_FORMAT_HINT,
                EventType::Error,
                LogLevel::Warn,
            ));
            return None;
        }

        self.add_to_activity_log(ActivityEvent::ml(
            format!("Requesting {} prediction(s)", features.len()),
            EventType::Waiting,
            LogLevel::Debug,
        ));
        Some(Command::Predict(features))
    }

    /// Start training on the fixed example data set.
    pub fn train_with_example_data(&mut self) -> Option<Command> {
        if self.ml_loading {
            return None;
        }
        self.ml_loading = true;
        self.ml_train_message = None;
        self.ml_error = None;

        self.add_to_activity_log(ActivityEvent::ml(
            "Training model with example data",
            EventType::Waiting,
            LogLevel::Debug,
        ));
        Some(Command::Train(TrainingRequest::example()))
    }

    /// Fold a request outcome into the state.
    ///
    /// Returns the follow-up command, if any. Expense failures are recorded in
    /// the activity log and then returned so the caller decides how to surface
    /// them; ML failures are handled here and shown inline.
    pub fn apply(&mut self, outcome: Outcome) -> Result<Option<Command>, RequestError> {
        match outcome {
            Outcome::ExpensesLoaded(Ok(expenses)) => {
                self.add_to_activity_log(ActivityEvent::expenses(
                    format!("Loaded {} expense(s)", expenses.len()),
                    EventType::Refresh,
                    LogLevel::Info,
                ));
                self.expenses = expenses;
                Ok(None)
            }
            Outcome::ExpensesLoaded(Err(err)) => {
                Err(self.record_expense_failure("Failed to load expenses", err))
            }

            Outcome::ExpenseAdded(Ok(expense)) => {
                self.adding = false;
                self.draft.clear();
                self.add_to_activity_log(ActivityEvent::expenses(
                    format!(
                        "Added \"{}\" ({} on {})",
                        expense.description,
                        format_number(expense.amount),
                        expense.date
                    ),
                    EventType::Success,
                    LogLevel::Info,
                ));
                Ok(Some(Command::LoadExpenses))
            }
            Outcome::ExpenseAdded(Err(err)) => {
                self.adding = false;
                Err(self.record_expense_failure("Failed to add expense", err))
            }

            Outcome::ExpenseDeleted { id, result: Ok(()) } => {
                self.add_to_activity_log(ActivityEvent::expenses(
                    format!("Deleted expense #{}", id),
                    EventType::Success,
                    LogLevel::Info,
                ));
                Ok(Some(Command::LoadExpenses))
            }
            Outcome::ExpenseDeleted {
                id,
                result: Err(err),
            } => Err(self.record_expense_failure(&format!("Failed to delete expense #{}", id), err)),

            Outcome::Predicted(Ok(predictions)) => {
                self.ml_loading = false;
                self.add_to_activity_log(ActivityEvent::ml(
                    format!("Predictions: {}", Predictions(&predictions)),
                    EventType::Success,
                    LogLevel::Info,
                ));
                self.ml_result = Some(predictions);
                Ok(None)
            }
            Outcome::Predicted(Err(err)) => {
                self.ml_loading = false;
                let message = err.user_message();
                self.record_ml_failure(&err, &message);
                self.ml_error = Some(message);
                Ok(None)
            }

            Outcome::Trained(Ok(())) => {
                self.ml_loading = false;
                self.ml_train_message = Some(TRAIN_SUCCESS_MESSAGE.to_string());
                self.add_to_activity_log(ActivityEvent::ml(
                    TRAIN_SUCCESS_MESSAGE,
                    EventType::Success,
                    LogLevel::Info,
                ));
                Ok(None)
            }
            Outcome::Trained(Err(err)) => {
                self.ml_loading = false;
                let message = format!("{}{}", TRAIN_FAILURE_PREFIX, err.user_message());
                self.record_ml_failure(&err, &message);
                self.ml_error = Some(message);
                Ok(None)
            }
        }
    }

    fn record_expense_failure(&mut self, context: &str, err: RequestError) -> RequestError {
        let log_level = self.error_classifier.classify_request_error(&err);
        self.add_to_activity_log(ActivityEvent::expenses(
            format!("{}: {}", context, err.user_message()),
            EventType::Error,
            log_level,
        ));
        err
    }

    fn record_ml_failure(&mut self, err: &RequestError, message: &str) {
        let log_level = self.error_classifier.classify_request_error(err);
        self.add_to_activity_log(ActivityEvent::ml(message, EventType::Error, log_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: ExpenseId, description: &str) -> Expense {
        Expense {
            id,
            description: description.to_string(),
            amount: 10.0,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    fn filled_state() -> DashboardState {
        let mut state = DashboardState::new();
        state.update_draft_field(DraftField::Description, "Groceries");
        state.update_draft_field(DraftField::Amount, "42.5");
        state.update_draft_field(DraftField::Date, "2024-03-01");
        state
    }

    #[test]
    fn update_draft_field_merges_one_field() {
        let mut state = DashboardState::new();
        state.update_draft_field(DraftField::Amount, "12");
        state.update_draft_field(DraftField::Description, "Lunch");
        assert_eq!(state.draft.amount, "12");
        assert_eq!(state.draft.description, "Lunch");
        assert!(state.draft.date.is_empty());
    }

    #[test]
    fn add_expense_aborts_on_missing_field() {
        let mut state = filled_state();
        state.update_draft_field(DraftField::Date, "");
        assert_eq!(state.add_expense(), None);
        assert!(!state.is_adding());
        assert_eq!(state.draft.description, "Groceries");
    }

    #[test]
    fn add_expense_aborts_on_unparsable_amount() {
        let mut state = filled_state();
        state.update_draft_field(DraftField::Amount, "lots");
        assert_eq!(state.add_expense(), None);
        let last = state.activity_logs.back().unwrap();
        assert_eq!(last.log_level, LogLevel::Warn);
    }

    #[test]
    fn add_expense_converts_amount_and_guards_duplicates() {
        let mut state = filled_state();
        let command = state.add_expense().unwrap();
        match command {
            Command::AddExpense(expense) => {
                assert_eq!(expense.description, "Groceries");
                assert_eq!(expense.amount, 42.5);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(state.is_adding());
        assert_eq!(state.add_expense(), None);
    }

    #[test]
    fn successful_add_clears_draft_and_refetches() {
        let mut state = filled_state();
        state.add_expense().unwrap();

        let next = state
            .apply(Outcome::ExpenseAdded(Ok(expense(1, "Groceries"))))
            .unwrap();
        assert_eq!(next, Some(Command::LoadExpenses));
        assert_eq!(state.draft, ExpenseFormDraft::default());
        assert!(!state.is_adding());
    }

    #[test]
    fn failed_add_keeps_draft_and_returns_error() {
        let mut state = filled_state();
        state.add_expense().unwrap();

        let err = state
            .apply(Outcome::ExpenseAdded(Err(RequestError::from_status_and_body(
                422,
                r#"{"detail":[{"msg":"ensure this value is greater than 0"}]}"#,
            ))))
            .unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(state.draft.description, "Groceries");
        assert!(!state.is_adding());
        assert_eq!(
            state.activity_logs.back().unwrap().msg,
            "Failed to add expense: ensure this value is greater than 0"
        );
    }

    #[test]
    fn delete_refetches_on_success_only() {
        let mut state = DashboardState::new();
        assert_eq!(state.delete_expense(3), Command::DeleteExpense(3));

        let next = state
            .apply(Outcome::ExpenseDeleted { id: 3, result: Ok(()) })
            .unwrap();
        assert_eq!(next, Some(Command::LoadExpenses));

        let err = state
            .apply(Outcome::ExpenseDeleted {
                id: 3,
                result: Err(RequestError::from_status_and_body(
                    404,
                    r#"{"detail":"Expense not found"}"#,
                )),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some("Expense not found"));
    }

    #[test]
    fn loaded_expenses_replace_the_list() {
        let mut state = DashboardState::new();
        state.expenses = vec![expense(1, "Old")];
        state
            .apply(Outcome::ExpensesLoaded(Ok(vec![expense(2, "New"), expense(3, "Newer")])))
            .unwrap();
        let ids: Vec<_> = state.expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let mut state = DashboardState::new();
        state.expenses = vec![expense(1, "Old")];
        let result = state.apply(Outcome::ExpensesLoaded(Err(
            RequestError::from_status_and_body(500, ""),
        )));
        assert!(result.is_err());
        assert_eq!(state.expenses.len(), 1);
    }

    #[test]
    fn predict_with_unusable_text_fails_locally() {
        let mut state = DashboardState::new();
        state.ml_result = Some(vec![1.0]);
        state.set_ml_features_text("1.0;abc,2");

        assert_eq!(state.predict(), None);
        assert_eq!(state.ml_error.as_deref(), Some(FEATURES_FORMAT_HINT));
        assert_eq!(state.ml_result, None);
        assert!(!state.ml_loading);
    }

    #[test]
    fn predict_sets_loading_until_outcome() {
        let mut state = DashboardState::new();
        state.ml_error = Some("old".to_string());
        state.set_ml_features_text("1.0,2.0;3.0,4.0");

        let command = state.predict().unwrap();
        assert_eq!(
            command,
            Command::Predict(FeatureMatrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]))
        );
        assert!(state.ml_loading);
        assert_eq!(state.ml_error, None);
        // Second click while loading is ignored
        assert_eq!(state.predict(), None);
        assert_eq!(state.train_with_example_data(), None);

        state
            .apply(Outcome::Predicted(Ok(vec![150.0, 250.0])))
            .unwrap();
        assert!(!state.ml_loading);
        assert_eq!(state.ml_result, Some(vec![150.0, 250.0]));
    }

    #[test]
    fn predict_failure_uses_server_detail_or_generic_message() {
        let mut state = DashboardState::new();
        state.set_ml_features_text("1,2");

        state.predict().unwrap();
        state
            .apply(Outcome::Predicted(Err(RequestError::from_status_and_body(
                400,
                r#"{"detail":"This LinearRegression instance is not fitted yet"}"#,
            ))))
            .unwrap();
        assert!(!state.ml_loading);
        assert_eq!(
            state.ml_error.as_deref(),
            Some("This LinearRegression instance is not fitted yet")
        );

        state.predict().unwrap();
        state
            .apply(Outcome::Predicted(Err(RequestError::from_status_and_body(
                502, "",
            ))))
            .unwrap();
        assert_eq!(
            state.ml_error.as_deref(),
            Some("Request failed with status code 502")
        );
    }

    #[test]
    fn train_always_sends_example_data() {
        let mut state = DashboardState::new();
        state.set_ml_features_text("9,9");
        state.update_draft_field(DraftField::Amount, "1");
        state.ml_train_message = Some("old".to_string());

        let command = state.train_with_example_data().unwrap();
        assert_eq!(command, Command::Train(TrainingRequest::example()));
        assert!(state.ml_loading);
        assert_eq!(state.ml_train_message, None);
    }

    #[test]
    fn train_outcomes_set_message_or_prefixed_error() {
        let mut state = DashboardState::new();
        state.train_with_example_data().unwrap();
        state.apply(Outcome::Trained(Ok(()))).unwrap();
        assert!(!state.ml_loading);
        assert_eq!(state.ml_train_message.as_deref(), Some(TRAIN_SUCCESS_MESSAGE));

        state.train_with_example_data().unwrap();
        state
            .apply(Outcome::Trained(Err(RequestError::from_status_and_body(
                400,
                r#"{"detail":"Found input variables with inconsistent numbers of samples"}"#,
            ))))
            .unwrap();
        assert!(!state.ml_loading);
        assert_eq!(
            state.ml_error.as_deref(),
            Some("Training failed: Found input variables with inconsistent numbers of samples")
        );
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = DashboardState::new();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(ActivityEvent::expenses(
                format!("event {}", i),
                EventType::Refresh,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }
}
