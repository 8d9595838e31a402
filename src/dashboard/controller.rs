//! Sequential dashboard driver
//!
//! Runs each dashboard operation to completion, awaiting the backend inline
//! and applying follow-up commands (the refetch after a mutation) before
//! returning. Used by the headless commands; the TUI dispatches the same
//! commands concurrently instead.

use super::command::{self, Command};
use super::state::DashboardState;
use crate::api::ExpenseApi;
use crate::api::error::RequestError;
use crate::model::{DraftField, ExpenseId};
use std::sync::Arc;

/// How far an add or delete got.
#[derive(Debug)]
pub enum Mutation {
    /// Rejected locally; nothing was sent.
    Rejected,
    /// Accepted by the backend and the list reloaded.
    Applied,
    /// Accepted by the backend, but the reload that follows failed. The
    /// change is stored server-side; the list is stale.
    ReloadFailed(RequestError),
}

pub struct DashboardController<A: ExpenseApi + ?Sized> {
    api: Arc<A>,
    state: DashboardState,
}

impl<A: ExpenseApi + ?Sized> DashboardController<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: DashboardState::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Execute a command and every follow-up it produces.
    async fn dispatch(&mut self, command: Command) -> Result<(), RequestError> {
        let mut next = Some(command);
        while let Some(command) = next.take() {
            let outcome = command::execute(self.api.as_ref(), command).await;
            next = self.state.apply(outcome)?;
        }
        Ok(())
    }

    /// Execute a mutation, keeping its own result apart from the reload.
    async fn mutate(&mut self, command: Command) -> Result<Mutation, RequestError> {
        let outcome = command::execute(self.api.as_ref(), command).await;
        match self.state.apply(outcome)? {
            Some(reload) => match self.dispatch(reload).await {
                Ok(()) => Ok(Mutation::Applied),
                Err(err) => Ok(Mutation::ReloadFailed(err)),
            },
            None => Ok(Mutation::Applied),
        }
    }

    pub async fn load_expenses(&mut self) -> Result<(), RequestError> {
        let command = self.state.load_expenses();
        self.dispatch(command).await
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.update_draft_field(field, value);
    }

    pub fn set_ml_features_text(&mut self, text: impl Into<String>) {
        self.state.set_ml_features_text(text);
    }

    /// Submits the draft and refetches. `Err` means the backend refused or
    /// never received the expense.
    pub async fn add_expense(&mut self) -> Result<Mutation, RequestError> {
        match self.state.add_expense() {
            Some(command) => self.mutate(command).await,
            None => Ok(Mutation::Rejected),
        }
    }

    pub async fn delete_expense(&mut self, id: ExpenseId) -> Result<Mutation, RequestError> {
        let command = self.state.delete_expense(id);
        self.mutate(command).await
    }

    /// Runs a prediction; the result or error ends up in the state.
    pub async fn predict(&mut self) {
        if let Some(command) = self.state.predict() {
            // ML failures are absorbed into `ml_error` by `apply`.
            let _ = self.dispatch(command).await;
        }
    }

    /// Trains on the example data; the message or error ends up in the state.
    pub async fn train_with_example_data(&mut self) {
        if let Some(command) = self.state.train_with_example_data() {
            let _ = self.dispatch(command).await;
        }
    }
}
