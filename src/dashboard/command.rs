//! Backend requests issued by the dashboard and their results.

use crate::api::ExpenseApi;
use crate::api::error::RequestError;
use crate::model::{Expense, ExpenseId, FeatureMatrix, NewExpense, PredictionResult, TrainingRequest};

/// A request the dashboard wants performed against the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadExpenses,
    AddExpense(NewExpense),
    DeleteExpense(ExpenseId),
    Predict(FeatureMatrix),
    Train(TrainingRequest),
}

/// The result of executing a [`Command`], fed back into the dashboard state.
#[derive(Debug)]
pub enum Outcome {
    ExpensesLoaded(Result<Vec<Expense>, RequestError>),
    ExpenseAdded(Result<Expense, RequestError>),
    ExpenseDeleted {
        id: ExpenseId,
        result: Result<(), RequestError>,
    },
    Predicted(Result<PredictionResult, RequestError>),
    Trained(Result<(), RequestError>),
}

/// Performs the single backend call behind a command.
pub async fn execute<A: ExpenseApi + ?Sized>(api: &A, command: Command) -> Outcome {
    match command {
        Command::LoadExpenses => Outcome::ExpensesLoaded(api.list_expenses().await),
        Command::AddExpense(expense) => Outcome::ExpenseAdded(api.create_expense(&expense).await),
        Command::DeleteExpense(id) => Outcome::ExpenseDeleted {
            id,
            result: api.delete_expense(id).await,
        },
        Command::Predict(features) => Outcome::Predicted(api.predict(&features).await),
        Command::Train(request) => Outcome::Trained(api.train(&request).await),
    }
}
