use crate::api::error::RequestError;
use crate::environment::Environment;
use crate::model::{Expense, ExpenseId, FeatureMatrix, NewExpense, PredictionResult, TrainingRequest};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ExpenseApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the full expense collection.
    async fn list_expenses(&self) -> Result<Vec<Expense>, RequestError>;

    /// Record a new expense, returning the stored record.
    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, RequestError>;

    /// Delete the expense with the given identifier.
    async fn delete_expense(&self, id: ExpenseId) -> Result<(), RequestError>;

    /// Request one budget prediction per feature row.
    async fn predict(&self, features: &FeatureMatrix) -> Result<PredictionResult, RequestError>;

    /// Train the budget model.
    async fn train(&self, request: &TrainingRequest) -> Result<(), RequestError>;
}
