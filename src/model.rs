//! Domain types shared by the HTTP client and the dashboard.

use crate::consts::cli_consts::ml::{EXAMPLE_FEATURES, EXAMPLE_TARGETS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Server-assigned expense identifier.
pub type ExpenseId = i64;

/// Predictions returned by the backend, one per accepted feature row.
pub type PredictionResult = Vec<f64>;

/// Wire format of dates in request and response bodies.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Body of an expense creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// One field of the expense form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum DraftField {
    Description,
    Amount,
    Date,
}

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(DraftField),

    #[error("Amount must be a number, got {0:?}")]
    InvalidAmount(String),

    #[error("Date must be formatted as YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),
}

/// Unsaved contents of the expense form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFormDraft {
    pub description: String,
    pub amount: String,
    pub date: String,
}

impl ExpenseFormDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Description => &self.description,
            DraftField::Amount => &self.amount,
            DraftField::Date => &self.date,
        }
    }

    pub fn get_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Description => &mut self.description,
            DraftField::Amount => &mut self.amount,
            DraftField::Date => &mut self.date,
        }
    }

    /// Replaces the value of a single field, leaving the others untouched.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// First empty field, if any.
    pub fn missing_field(&self) -> Option<DraftField> {
        [DraftField::Description, DraftField::Amount, DraftField::Date]
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    /// Converts the draft into a creation request.
    ///
    /// # Errors
    /// Returns a [`DraftError`] when a field is empty, the amount is not a
    /// finite number or the date is not `YYYY-MM-DD`.
    pub fn to_new_expense(&self) -> Result<NewExpense, DraftError> {
        if let Some(field) = self.missing_field() {
            return Err(DraftError::MissingField(field));
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| DraftError::InvalidAmount(self.amount.clone()))?;

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| DraftError::InvalidDate(self.date.clone()))?;

        Ok(NewExpense {
            description: self.description.clone(),
            amount,
            date,
        })
    }
}

/// Batch of numeric feature rows for the prediction service.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureMatrix(Vec<Vec<f64>>);

impl FeatureMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self(rows)
    }

    /// Parses `;`-separated rows of `,`-separated numbers.
    ///
    /// Rows with fewer than two numbers, or with any token that is not a
    /// finite number, are dropped.
    pub fn parse(text: &str) -> Self {
        let rows = text.split(';').filter_map(parse_row).collect();
        Self(rows)
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn parse_row(row: &str) -> Option<Vec<f64>> {
    let values = row
        .split(',')
        .map(|token| {
            let token = token.trim();
            // An empty token (`"1,2,"`) drops the row instead of being read as 0.
            if token.is_empty() {
                return None;
            }
            token.parse::<f64>().ok().filter(|value| value.is_finite())
        })
        .collect::<Option<Vec<f64>>>()?;

    (values.len() >= 2).then_some(values)
}

/// Body of a prediction request.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub features: &'a FeatureMatrix,
}

/// Body of a successful prediction response.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub predictions: PredictionResult,
}

/// Body of a training request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingRequest {
    pub features: FeatureMatrix,
    pub targets: Vec<f64>,
}

impl TrainingRequest {
    /// The fixed example data set used by "train with example data".
    pub fn example() -> Self {
        Self {
            features: FeatureMatrix::new(EXAMPLE_FEATURES.iter().map(|row| row.to_vec()).collect()),
            targets: EXAMPLE_TARGETS.to_vec(),
        }
    }
}

/// Formats a number the way the dashboard shows amounts and predictions.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Joins predictions for display, e.g. `150, 250.5`.
pub struct Predictions<'a>(pub &'a [f64]);

impl Display for Predictions<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|value| format_number(*value))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}
