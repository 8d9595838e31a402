//! Headless mode execution
//!
//! One-shot commands that drive the dashboard controller without a terminal
//! UI and report the result on the console.

use super::SessionData;
use crate::api::ExpenseApi;
use crate::api::error::RequestError;
use crate::dashboard::{DashboardController, DashboardState, Mutation};
use crate::model::{DATE_FORMAT, DraftField, ExpenseId, Predictions, format_number};
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use std::error::Error;

/// A dashboard operation run from the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessCommand {
    List,
    Add {
        description: String,
        amount: String,
        date: String,
    },
    Delete {
        id: ExpenseId,
    },
    Predict {
        features: String,
    },
    Train,
}

/// Runs a single dashboard operation and prints its outcome
///
/// # Returns
/// * `Ok(())` - The operation succeeded
/// * `Err` - The input was rejected locally or the backend call failed
pub async fn run_headless_mode(
    session: SessionData,
    command: HeadlessCommand,
) -> Result<(), Box<dyn Error>> {
    let mut controller = DashboardController::new(session.api);
    run_command(&mut controller, command).await
}

async fn run_command<A: ExpenseApi + ?Sized>(
    controller: &mut DashboardController<A>,
    command: HeadlessCommand,
) -> Result<(), Box<dyn Error>> {
    match command {
        HeadlessCommand::List => {
            controller
                .load_expenses()
                .await
                .map_err(|e| report_request_error("Failed to load expenses", e))?;
            print_expenses(controller.state());
            Ok(())
        }
        HeadlessCommand::Add {
            description,
            amount,
            date,
        } => {
            controller.update_draft_field(DraftField::Description, description);
            controller.update_draft_field(DraftField::Amount, amount);
            controller.update_draft_field(DraftField::Date, date);

            let mutation = controller
                .add_expense()
                .await
                .map_err(|e| report_request_error("Failed to add expense", e))?;
            if let Mutation::Rejected = mutation {
                let reason = latest_activity(controller.state())
                    .unwrap_or_else(|| "Expense form is incomplete".to_string());
                print_cmd_warn!("Expense not added", "{}", reason);
                return Err(reason.into());
            }

            print_cmd_success!("Expense added", "");
            report_reload(controller.state(), mutation);
            Ok(())
        }
        HeadlessCommand::Delete { id } => {
            let mutation = controller.delete_expense(id).await.map_err(|e| {
                report_request_error(&format!("Failed to delete expense #{}", id), e)
            })?;
            print_cmd_success!("Expense deleted", "#{}", id);
            report_reload(controller.state(), mutation);
            Ok(())
        }
        HeadlessCommand::Predict { features } => {
            controller.set_ml_features_text(features);
            controller.predict().await;

            let state = controller.state();
            if let Some(error) = &state.ml_error {
                print_cmd_error!("Prediction failed", error.as_str());
                return Err(error.clone().into());
            }
            let predictions = state.ml_result.as_deref().unwrap_or_default();
            print_cmd_success!("Predictions", "{}", Predictions(predictions));
            Ok(())
        }
        HeadlessCommand::Train => {
            controller.train_with_example_data().await;

            let state = controller.state();
            if let Some(error) = &state.ml_error {
                print_cmd_error!("Model not trained", error.as_str());
                return Err(error.clone().into());
            }
            print_cmd_success!(
                "Training complete",
                "{}",
                state.ml_train_message.as_deref().unwrap_or_default()
            );
            Ok(())
        }
    }
}

fn report_request_error(context: &str, err: RequestError) -> Box<dyn Error> {
    print_cmd_error!(context, err.user_message().as_str());
    Box::new(err)
}

/// The change is already stored once we get here, so a failed reload only
/// warns; retrying the command would apply it twice.
fn report_reload(state: &DashboardState, mutation: Mutation) {
    match mutation {
        Mutation::ReloadFailed(err) => {
            print_cmd_warn!("Could not reload expenses", "{}", err.user_message());
        }
        _ => print_expenses(state),
    }
}

fn latest_activity(state: &DashboardState) -> Option<String> {
    state.activity_logs.back().map(|event| event.msg.clone())
}

fn print_expenses(state: &DashboardState) {
    if state.expenses.is_empty() {
        print_cmd_info!("No expenses recorded yet", "");
        return;
    }

    println!(
        "{:>6}  {:<32} {:>12}  {:<10}",
        "ID", "Description", "Amount", "Date"
    );
    for expense in &state.expenses {
        println!(
            "{:>6}  {:<32} {:>12}  {:<10}",
            expense.id,
            expense.description,
            format_number(expense.amount),
            expense.date.format(DATE_FORMAT)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockExpenseApi;
    use crate::consts::cli_consts::ml::FEATURES_FORMAT_HINT;
    use crate::model::Expense;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn controller(api: MockExpenseApi) -> DashboardController<MockExpenseApi> {
        DashboardController::new(Arc::new(api))
    }

    #[tokio::test]
    async fn add_with_bad_amount_is_rejected_locally() {
        let mut api = MockExpenseApi::new();
        api.expect_create_expense().never();

        let mut controller = controller(api);
        let err = run_command(
            &mut controller,
            HeadlessCommand::Add {
                description: "Taxi".to_string(),
                amount: "twelve".to_string(),
                date: "2024-07-04".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("twelve"));
    }

    #[tokio::test]
    async fn add_posts_and_lists() {
        let mut api = MockExpenseApi::new();
        api.expect_create_expense().times(1).returning(|e| {
            Ok(Expense {
                id: 1,
                description: e.description.clone(),
                amount: e.amount,
                date: e.date,
            })
        });
        api.expect_list_expenses().times(1).returning(|| {
            Ok(vec![Expense {
                id: 1,
                description: "Taxi".to_string(),
                amount: 12.0,
                date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            }])
        });

        let mut controller = controller(api);
        run_command(
            &mut controller,
            HeadlessCommand::Add {
                description: "Taxi".to_string(),
                amount: "12".to_string(),
                date: "2024-07-04".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(controller.state().expenses.len(), 1);
    }

    #[tokio::test]
    async fn add_succeeds_when_only_the_reload_fails() {
        let mut api = MockExpenseApi::new();
        api.expect_create_expense().times(1).returning(|e| {
            Ok(Expense {
                id: 3,
                description: e.description.clone(),
                amount: e.amount,
                date: e.date,
            })
        });
        api.expect_list_expenses()
            .times(1)
            .returning(|| Err(RequestError::from_status_and_body(503, "")));

        let mut controller = controller(api);
        run_command(
            &mut controller,
            HeadlessCommand::Add {
                description: "Taxi".to_string(),
                amount: "12".to_string(),
                date: "2024-07-04".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(controller.state().draft.description.is_empty());
    }

    #[tokio::test]
    async fn delete_failure_is_returned() {
        let mut api = MockExpenseApi::new();
        api.expect_delete_expense()
            .times(1)
            .returning(|_| {
                Err(RequestError::from_status_and_body(
                    404,
                    r#"{"detail":"Expense not found"}"#,
                ))
            });
        api.expect_list_expenses().never();

        let mut controller = controller(api);
        let err = run_command(&mut controller, HeadlessCommand::Delete { id: 99 })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("status 404"));
    }

    #[tokio::test]
    async fn predict_with_garbage_fails_with_hint() {
        let mut api = MockExpenseApi::new();
        api.expect_predict().never();

        let mut controller = controller(api);
        let err = run_command(
            &mut controller,
            HeadlessCommand::Predict {
                features: "abc".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), FEATURES_FORMAT_HINT);
    }

    #[tokio::test]
    async fn train_reports_backend_failure() {
        let mut api = MockExpenseApi::new();
        api.expect_train()
            .times(1)
            .returning(|_| Err(RequestError::from_status_and_body(500, "")));

        let mut controller = controller(api);
        let err = run_command(&mut controller, HeadlessCommand::Train)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Training failed: "));
    }
}
