//! SavvySpend Backend Client
//!
//! Thin JSON-over-HTTP adapter for the expense and budget-prediction backend.
//! Every call is a single request: no retries, no caching.

use crate::api::ExpenseApi;
use crate::api::error::RequestError;
use crate::environment::Environment;
use crate::model::{
    Expense, ExpenseId, FeatureMatrix, NewExpense, PredictRequest, PredictResponse,
    PredictionResult, TrainingRequest,
};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

// User-Agent string with client version
const USER_AGENT: &str = concat!("savvyspend/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, RequestError> {
        Ok(Self {
            client: ClientBuilder::new().user_agent(USER_AGENT).build()?,
            environment,
        })
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, RequestError> {
        if !response.status().is_success() {
            return Err(RequestError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        // An empty body decodes as JSON null so callers can ask for `IgnoredAny`.
        let bytes: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        Ok(serde_json::from_slice(bytes)?)
    }

    /// `GET {base}/{path}`, decoding the JSON response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode_response(response).await
    }

    /// `POST {base}/{path}` with a JSON body, decoding the JSON response body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode_response(response).await
    }

    /// `DELETE {base}/{path}`, decoding the JSON response body.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::decode_response(response).await
    }
}

#[async_trait::async_trait]
impl ExpenseApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, RequestError> {
        self.get("expenses/").await
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, RequestError> {
        self.post("expenses/", expense).await
    }

    async fn delete_expense(&self, id: ExpenseId) -> Result<(), RequestError> {
        let _: IgnoredAny = self.delete(&format!("expenses/{}", id)).await?;
        Ok(())
    }

    async fn predict(&self, features: &FeatureMatrix) -> Result<PredictionResult, RequestError> {
        let response: PredictResponse = self
            .post("ml/predict", &PredictRequest { features })
            .await?;
        Ok(response.predictions)
    }

    async fn train(&self, request: &TrainingRequest) -> Result<(), RequestError> {
        let _: IgnoredAny = self.post("ml/train", request).await?;
        Ok(())
    }
}
