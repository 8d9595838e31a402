//! Session setup and initialization

use crate::api::ApiClient;
use crate::environment::Environment;
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Backend client shared by every request of the session
    pub api: Arc<ApiClient>,
    /// Backend the client talks to
    pub environment: Environment,
}

/// Sets up a session against the resolved backend
///
/// # Arguments
/// * `environment` - Backend to connect to
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(environment: Environment) -> Result<SessionData, Box<dyn Error>> {
    log::debug!("setting up session against {}", environment.api_url());
    let api = ApiClient::new(environment.clone())?;
    Ok(SessionData {
        api: Arc::new(api),
        environment,
    })
}
