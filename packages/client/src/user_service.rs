// ABOUTME: User-facing auth operations: signup, login, duplicate-id check and JWT status
// ABOUTME: Persists the session token and reports each outcome through the notifier

use multiboard_config::ApiSettings;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    api::{ApiResponse, AuthData, LoginRequest, SignupRequest},
    client::ApiClient,
    error::{ClientError, ClientResult},
    notify::Notifier,
    storage::{TokenStore, JWT_KEY},
};

/// Status the server answers the JWT check with when the token is expired or malformed
pub const SESSION_EXPIRED_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Shown when the server reports the stored session as expired
pub const SESSION_EXPIRED_MESSAGE: &str = "Your login session has expired. Please log in again.";

/// Endpoint paths, relative to the client's base URL
#[derive(Debug, Clone)]
struct Endpoints {
    signup: String,
    login: String,
    check_duplicated_id: String,
    check_jwt_status: String,
}

impl From<&ApiSettings> for Endpoints {
    fn from(settings: &ApiSettings) -> Self {
        Self {
            signup: settings.signup_path.clone(),
            login: settings.login_path.clone(),
            check_duplicated_id: settings.check_duplicated_id_path.clone(),
            check_jwt_status: settings.check_jwt_status_path.clone(),
        }
    }
}

/// Auth operations against the board API
pub struct UserService {
    client: ApiClient,
    store: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    endpoints: Endpoints,
}

impl UserService {
    /// Build the shared client from `settings`, seeding its token from `store`
    pub async fn new(
        settings: &ApiSettings,
        store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
    ) -> ClientResult<Self> {
        let client = ApiClient::new(settings, store.as_ref()).await?;
        Ok(Self::with_client(client, settings, store, notifier))
    }

    /// Use an already configured client
    pub fn with_client(
        client: ApiClient,
        settings: &ApiSettings,
        store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            store,
            notifier,
            endpoints: Endpoints::from(settings),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Register a new user and persist the returned token
    pub async fn signup_user(&self, user: &SignupRequest) -> ClientResult<AuthData> {
        info!("Signing up user {}", user.user_id);
        let result = self.authenticate(&self.endpoints.signup, user).await;
        self.report(result)
    }

    /// Log in and persist the returned token
    pub async fn login_user(&self, user: &LoginRequest) -> ClientResult<AuthData> {
        info!("Logging in user {}", user.user_id);
        let result = self.authenticate(&self.endpoints.login, user).await;
        self.report(result)
    }

    /// Ask the server whether `user_id` is taken.
    ///
    /// The id is appended to the configured path as given. The server's
    /// verdict is shown to the user and also returned.
    pub async fn check_duplicate_id(&self, user_id: &str) -> ClientResult<String> {
        let path = format!("{}{}", self.endpoints.check_duplicated_id, user_id);
        debug!("Checking whether id {} is available", user_id);

        match self.fetch_message(&path).await {
            Ok(message) => {
                self.notifier.notify(&message);
                Ok(message)
            }
            Err(err) => Err(self.surface_failure(err)),
        }
    }

    /// Check the stored token with the server, returning its payload verbatim.
    ///
    /// A `400` means the token is expired or malformed: the user is told and
    /// the token is removed. Every other failure, `401` included, leaves the
    /// store untouched and is not shown to the user.
    pub async fn get_jwt_auth_status(&self) -> ClientResult<Value> {
        match self.fetch_status().await {
            Ok(payload) => Ok(payload),
            Err(ClientError::Api { status, .. }) if status == SESSION_EXPIRED_STATUS.as_u16() => {
                warn!("Session expired, clearing stored token");
                self.notifier.notify(SESSION_EXPIRED_MESSAGE);
                if let Err(e) = self.store.remove(JWT_KEY).await {
                    error!("Failed to clear expired token: {}", e);
                }
                Err(ClientError::SessionExpired)
            }
            Err(err) => {
                debug!("Not authenticated: {}", err);
                Err(err)
            }
        }
    }

    async fn authenticate<T: Serialize>(&self, path: &str, body: &T) -> ClientResult<(String, AuthData)> {
        let body = serde_json::to_string(body)
            .map_err(|e| ClientError::Request(format!("Failed to serialize body: {}", e)))?;

        let response = self.client.post(path, body).await?;
        let envelope: ApiResponse<AuthData> = parse_json(response).await?;
        let message = envelope.message_or_default();
        let data = envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Response contained no data".to_string()))?;

        self.store.set(JWT_KEY, &data.jwt).await?;
        debug!("Stored session token");

        Ok((message, data))
    }

    async fn fetch_message(&self, path: &str) -> ClientResult<String> {
        let response = self.client.get(path).await?;
        let envelope: ApiResponse<Value> = parse_json(response).await?;
        Ok(envelope.message_or_default())
    }

    /// Body of the status response as sent: empty is `null`, non-JSON is a string
    async fn fetch_status(&self) -> ClientResult<Value> {
        let response = self.client.get(&self.endpoints.check_jwt_status).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    /// Show the outcome of signup or login to the user
    fn report(&self, result: ClientResult<(String, AuthData)>) -> ClientResult<AuthData> {
        match result {
            Ok((message, data)) => {
                self.notifier.notify(&message);
                Ok(data)
            }
            Err(err) => Err(self.surface_failure(err)),
        }
    }

    fn surface_failure(&self, err: ClientError) -> ClientError {
        error!("Request failed: {}", err);
        self.notifier.notify(&err.user_message());
        err
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
