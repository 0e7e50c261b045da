// ABOUTME: Shared HTTP client bound to a single backend origin
// ABOUTME: Applies default headers, the bearer token captured at construction, and interceptors

use multiboard_config::ApiSettings;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Response};
use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::{
    error::{ClientError, ClientResult},
    interceptor::{Interceptor, LoggingInterceptor},
    storage::{TokenStore, JWT_KEY},
};

/// Authorization value used when no token is stored
const MISSING_TOKEN: &str = "null";

/// Client for the board API.
///
/// The `Authorization` header is read from the token store once, when the
/// client is built. Tokens stored later (by a login on this same client) are
/// not picked up until a new client is constructed.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
    default_headers: HeaderMap,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl ApiClient {
    /// Create the client and seed its bearer token from `store`
    pub async fn new(settings: &ApiSettings, store: &dyn TokenStore) -> ClientResult<Self> {
        let mut client = Self::with_settings(settings)?;
        let token = store.get(JWT_KEY).await?;
        debug!(
            "Seeding authorization header ({} token)",
            if token.is_some() { "stored" } else { "no" }
        );
        client.set_bearer(token.as_deref().unwrap_or(MISSING_TOKEN))?;
        Ok(client)
    }

    /// Create the client without an authorization header
    pub fn with_settings(settings: &ApiSettings) -> ClientResult<Self> {
        Url::parse(&settings.base_url).map_err(|e| {
            ClientError::config(format!("Invalid base URL '{}': {}", settings.base_url, e))
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientError::config(format!("Failed to build HTTP client: {}", e)))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            http_client,
            base_url: settings.base_url.clone(),
            default_headers,
            interceptors: vec![Arc::new(LoggingInterceptor)],
        })
    }

    fn set_bearer(&mut self, token: &str) -> ClientResult<()> {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ClientError::config(format!("Invalid token for header: {}", e)))?;
        self.default_headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Register an additional interceptor, run after the existing ones
    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub async fn get(&self, path: &str) -> ClientResult<Response> {
        self.execute(Method::GET, path, None).await
    }

    /// POST an already serialized JSON body
    pub async fn post(&self, path: &str, body: String) -> ClientResult<Response> {
        self.execute(Method::POST, path, Some(body)).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> ClientResult<Response> {
        let request = match self.prepare(method, path, body) {
            Ok(request) => request,
            Err(err) => {
                self.interceptors.iter().for_each(|i| i.on_request_error(&err));
                return Err(err);
            }
        };
        self.interceptors.iter().for_each(|i| i.on_request(&request));

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let err = ClientError::from(e);
                self.interceptors.iter().for_each(|i| i.on_response_error(&err));
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ClientError::from_error_body(status, &body);
            self.interceptors.iter().for_each(|i| i.on_response_error(&err));
            return Err(err);
        }

        self.interceptors.iter().for_each(|i| i.on_response(&response));
        Ok(response)
    }

    fn prepare(&self, method: Method, path: &str, body: Option<String>) -> ClientResult<Request> {
        let target = join_url(&self.base_url, path);
        let url = Url::parse(&target)
            .map_err(|e| ClientError::Request(format!("Invalid URL '{}': {}", target, e)))?;

        let mut builder = self
            .http_client
            .request(method, url)
            .headers(self.default_headers.clone());
        if let Some(body) = body {
            builder = builder.body(body);
        }

        builder.build().map_err(ClientError::from)
    }
}

/// True when `path` starts with a URL scheme followed by `://`
fn is_absolute_url(path: &str) -> bool {
    let Some((scheme, _)) = path.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Combine the base URL and a request path. Absolute URLs are used as-is.
fn join_url(base: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
