// ABOUTME: Hooks run on every outgoing request and incoming response
// ABOUTME: Interceptors observe traffic and errors; they never alter or swallow them

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Request, Response};
use tracing::{debug, error, info};

use crate::error::ClientError;

/// Observer invoked by the API client around each call.
///
/// Error hooks run just before the error is returned to the caller.
pub trait Interceptor: Send + Sync {
    fn on_request(&self, _request: &Request) {}

    fn on_request_error(&self, _error: &ClientError) {}

    fn on_response(&self, _response: &Response) {}

    fn on_response_error(&self, _error: &ClientError) {}
}

/// Logs every request, response and failure
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

fn redacted(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if *name == AUTHORIZATION {
                "<redacted>".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.to_string(), shown)
        })
        .collect()
}

impl Interceptor for LoggingInterceptor {
    fn on_request(&self, request: &Request) {
        info!("[Before] Request: {} {}", request.method(), request.url());
        debug!("[Before] Request headers: {:?}", redacted(request.headers()));
    }

    fn on_request_error(&self, error: &ClientError) {
        error!("[Before] Request Error: {}", error);
    }

    fn on_response(&self, response: &Response) {
        info!("[After] Response: {} {}", response.status(), response.url());
        debug!("[After] Response headers: {:?}", redacted(response.headers()));
    }

    fn on_response_error(&self, error: &ClientError) {
        error!("[After] Response Error: {}", error);
    }
}
