// ABOUTME: Multiboard API client library
// ABOUTME: Shared HTTP client with interceptors, token storage, and the user auth service

pub mod api;
pub mod client;
pub mod error;
pub mod interceptor;
pub mod notify;
pub mod storage;
pub mod user_service;

// Re-export main types
pub use api::{ApiResponse, AuthData, LoginRequest, SignupRequest};
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use interceptor::{Interceptor, LoggingInterceptor};
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore, JWT_KEY};
pub use user_service::{UserService, SESSION_EXPIRED_MESSAGE, SESSION_EXPIRED_STATUS};
