// ABOUTME: Typed settings loaded from the process environment
// ABOUTME: Route paths for the router table and endpoint paths for the API client

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::constants::*;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
    #[error("Missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Read a variable, passing a missing value through as an empty string
fn var_or_empty(name: &'static str) -> String {
    match env::var(name) {
        Ok(value) => value,
        Err(_) => {
            warn!("{} is not set, using an empty value", name);
            String::new()
        }
    }
}

/// Paths the router table is built from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteSettings {
    /// Base path history-mode navigation is rooted at
    pub base_url: String,
    pub login_page: String,
    pub signup_page: String,
    pub notice_list: String,
    /// Prefix of the notice detail route, `/:boardId` is appended
    pub notice_view: String,
    pub free_list: String,
    /// Prefix of the free-board detail route, `/:boardId` is appended
    pub free_view: String,
}

impl RouteSettings {
    /// Load route paths from the environment.
    ///
    /// Nothing here fails: a missing path becomes an empty string and the
    /// resulting route is simply unreachable.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(MULTIBOARD_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            login_page: var_or_empty(MULTIBOARD_USER_LOGIN_PAGE),
            signup_page: var_or_empty(MULTIBOARD_USER_SIGNUP_PAGE),
            notice_list: var_or_empty(MULTIBOARD_BOARD_NOTICE_LIST),
            notice_view: var_or_empty(MULTIBOARD_BOARD_NOTICE_VIEW),
            free_list: var_or_empty(MULTIBOARD_BOARD_FREE_LIST),
            free_view: var_or_empty(MULTIBOARD_BOARD_FREE_VIEW),
        }
    }
}

/// Settings for the shared API client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub signup_path: String,
    pub login_path: String,
    /// The user id is appended to this path verbatim
    pub check_duplicated_id_path: String,
    pub check_jwt_status_path: String,
    /// No timeout when unset
    pub timeout: Option<Duration>,
    /// Token store file, the platform default is used when unset
    pub storage_path: Option<PathBuf>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            signup_path: String::new(),
            login_path: String::new(),
            check_duplicated_id_path: String::new(),
            check_jwt_status_path: String::new(),
            timeout: None,
            storage_path: None,
        }
    }
}

impl ApiSettings {
    pub fn from_env() -> ConfigResult<Self> {
        let base_url =
            env::var(MULTIBOARD_API_BASE_URL).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let timeout = match env::var(MULTIBOARD_API_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>()?;
                if secs == 0 {
                    return Err(ConfigError::ZeroTimeout);
                }
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let storage_path = env::var(MULTIBOARD_STORAGE_PATH)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            base_url,
            signup_path: var_or_empty(MULTIBOARD_API_USER_SIGNUP),
            login_path: var_or_empty(MULTIBOARD_API_USER_LOGIN),
            check_duplicated_id_path: var_or_empty(MULTIBOARD_API_CHECK_DUPLICATED_ID),
            check_jwt_status_path: var_or_empty(MULTIBOARD_API_CHECK_JWT_STATUS),
            timeout,
            storage_path,
        })
    }

    /// Report every endpoint that is missing or blank
    pub fn validate(&self) -> ConfigResult<()> {
        let missing: Vec<&'static str> = [
            (MULTIBOARD_API_BASE_URL, &self.base_url),
            (MULTIBOARD_API_USER_SIGNUP, &self.signup_path),
            (MULTIBOARD_API_USER_LOGIN, &self.login_path),
            (MULTIBOARD_API_CHECK_DUPLICATED_ID, &self.check_duplicated_id_path),
            (MULTIBOARD_API_CHECK_JWT_STATUS, &self.check_jwt_status_path),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ApiSettings {
        ApiSettings {
            signup_path: "/api/users/signup".to_string(),
            login_path: "/api/users/login".to_string(),
            check_duplicated_id_path: "/api/users/check/".to_string(),
            check_jwt_status_path: "/api/users/jwt/status".to_string(),
            ..ApiSettings::default()
        }
    }

    #[test]
    fn test_validate_complete_settings() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_validate_lists_every_missing_endpoint() {
        let settings = ApiSettings {
            login_path: "  ".to_string(),
            check_jwt_status_path: String::new(),
            ..complete()
        };

        let err = settings.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec![
                MULTIBOARD_API_USER_LOGIN,
                MULTIBOARD_API_CHECK_JWT_STATUS
            ])
        );
        assert_eq!(
            err.to_string(),
            "Missing required configuration: MULTIBOARD_API_USER_LOGIN, MULTIBOARD_API_CHECK_JWT_STATUS"
        );
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let settings = ApiSettings::default();
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert!(settings.timeout.is_none());
    }
}
