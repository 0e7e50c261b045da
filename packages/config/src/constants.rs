// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Multiboard

// Router Configuration
pub const MULTIBOARD_BASE_URL: &str = "MULTIBOARD_BASE_URL";
pub const MULTIBOARD_USER_LOGIN_PAGE: &str = "MULTIBOARD_USER_LOGIN_PAGE";
pub const MULTIBOARD_USER_SIGNUP_PAGE: &str = "MULTIBOARD_USER_SIGNUP_PAGE";
pub const MULTIBOARD_BOARD_NOTICE_LIST: &str = "MULTIBOARD_BOARD_NOTICE_LIST";
pub const MULTIBOARD_BOARD_NOTICE_VIEW: &str = "MULTIBOARD_BOARD_NOTICE_VIEW";
pub const MULTIBOARD_BOARD_FREE_LIST: &str = "MULTIBOARD_BOARD_FREE_LIST";
pub const MULTIBOARD_BOARD_FREE_VIEW: &str = "MULTIBOARD_BOARD_FREE_VIEW";

// API Client Configuration
pub const MULTIBOARD_API_BASE_URL: &str = "MULTIBOARD_API_BASE_URL";
pub const MULTIBOARD_API_USER_SIGNUP: &str = "MULTIBOARD_API_USER_SIGNUP";
pub const MULTIBOARD_API_USER_LOGIN: &str = "MULTIBOARD_API_USER_LOGIN";
pub const MULTIBOARD_API_CHECK_DUPLICATED_ID: &str = "MULTIBOARD_API_CHECK_DUPLICATED_ID";
pub const MULTIBOARD_API_CHECK_JWT_STATUS: &str = "MULTIBOARD_API_CHECK_JWT_STATUS";
pub const MULTIBOARD_API_TIMEOUT_SECS: &str = "MULTIBOARD_API_TIMEOUT_SECS";

// Token Storage
pub const MULTIBOARD_STORAGE_PATH: &str = "MULTIBOARD_STORAGE_PATH";

// Defaults
pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
