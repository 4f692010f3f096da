//! Centralized constants for the Natter client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default base URL of the Natter API.
pub const DEFAULT_BASE_URL: &str = "https://localhost:4567";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Navigation Targets
// =============================================================================

/// Page the login flow navigates to after a successful login.
pub const DEFAULT_APP_PAGE: &str = "/natter.html";

/// Page the space flow navigates to when the session is rejected.
pub const DEFAULT_LOGIN_PAGE: &str = "/login.html";

// =============================================================================
// Cookies & Headers
// =============================================================================

/// Name of the cookie holding the anti-forgery token.
pub const CSRF_COOKIE_NAME: &str = "csrfToken";

/// Header carrying the anti-forgery token on state-changing requests.
pub const CSRF_HEADER_NAME: &str = "X-CSRF-Token";

/// File name of the persisted cookie jar inside the data directory.
pub const COOKIE_JAR_FILE_NAME: &str = "cookies.json";

// =============================================================================
// Input Limits
// =============================================================================

/// Maximum length of a space name accepted by the API.
pub const MAX_SPACE_NAME_LEN: usize = 255;

/// Minimum password length accepted by the API at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum username length accepted by the API.
pub const MAX_USERNAME_LEN: usize = 30;
