//! Shared test utilities for natter CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Keep the cookie jar inside a per-test temp directory.
//!
//! Invariants / Assumptions:
//! - No test touches the real user data directory.

use std::path::Path;

use assert_cmd::Command;

/// Returns a hermetic `natter` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `NATTER_*` variables from the host are cleared.
pub fn natter_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("natter");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("NATTER_BASE_URL")
        .env_remove("NATTER_SKIP_VERIFY")
        .env_remove("NATTER_TIMEOUT")
        .env_remove("NATTER_APP_PAGE")
        .env_remove("NATTER_LOGIN_PAGE")
        .env_remove("NATTER_COOKIE_JAR")
        .env_remove("NATTER_USERNAME")
        .env_remove("NATTER_PASSWORD");

    cmd
}

/// A hermetic command against `base_url` using the cookie jar at `jar`.
#[allow(dead_code)]
pub fn natter_cmd_with_jar(base_url: &str, jar: &Path) -> Command {
    let mut cmd = natter_cmd();
    cmd.env("NATTER_BASE_URL", base_url);
    cmd.env("NATTER_COOKIE_JAR", jar);
    cmd
}
