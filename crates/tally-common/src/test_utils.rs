//! Test utilities and shared test helpers for Tally Bot.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use crate::ChatUser;

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "testing")]
pub fn init_test_logging() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "testing"))]
pub fn init_test_logging() {}

/// Chat-user fixtures for command and store tests.
pub mod user_fixtures {
    use super::ChatUser;

    /// A test user with a stable id and name.
    pub fn horst() -> ChatUser {
        ChatUser::new("100000000000000001", "horst")
    }

    /// A second test user for multi-user scenarios.
    pub fn anna() -> ChatUser {
        ChatUser::new("100000000000000002", "anna")
    }

    /// A third test user for aggregate-view scenarios.
    pub fn bert() -> ChatUser {
        ChatUser::new("100000000000000003", "bert")
    }
}
