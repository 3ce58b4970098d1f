//! Environment helpers
//!
//! The deployment mode is read from `APP_ENV` (`development`, `test`, `production`).

use std::env;

pub const APP_ENV_VAR: &str = "APP_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Test,
    Production,
}

impl AppEnv {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "test" => AppEnv::Test,
            "prod" | "production" => AppEnv::Production,
            _ => AppEnv::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Test => "test",
            AppEnv::Production => "production",
        }
    }
}

/// Current mode; unset or unknown values mean development.
pub fn app_env() -> AppEnv {
    env::var(APP_ENV_VAR)
        .map(|v| AppEnv::parse(&v))
        .unwrap_or(AppEnv::Development)
}

pub fn is_test_mode() -> bool {
    app_env() == AppEnv::Test
}
