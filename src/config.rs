// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup; command line flags take precedence where both exist.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `APP_ENV` | Build variant (`development` or `production`) | `development` |
//! | `ENVIRONMENT_FILE` | JSON document holding a full environment record | None |
//! | `API_SERVER_URL` | Override for `apiServerUrl` | Required for production |
//! | `AUTH0_URL` | Override for `auth0.url` (domain prefix) | Required for production |
//! | `AUTH0_AUDIENCE` | Override for `auth0.audience` | Required for production |
//! | `AUTH0_CLIENT_ID` | Override for `auth0.clientId` | Required for production |
//! | `AUTH0_CALLBACK_URL` | Override for `auth0.callbackURL` | Required for production |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable selecting the build variant.
pub const APP_ENV_ENV: &str = "APP_ENV";

/// Environment variable pointing at a JSON environment document.
///
/// When set, the document replaces the built-in record for the variant.
pub const ENVIRONMENT_FILE_ENV: &str = "ENVIRONMENT_FILE";

pub const API_SERVER_URL_ENV: &str = "API_SERVER_URL";
pub const AUTH0_URL_ENV: &str = "AUTH0_URL";
pub const AUTH0_AUDIENCE_ENV: &str = "AUTH0_AUDIENCE";
pub const AUTH0_CLIENT_ID_ENV: &str = "AUTH0_CLIENT_ID";
pub const AUTH0_CALLBACK_URL_ENV: &str = "AUTH0_CALLBACK_URL";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Logging format selector. `json` switches to structured output.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Read a variable, trimming it and treating blank values as unset.
pub fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn env_or_default(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}

/// Bind port from `PORT`, falling back to the default on absence or garbage.
pub fn port_from_env() -> u16 {
    env_optional(PORT_ENV)
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
