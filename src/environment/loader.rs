// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Layered environment resolution.
//!
//! ## Resolution Order
//!
//! 1. Built-in record for the variant (development only)
//! 2. JSON document (`--file` / `ENVIRONMENT_FILE`), replacing the base
//! 3. Per-field environment variable overrides
//!
//! The `production` flag always follows the requested variant, and the
//! result is validated before it is handed out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{
    env_optional, API_SERVER_URL_ENV, APP_ENV_ENV, AUTH0_AUDIENCE_ENV, AUTH0_CALLBACK_URL_ENV,
    AUTH0_CLIENT_ID_ENV, AUTH0_URL_ENV, ENVIRONMENT_FILE_ENV,
};

use super::{Auth0Settings, BuildVariant, ConfigError, Environment};

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves an [`Environment`] for one variant.
pub struct EnvironmentLoader {
    variant: BuildVariant,
    file: Option<PathBuf>,
    lookup: Lookup,
}

impl EnvironmentLoader {
    /// Loader for `variant` reading overrides from the process environment.
    pub fn new(variant: BuildVariant) -> Self {
        Self {
            variant,
            file: None,
            lookup: Box::new(env_optional),
        }
    }

    /// Loader configured from explicit choices, falling back to `APP_ENV`
    /// and `ENVIRONMENT_FILE`.
    pub fn from_env(
        variant: Option<BuildVariant>,
        file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let variant = select_variant(variant, &env_optional)?;
        let file = file.or_else(|| env_optional(ENVIRONMENT_FILE_ENV).map(PathBuf::from));
        let mut loader = Self::new(variant);
        loader.file = file;
        Ok(loader)
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replace the variable source (tests use a map instead of the process).
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.lookup = Box::new(lookup);
        self
    }

    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    fn var(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.var(name)
            .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
    }

    /// Resolve and validate the record.
    pub fn load(&self) -> Result<Environment, ConfigError> {
        let base = match &self.file {
            Some(path) => {
                let env = read_file(path)?;
                if env.variant() != self.variant {
                    return Err(ConfigError::VariantMismatch {
                        requested: self.variant,
                        found: env.variant(),
                    });
                }
                Some(env)
            }
            None => Environment::builtin(self.variant),
        };

        let mut env = match base {
            Some(mut env) => {
                let overridden = self.apply_overrides(&mut env);
                if !overridden.is_empty() {
                    tracing::debug!(fields = ?overridden, "Applied environment overrides");
                }
                env
            }
            None => self.build_from_vars()?,
        };
        env.production = self.variant.is_production();

        env.validate()?;

        let source = self
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string());
        tracing::info!(
            variant = %self.variant,
            api_server_url = %env.api_server_url,
            auth0_domain = %env.auth0.domain(),
            source = %source,
            "Resolved environment"
        );

        Ok(env)
    }

    /// Build a record purely from variables; every field is required.
    fn build_from_vars(&self) -> Result<Environment, ConfigError> {
        Ok(Environment {
            production: self.variant.is_production(),
            api_server_url: self.required(API_SERVER_URL_ENV)?,
            auth0: Auth0Settings {
                url: self.required(AUTH0_URL_ENV)?,
                audience: self.required(AUTH0_AUDIENCE_ENV)?,
                client_id: self.required(AUTH0_CLIENT_ID_ENV)?,
                callback_url: self.required(AUTH0_CALLBACK_URL_ENV)?,
            },
        })
    }

    fn apply_overrides(&self, env: &mut Environment) -> Vec<&'static str> {
        let mut overridden = Vec::new();
        let targets: [(&'static str, &'static str, &mut String); 5] = [
            (API_SERVER_URL_ENV, "apiServerUrl", &mut env.api_server_url),
            (AUTH0_URL_ENV, "auth0.url", &mut env.auth0.url),
            (AUTH0_AUDIENCE_ENV, "auth0.audience", &mut env.auth0.audience),
            (AUTH0_CLIENT_ID_ENV, "auth0.clientId", &mut env.auth0.client_id),
            (AUTH0_CALLBACK_URL_ENV, "auth0.callbackURL", &mut env.auth0.callback_url),
        ];
        for (name, field, slot) in targets {
            if let Some(value) = self.var(name) {
                *slot = value;
                overridden.push(field);
            }
        }
        overridden
    }
}

/// Pick the variant: explicit choice, then `APP_ENV`, then development.
pub fn select_variant(
    explicit: Option<BuildVariant>,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<BuildVariant, ConfigError> {
    match explicit {
        Some(variant) => Ok(variant),
        None => match lookup(APP_ENV_ENV) {
            Some(name) => name.parse(),
            None => Ok(BuildVariant::default()),
        },
    }
}

/// Parse a full environment record from a JSON document.
pub fn read_file(path: &Path) -> Result<Environment, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
