// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Build variants.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ConfigError;

/// Deployment target an environment record is authored for.
///
/// Each variant maps to one front-end source file that the build tool swaps
/// in at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    /// Default: a missing `APP_ENV` must never select production settings.
    #[default]
    Development,
    Production,
}

impl BuildVariant {
    pub fn is_production(&self) -> bool {
        matches!(self, BuildVariant::Production)
    }

    /// Variant carrying the given `production` flag.
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            BuildVariant::Production
        } else {
            BuildVariant::Development
        }
    }

    /// Front-end source file the variant is substituted into.
    pub fn file_name(&self) -> &'static str {
        match self {
            BuildVariant::Development => "environment.ts",
            BuildVariant::Production => "environment.prod.ts",
        }
    }
}

impl FromStr for BuildVariant {
    type Err = ConfigError;

    /// Case-insensitive; accepts the short forms `dev` and `prod`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(BuildVariant::Development),
            "production" | "prod" => Ok(BuildVariant::Production),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl std::fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildVariant::Development => write!(f, "development"),
            BuildVariant::Production => write!(f, "production"),
        }
    }
}
