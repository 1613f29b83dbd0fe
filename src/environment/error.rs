// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Configuration errors.

use std::path::PathBuf;

use super::validate::ValidationIssue;
use super::variant::BuildVariant;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVar(String),

    #[error("Unknown build variant '{0}' (expected 'development' or 'production')")]
    UnknownVariant(String),

    #[error("Failed to read environment file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse environment file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Environment file is a {found} record but {requested} was requested")]
    VariantMismatch {
        requested: BuildVariant,
        found: BuildVariant,
    },

    #[error("Invalid environment: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
