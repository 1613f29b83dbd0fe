// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Environment record validation.
//!
//! Checks are read-only: a failing record is reported, never repaired.
//! All issues are collected so an operator sees the whole picture at once.

use std::net::IpAddr;

use url::{Host, Url};

use super::auth0::AUTH0_DOMAIN_SUFFIX;
use super::error::ConfigError;
use super::Environment;

/// One problem with one field, addressed by its wire path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Environment {
    /// Validate every field, failing with all collected issues.
    ///
    /// Production records pointing at loopback hosts or plain `http` are
    /// accepted but logged as warnings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let issues = self.issues();
        if !issues.is_empty() {
            return Err(ConfigError::Invalid(issues));
        }

        if self.production {
            for warning in self.production_warnings() {
                tracing::warn!(field = warning.field, "{}", warning.message);
            }
        }

        Ok(())
    }

    /// Hard failures.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        check_http_url(&mut issues, "apiServerUrl", &self.api_server_url);
        check_http_url(&mut issues, "auth0.callbackURL", &self.auth0.callback_url);
        check_identifier(&mut issues, "auth0.url", &self.auth0.url);
        check_identifier(&mut issues, "auth0.audience", &self.auth0.audience);
        check_identifier(&mut issues, "auth0.clientId", &self.auth0.client_id);

        check_domain_prefix(&mut issues, &self.auth0.url);

        issues
    }

    /// Soft problems worth flagging for a production record.
    pub fn production_warnings(&self) -> Vec<ValidationIssue> {
        let mut warnings = Vec::new();
        for (field, value) in [
            ("apiServerUrl", &self.api_server_url),
            ("auth0.callbackURL", &self.auth0.callback_url),
        ] {
            let Ok(url) = Url::parse(value) else {
                continue;
            };
            if is_loopback(&url) {
                warnings.push(ValidationIssue::new(
                    field,
                    "points at a loopback host in a production build",
                ));
            }
            if url.scheme() == "http" {
                warnings.push(ValidationIssue::new(
                    field,
                    "uses plain http in a production build",
                ));
            }
        }
        warnings
    }
}

fn check_http_url(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str) {
    // The URL parser strips whitespace and tabs; the stored value would keep them.
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        issues.push(ValidationIssue::new(
            field,
            "must not contain whitespace or control characters",
        ));
        return;
    }

    match Url::parse(value) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                issues.push(ValidationIssue::new(
                    field,
                    format!("unsupported scheme '{}' (expected http or https)", url.scheme()),
                ));
            } else if url.host().is_none() {
                issues.push(ValidationIssue::new(field, "must include a host"));
            }
        }
        Err(e) => issues.push(ValidationIssue::new(
            field,
            format!("must be an absolute URL ({e})"),
        )),
    }
}

/// The prefix plus the Auth0 suffix must form exactly one plain host.
fn check_domain_prefix(issues: &mut Vec<ValidationIssue>, prefix: &str) {
    if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
        return;
    }
    if prefix.contains("://") || prefix.contains('/') {
        issues.push(ValidationIssue::new(
            "auth0.url",
            "must be a bare domain prefix without scheme or path",
        ));
        return;
    }
    if prefix
        .to_ascii_lowercase()
        .ends_with(AUTH0_DOMAIN_SUFFIX)
    {
        issues.push(ValidationIssue::new(
            "auth0.url",
            format!("must not include the '{AUTH0_DOMAIN_SUFFIX}' suffix"),
        ));
        return;
    }

    let domain = format!("{prefix}{AUTH0_DOMAIN_SUFFIX}");
    let plain_host = match Url::parse(&format!("https://{domain}")) {
        Ok(url) => {
            matches!(url.host(), Some(Host::Domain(d)) if d.eq_ignore_ascii_case(&domain))
                && url.port().is_none()
                && url.username().is_empty()
                && url.password().is_none()
                && url.path() == "/"
                && url.query().is_none()
                && url.fragment().is_none()
        }
        Err(_) => false,
    };
    if !plain_host {
        issues.push(ValidationIssue::new(
            "auth0.url",
            format!("'{domain}' is not a plain host name"),
        ));
    }
}

fn check_identifier(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str) {
    if value.is_empty() {
        issues.push(ValidationIssue::new(field, "must not be empty"));
    } else if value.chars().any(char::is_whitespace) {
        issues.push(ValidationIssue::new(field, "must not contain whitespace"));
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
        Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
        None => false,
    }
}
