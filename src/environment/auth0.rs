// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Auth0 endpoints derived from the `auth0` block.
//!
//! The record stores only the tenant domain prefix. The backend verifies
//! tokens against `https://{prefix}.auth0.com/` and its JWKS, and the
//! front-end sends users to the hosted login page. Both are computed here
//! so consumers agree on the exact URLs. Nothing in this module alters the
//! stored fields.

use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

use super::Auth0Settings;

/// Suffix appended to the domain prefix to form the tenant host.
pub const AUTH0_DOMAIN_SUFFIX: &str = ".auth0.com";

/// Token signing algorithm issued by the tenant.
pub const SIGNING_ALGORITHM: &str = "RS256";

/// Response type requested by the single-page login flow (implicit grant).
const RESPONSE_TYPE: &str = "token";

/// Every endpoint a consumer needs, resolved in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Auth0Endpoints {
    pub domain: String,
    pub issuer: String,
    pub jwks_url: String,
    pub authorize_url: String,
    pub logout_url: String,
    pub algorithm: String,
}

impl Auth0Settings {
    /// Full tenant host, e.g. `dev-71rarl-5.us.auth0.com`.
    pub fn domain(&self) -> String {
        format!("{}{}", self.url, AUTH0_DOMAIN_SUFFIX)
    }

    /// Expected `iss` claim. Auth0 includes the trailing slash.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    /// Hosted login link. Query values are percent-encoded.
    pub fn authorize_url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!("https://{}/authorize", self.domain()),
            &[
                ("audience", self.audience.as_str()),
                ("response_type", RESPONSE_TYPE),
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.callback_url.as_str()),
            ],
        )
    }

    /// Logout link that returns the user to the callback URL.
    pub fn logout_url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!("https://{}/v2/logout", self.domain()),
            &[
                ("client_id", self.client_id.as_str()),
                ("returnTo", self.callback_url.as_str()),
            ],
        )
    }

    pub fn endpoints(&self) -> Result<Auth0Endpoints, url::ParseError> {
        Ok(Auth0Endpoints {
            domain: self.domain(),
            issuer: self.issuer(),
            jwks_url: self.jwks_url(),
            authorize_url: self.authorize_url()?.to_string(),
            logout_url: self.logout_url()?.to_string(),
            algorithm: SIGNING_ALGORITHM.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::environment::Environment;

    #[test]
    fn derives_tenant_urls_from_prefix() {
        let auth0 = Environment::development().auth0;
        assert_eq!(auth0.domain(), "dev-71rarl-5.us.auth0.com");
        assert_eq!(auth0.issuer(), "https://dev-71rarl-5.us.auth0.com/");
        assert_eq!(
            auth0.jwks_url(),
            "https://dev-71rarl-5.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn authorize_url_carries_login_parameters() {
        let auth0 = Environment::development().auth0;
        let url = auth0.authorize_url().unwrap();

        assert_eq!(url.host_str(), Some("dev-71rarl-5.us.auth0.com"));
        assert_eq!(url.path(), "/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("audience".to_string(), "coffee_shop_api".to_string()),
                ("response_type".to_string(), "token".to_string()),
                (
                    "client_id".to_string(),
                    "NDZwuEJoygpbJJwk3KEO5F9OBAJbpwzT".to_string()
                ),
                ("redirect_uri".to_string(), "http://127.0.0.1:8100".to_string()),
            ]
        );
        assert!(url.as_str().contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8100"));
    }

    #[test]
    fn logout_url_returns_to_callback() {
        let auth0 = Environment::development().auth0;
        let url = auth0.logout_url().unwrap();
        assert_eq!(url.path(), "/v2/logout");
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "returnTo" && v == "http://127.0.0.1:8100"));
    }

    #[test]
    fn deriving_endpoints_leaves_fields_untouched() {
        let env = Environment::development();
        let endpoints = env.auth0.endpoints().unwrap();
        assert_eq!(endpoints.algorithm, "RS256");
        assert_eq!(endpoints.issuer, "https://dev-71rarl-5.us.auth0.com/");
        assert_eq!(env, Environment::development());
    }
}
