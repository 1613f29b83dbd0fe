// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Environment Configuration
//!
//! The environment record tells the coffee shop front-end where its backend
//! lives and how to reach the Auth0 tenant that guards it.
//!
//! ## Wire Shape
//!
//! ```text
//! {
//!   production: boolean,
//!   apiServerUrl: string,
//!   auth0: { url: string, audience: string, clientId: string, callbackURL: string }
//! }
//! ```
//!
//! Deserialization rejects unknown and missing fields, so a loaded record
//! always carries exactly these six leaves. Values are never rewritten after
//! they are authored; a resolved [`Environment`] is shared read-only.
//!
//! ## Submodules
//!
//! - `variant` - development/production selection
//! - `auth0` - provider endpoints derived from the `auth0` block
//! - `validate` - URL and identifier checks
//! - `loader` - layered resolution (built-in, file, environment variables)
//! - `render` - JSON and TypeScript output for the front-end build

pub mod auth0;
pub mod error;
pub mod loader;
pub mod render;
pub mod validate;
pub mod variant;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use error::ConfigError;
pub use loader::EnvironmentLoader;
pub use validate::ValidationIssue;
pub use variant::BuildVariant;

/// Auth0 application settings used by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Auth0Settings {
    /// Tenant domain prefix, e.g. `dev-71rarl-5.us` for `dev-71rarl-5.us.auth0.com`.
    pub url: String,
    /// API identifier requested as the token audience.
    pub audience: String,
    /// Public client identifier of the single-page application.
    #[serde(rename = "clientId")]
    pub client_id: String,
    /// Where Auth0 redirects after login.
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// Per-deployment environment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Environment {
    /// `true` only in the production variant.
    pub production: bool,
    /// Base URL of the backend API.
    #[serde(rename = "apiServerUrl")]
    pub api_server_url: String,
    pub auth0: Auth0Settings,
}

impl Environment {
    /// Built-in development record: the local Flask API and the development
    /// Auth0 tenant, with the Ionic dev server as callback.
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: "http://127.0.0.1:5000".to_string(),
            auth0: Auth0Settings {
                url: "dev-71rarl-5.us".to_string(),
                audience: "coffee_shop_api".to_string(),
                client_id: "NDZwuEJoygpbJJwk3KEO5F9OBAJbpwzT".to_string(),
                callback_url: "http://127.0.0.1:8100".to_string(),
            },
        }
    }

    /// Built-in record for a variant, if one exists.
    ///
    /// Production has none: it is authored per deployment.
    pub fn builtin(variant: BuildVariant) -> Option<Self> {
        match variant {
            BuildVariant::Development => Some(Self::development()),
            BuildVariant::Production => None,
        }
    }

    pub fn variant(&self) -> BuildVariant {
        BuildVariant::from_production_flag(self.production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn leaf_paths(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    leaf_paths(child, &path, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn serializes_exactly_six_leaves_with_wire_names() {
        let value = serde_json::to_value(Environment::development()).unwrap();
        let mut leaves = Vec::new();
        leaf_paths(&value, "", &mut leaves);
        leaves.sort();

        assert_eq!(
            leaves,
            vec![
                "apiServerUrl",
                "auth0.audience",
                "auth0.callbackURL",
                "auth0.clientId",
                "auth0.url",
                "production",
            ]
        );
    }

    #[test]
    fn development_record_matches_authored_values() {
        let env = Environment::development();
        assert!(!env.production);
        assert_eq!(env.variant(), BuildVariant::Development);
        assert_eq!(env.api_server_url, "http://127.0.0.1:5000");
        assert_eq!(env.auth0.url, "dev-71rarl-5.us");
        assert_eq!(env.auth0.audience, "coffee_shop_api");
        assert_eq!(env.auth0.client_id, "NDZwuEJoygpbJJwk3KEO5F9OBAJbpwzT");
        assert_eq!(env.auth0.callback_url, "http://127.0.0.1:8100");
    }

    #[test]
    fn only_development_has_a_builtin_record() {
        assert_eq!(
            Environment::builtin(BuildVariant::Development),
            Some(Environment::development())
        );
        assert_eq!(Environment::builtin(BuildVariant::Production), None);
    }

    #[test]
    fn deserialization_rejects_extra_fields() {
        let doc = json!({
            "production": true,
            "apiServerUrl": "https://api.example.com",
            "debug": true,
            "auth0": {
                "url": "tenant.eu",
                "audience": "coffee_shop_api",
                "clientId": "abc",
                "callbackURL": "https://shop.example.com"
            }
        });
        assert!(serde_json::from_value::<Environment>(doc).is_err());

        let nested = json!({
            "production": true,
            "apiServerUrl": "https://api.example.com",
            "auth0": {
                "url": "tenant.eu",
                "audience": "coffee_shop_api",
                "clientId": "abc",
                "callbackURL": "https://shop.example.com",
                "clientSecret": "nope"
            }
        });
        assert!(serde_json::from_value::<Environment>(nested).is_err());
    }

    #[test]
    fn deserialization_rejects_missing_fields() {
        let doc = json!({
            "production": false,
            "apiServerUrl": "http://127.0.0.1:5000",
            "auth0": {
                "url": "dev-71rarl-5.us",
                "audience": "coffee_shop_api",
                "clientId": "abc"
            }
        });
        assert!(serde_json::from_value::<Environment>(doc).is_err());
    }

    #[test]
    fn values_pass_through_verbatim() {
        let doc = json!({
            "production": true,
            "apiServerUrl": "https://API.example.com:8443/base/",
            "auth0": {
                "url": "Tenant-X.eu",
                "audience": "https://coffee.example.com/api ",
                "clientId": "  padded  ",
                "callbackURL": "https://shop.example.com/?next=%2Fmenu"
            }
        });
        let env: Environment = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(env.api_server_url, "https://API.example.com:8443/base/");
        assert_eq!(env.auth0.url, "Tenant-X.eu");
        assert_eq!(env.auth0.audience, "https://coffee.example.com/api ");
        assert_eq!(env.auth0.client_id, "  padded  ");
        assert_eq!(env.auth0.callback_url, "https://shop.example.com/?next=%2Fmenu");
        assert_eq!(serde_json::to_value(&env).unwrap(), doc);
    }
}
