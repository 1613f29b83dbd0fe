// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Output formats consumed by the front-end build.
//!
//! The Angular/Ionic build swaps `environment.ts` for `environment.prod.ts`
//! at compile time, so the TypeScript renderer writes a module with the same
//! `environment` export the application already imports.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigError, Environment};

impl Environment {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as a TypeScript module exporting `environment`.
    pub fn to_typescript(&self) -> String {
        let a = &self.auth0;
        format!(
            "// Generated by coffee-shop-env ({variant} build). Do not edit by hand.\n\
             \n\
             export const environment = {{\n  \
               production: {production},\n  \
               apiServerUrl: {api},\n  \
               auth0: {{\n    \
                 url: {url},\n    \
                 audience: {audience},\n    \
                 clientId: {client_id},\n    \
                 callbackURL: {callback},\n  \
               }},\n\
             }};\n",
            variant = self.variant(),
            production = self.production,
            api = ts_string(&self.api_server_url),
            url = ts_string(&a.url),
            audience = ts_string(&a.audience),
            client_id = ts_string(&a.client_id),
            callback = ts_string(&a.callback_url),
        )
    }

    /// Write the TypeScript module into `dir` under the variant's file name.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ConfigError> {
        let path = dir.join(self.variant().file_name());
        fs::write(&path, self.to_typescript()).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Wrote environment module");
        Ok(path)
    }
}

/// Single-quoted TypeScript string literal.
fn ts_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
