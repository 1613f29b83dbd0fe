// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::environment::Environment;

/// Shared handler state. The environment is resolved once at startup and
/// only ever read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<Environment>,
}

impl AppState {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Environment::development())
    }
}
