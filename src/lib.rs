// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coffee Shop Environment - front-end environment configuration
//!
//! This crate resolves the per-deployment environment record (backend URL
//! and Auth0 settings) for the coffee shop front-end, validates it, renders
//! it for the build, and can serve it to the app at runtime.
//!
//! ## Modules
//!
//! - `environment` - Record types, loading, validation, rendering
//! - `api` - HTTP handlers (Axum) serving the resolved record
//! - `config` - Environment variable names and defaults
//! - `telemetry` - Logging setup

pub mod api;
pub mod config;
pub mod environment;
pub mod error;
pub mod state;
pub mod telemetry;
