// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carbon-Tracker: daily carbon footprint logging and reporting
//!
//! This crate provides the backend API that turns daily activity (travel,
//! electricity, diet) into emission figures, an eco score, advice, and
//! report statistics over a user's logged history.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::LogStore;
use services::ActivityProcessor;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: LogStore,
    pub processor: ActivityProcessor,
}

impl AppState {
    pub fn new(config: Config, store: LogStore) -> Self {
        let processor = ActivityProcessor::new(store.clone());
        Self {
            config,
            store,
            processor,
        }
    }
}
