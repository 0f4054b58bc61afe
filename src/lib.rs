pub mod config;
pub mod error;
pub mod models;
pub mod codec;
pub mod services;
pub mod controllers;

use std::sync::Arc;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self { config })
    }
}
