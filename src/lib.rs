pub mod state;
pub mod types;
pub mod routes;

pub mod apps;
pub mod chain;
pub mod config;
pub mod error;
pub mod eth;
pub mod metadata;

use axum::Router;
use state::AppState;

pub fn app(state: AppState) -> Router {
    routes::router(state)
}
