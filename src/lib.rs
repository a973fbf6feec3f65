pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod store;

pub use handlers::router;
pub use state::AppState;
