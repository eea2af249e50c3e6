pub mod analytics;
pub mod app;
pub mod charts;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::ServerConfig;
pub use state::AppState;
pub use store::IncidentStore;
