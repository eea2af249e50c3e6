use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/report-incident",
            get(handlers::report_form).post(handlers::submit_report),
        )
        .route("/view-incidents", get(handlers::view_incidents))
        .route("/analytics", get(handlers::analytics))
        .route(
            "/api/incidents",
            get(handlers::list_incidents).post(handlers::create_incident),
        )
        .route("/api/analytics", get(handlers::get_analytics))
        .with_state(state)
}
