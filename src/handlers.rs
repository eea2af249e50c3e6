use crate::analytics::build_analytics;
use crate::errors::{AppError, ValidationError};
use crate::form::IncidentDraft;
use crate::models::{AnalyticsReport, HomeQuery, Incident};
use crate::state::AppState;
use crate::ui::{render_analytics, render_home, render_incident_list, render_report_form};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Utc;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_home(store.len(), query.reported_id()))
}

pub async fn report_form() -> Html<String> {
    Html(render_report_form(&IncidentDraft::default(), None))
}

pub async fn submit_report(
    State(state): State<AppState>,
    Form(mut draft): Form<IncidentDraft>,
) -> Response {
    match accept_report(&state, &mut draft).await {
        Ok(incident) => Redirect::to(&format!("/?reported={}", incident.id)).into_response(),
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_report_form(&draft, Some(&err))),
        )
            .into_response(),
    }
}

pub async fn view_incidents(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_incident_list(store.all()))
}

pub async fn analytics(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_analytics(&build_analytics(store.all())))
}

pub async fn list_incidents(State(state): State<AppState>) -> Json<Vec<Incident>> {
    let store = state.store.lock().await;
    Json(store.all().to_vec())
}

pub async fn create_incident(
    State(state): State<AppState>,
    Json(mut draft): Json<IncidentDraft>,
) -> Result<(StatusCode, Json<Incident>), AppError> {
    let incident = accept_report(&state, &mut draft).await?;
    Ok((StatusCode::CREATED, Json(incident)))
}

pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsReport> {
    let store = state.store.lock().await;
    Json(build_analytics(store.all()))
}

async fn accept_report(
    state: &AppState,
    draft: &mut IncidentDraft,
) -> Result<Incident, ValidationError> {
    let mut store = state.store.lock().await;
    match draft.submit(&mut store, Utc::now()) {
        Ok(incident) => {
            info!(
                id = incident.id,
                location = %incident.location,
                total = store.len(),
                "incident added"
            );
            Ok(incident)
        }
        Err(err) => {
            warn!("incident report rejected: {err}");
            Err(err)
        }
    }
}
