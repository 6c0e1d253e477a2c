use crate::{dto::OptionsDto, state::AppState};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn options(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let options = state.options.read().await;
    match options.as_ref() {
        Some(options) => Ok(Json(OptionsDto::from(options)).into_response()),
        None => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
