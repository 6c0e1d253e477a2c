use crate::{
    dto::{ActionDto, ChoicesDto},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use modeshare::choice::Error;
use std::sync::Arc;
use tracing::{error, warn};

pub async fn choices(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let choices = state.choices().await;
    let options = state.options.read().await;
    Ok(Json(ChoicesDto::from(choices, options.as_ref())).into_response())
}

/// Applies one action. Unknown keys are a client bug: rejected in debug
/// builds, logged and ignored in release builds.
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    Json(action): Json<ActionDto>,
) -> Result<Response, StatusCode> {
    let choices = {
        let mut controller = state.controller.lock().await;
        match action.into_action(controller.state()) {
            Ok(action) => controller.dispatch(action).clone(),
            Err(err @ Error::UnknownField(_)) if !cfg!(debug_assertions) => {
                warn!("Ignoring action: {err}");
                controller.state().clone()
            }
            Err(err) => {
                error!("Rejected action: {err}");
                return Err(StatusCode::BAD_REQUEST);
            }
        }
    };
    let options = state.options.read().await;
    Ok(Json(ChoicesDto::from(choices, options.as_ref())).into_response())
}
