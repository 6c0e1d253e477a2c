use crate::{
    backend,
    dto::{ShareDto, TableDto},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use modeshare::prelude::*;
use std::sync::Arc;
use tracing::{debug, error, info};

pub async fn data(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let choices = state.choices().await;
    let options = state.options.read().await;
    let resolved = resolve_ready(&choices, options.as_ref())?;
    let table = run_query(&state, &resolved).await?;
    Ok(Json(TableDto::from(&table, resolved.visualisation)).into_response())
}

pub async fn share(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let choices = state.choices().await;
    let options = state.options.read().await;
    let resolved = resolve_ready(&choices, options.as_ref())?;
    let table = run_query(&state, &resolved).await?;
    let share = ModeShare::build(&table, resolved.area_type, resolved.transport_mode)
        .map_err(|err| {
            error!("Failed to build mode share: {err}");
            StatusCode::UNPROCESSABLE_ENTITY
        })?;
    Ok(Json(ShareDto::from(&share)).into_response())
}

fn resolve_ready<'a>(
    choices: &UserChoiceState,
    options: Option<&'a OptionLists>,
) -> Result<ResolvedChoices<'a>, StatusCode> {
    let Some(options) = options else {
        debug!("Option lists not loaded yet");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };
    resolve(choices, options).ok_or_else(|| {
        debug!("Choices do not resolve yet");
        StatusCode::SERVICE_UNAVAILABLE
    })
}

async fn run_query(
    state: &AppState,
    resolved: &ResolvedChoices<'_>,
) -> Result<AnalyticsTable, StatusCode> {
    let query = AnalyticsQuery::from_resolved(resolved);
    ensure_source(state, resolved.area_type, query.quantity).await?;
    state.stats.read().await.fetch(&query).map_err(|err| {
        error!("Analytics query failed: {err}");
        StatusCode::BAD_GATEWAY
    })
}

/// Downloads the daily statistics of an area type the first time they are needed.
async fn ensure_source(
    state: &AppState,
    area_type: &AreaType,
    quantity: AnalyticsQuantity,
) -> Result<(), StatusCode> {
    if state.stats.read().await.has_source(&area_type.id, quantity) {
        return Ok(());
    }
    let url = area_type.daily_url(quantity).ok_or_else(|| {
        error!(
            "Area type {} has no {quantity:?} statistics",
            area_type.identifier
        );
        StatusCode::BAD_GATEWAY
    })?;
    info!("Downloading {quantity:?} statistics from {url}");
    let data = backend::download(&state.client, url).await.map_err(|err| {
        error!("Failed to download statistics: {err}");
        StatusCode::BAD_GATEWAY
    })?;
    state
        .stats
        .write()
        .await
        .load_csv(&area_type.id, quantity, data.as_slice())
        .map_err(|err| {
            error!("Failed to parse statistics: {err}");
            StatusCode::BAD_GATEWAY
        })?;
    Ok(())
}
