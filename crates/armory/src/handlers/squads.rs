//! Squad registry handlers.

use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use armory_core::squad::{newest_first, SquadRecord};

use crate::{
    handlers::{error_response, AppError},
    state::AppState,
};

/// Presentation order for the squad listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquadOrder {
    /// Registry order, oldest first.
    #[default]
    Oldest,
    Newest,
}

/// Query parameters for listing squads.
#[derive(Debug, Deserialize)]
pub struct ListSquadsQuery {
    #[serde(default)]
    pub order: SquadOrder,
}

#[derive(Debug, Serialize)]
pub struct SquadList {
    pub total: usize,
    pub squads: Vec<SquadRecord>,
}

/// Form payload for registering a squad.
#[derive(Debug, Deserialize)]
pub struct RegisterSquad {
    pub team: String,
    #[serde(default)]
    pub members: String,
}

/// List registered squads (GET /api/squads).
pub async fn list_squads(
    State(state): State<AppState>,
    Query(query): Query<ListSquadsQuery>,
) -> Result<Json<SquadList>, AppError> {
    let records = state.squad_repo.read_all().await?;

    let squads = match query.order {
        SquadOrder::Oldest => records,
        SquadOrder::Newest => newest_first(records),
    };

    Ok(Json(SquadList {
        total: squads.len(),
        squads,
    }))
}

/// Register a new squad (POST /api/squads).
pub async fn register_squad(
    State(state): State<AppState>,
    form_result: Result<Form<RegisterSquad>, FormRejection>,
) -> Result<(StatusCode, Json<SquadRecord>), Response> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
        .into_response()
    })?;

    let record = SquadRecord::new(payload.team, payload.members);

    state
        .squad_repo
        .append(&record)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok((StatusCode::CREATED, Json(record)))
}
