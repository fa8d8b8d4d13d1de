//! Image handlers: list, upload, serve and delete.
//!
//! Each handler performs exactly one media store operation and maps the
//! result to JSON (or raw bytes when serving).

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use armory_core::media::delete_confirmation;

use crate::{
    handlers::{error_response, AppError},
    state::AppState,
};

/// Multipart field carrying the uploaded file.
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ImageList {
    pub count: usize,
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StoredImage {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedImage {
    pub deleted: String,
    pub message: String,
}

/// Query parameters for deleting an image.
#[derive(Debug, Deserialize)]
pub struct DeleteImageQuery {
    pub file: Option<String>,
}

/// List stored images (GET /api/images).
pub async fn list_images(State(state): State<AppState>) -> Result<Json<ImageList>, AppError> {
    let images = state.media_repo.list().await?;

    Ok(Json(ImageList {
        count: images.len(),
        images,
    }))
}

/// Upload an image (POST /api/images, multipart field `file`).
///
/// Fields other than `file` are ignored. The client-supplied file name is
/// sanitized by the store; an existing image with the same name is replaced.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<StoredImage>), Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::from(e).into_response())?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let raw_name = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        tracing::debug!(raw_name = %raw_name, bytes = content.len(), "Received upload");

        let name = state
            .media_repo
            .save(&raw_name, content.to_vec())
            .await
            .map_err(|e| AppError::from(e).into_response())?;
        return Ok((StatusCode::CREATED, Json(StoredImage { name })));
    }

    Err(error_response(
        StatusCode::BAD_REQUEST,
        format!("Missing multipart field `{UPLOAD_FIELD}`"),
    )
    .into_response())
}

/// Serve a stored image (GET /images/{name}).
pub async fn serve_image(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let (file, bytes) = state.media_repo.read(&name).await?;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type()),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        bytes,
    )
        .into_response())
}

/// Delete an image (DELETE /api/images?file=<name>).
pub async fn delete_image(
    State(state): State<AppState>,
    Query(query): Query<DeleteImageQuery>,
) -> Result<Json<DeletedImage>, AppError> {
    let deleted = state.media_repo.delete(query.file.as_deref()).await?;

    Ok(Json(DeletedImage {
        message: delete_confirmation(&deleted),
        deleted,
    }))
}
