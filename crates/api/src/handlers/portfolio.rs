//! Handlers for the `/portfolio` resource.
//!
//! Create and update accept multipart form data (`title`, `description`,
//! `category`, optional `file`). The upload is staged before the record is
//! written and committed after it, so a rejected request never leaves an
//! orphaned file; deletes remove record and file together.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vitrine_core::error::CoreError;
use vitrine_core::media::{media_kind_for, stored_filename};
use vitrine_core::types::DbId;
use vitrine_db::models::portfolio::{CreatePortfolioItem, PortfolioItem, UpdatePortfolioItem};
use vitrine_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the portfolio listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

/// Parsed multipart form for portfolio create/update.
#[derive(Debug, Default)]
struct PortfolioForm {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    file: Option<(String, Vec<u8>)>,
}

/// Collect the known fields from a multipart request, ignoring unknown ones.
async fn read_form(mut multipart: Multipart) -> AppResult<PortfolioForm> {
    let mut form = PortfolioForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" | "description" | "category" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                match name.as_str() {
                    "title" => form.title = Some(text),
                    "description" => form.description = Some(text),
                    _ => form.category = Some(text),
                }
            }
            "file" => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::BadRequest("Uploaded file must have a filename".into())
                    })?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.file = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

/// GET /api/portfolio
///
/// Public listing, newest-first, optionally filtered by category.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let items = PortfolioRepo::list(&state.pool, params.category.as_deref()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/portfolio/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PortfolioItem>>> {
    let item = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/portfolio
///
/// Create an item from a multipart form. Admin only. The extension check
/// runs before anything is written, so an unsupported file type performs no
/// partial write.
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = read_form(multipart).await?;

    let title = form
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Title is required".into())))?;

    // Derive media type and stage the upload before touching the database.
    let (file_name, media_type, staged) = match &form.file {
        Some((original_name, data)) => {
            let kind = media_kind_for(original_name).map_err(AppError::Core)?;
            let stored = stored_filename(&title, original_name);
            let staged = state
                .media
                .stage(data)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to stage upload: {e}")))?;
            (Some(stored), kind.as_str().to_string(), Some(staged))
        }
        None => (None, "image".to_string(), None),
    };

    let input = CreatePortfolioItem {
        title,
        description: form.description.unwrap_or_default(),
        file_name: file_name.clone(),
        media_type,
        category: form.category.unwrap_or_default(),
    };

    let item = match PortfolioRepo::create(&state.pool, &input).await {
        Ok(item) => item,
        Err(e) => {
            if let Some(staged) = staged {
                state.media.discard(staged).await;
            }
            return Err(e.into());
        }
    };

    if let (Some(staged), Some(name)) = (staged, &file_name) {
        state.media.commit(staged, name).await.map_err(|e| {
            // Known gap: the record now references a file that was never
            // committed. Surface it loudly instead of hiding it.
            tracing::error!(item_id = item.id, file = %name, error = %e, "Upload commit failed after record write");
            AppError::InternalError(format!("Failed to store upload: {e}"))
        })?;
    }

    tracing::info!(item_id = item.id, title = %item.title, "Portfolio item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/portfolio/{id}
///
/// Partially update an item from a multipart form. Admin only. A new file
/// replaces the old one; the old file is removed only after the new one is
/// committed.
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let existing = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id,
        }))?;

    let form = read_form(multipart).await?;

    let title_for_name = form.title.clone().unwrap_or_else(|| existing.title.clone());

    let (new_file_name, new_media_type, staged) = match &form.file {
        Some((original_name, data)) => {
            let kind = media_kind_for(original_name).map_err(AppError::Core)?;
            let stored = stored_filename(&title_for_name, original_name);
            let staged = state
                .media
                .stage(data)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to stage upload: {e}")))?;
            (Some(stored), Some(kind.as_str().to_string()), Some(staged))
        }
        None => (None, None, None),
    };

    let input = UpdatePortfolioItem {
        title: form.title,
        description: form.description,
        category: form.category,
        file_name: new_file_name.clone(),
        media_type: new_media_type,
    };

    let item = match PortfolioRepo::update(&state.pool, id, &input).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            if let Some(staged) = staged {
                state.media.discard(staged).await;
            }
            return Err(AppError::Core(CoreError::NotFound {
                entity: "PortfolioItem",
                id,
            }));
        }
        Err(e) => {
            if let Some(staged) = staged {
                state.media.discard(staged).await;
            }
            return Err(e.into());
        }
    };

    if let (Some(staged), Some(name)) = (staged, &new_file_name) {
        state.media.commit(staged, name).await.map_err(|e| {
            tracing::error!(item_id = id, file = %name, error = %e, "Upload commit failed after record write");
            AppError::InternalError(format!("Failed to store upload: {e}"))
        })?;

        // Drop the replaced file once the new one is in place.
        if let Some(old_name) = &existing.file_name {
            if old_name != name {
                if let Err(e) = state.media.remove(old_name).await {
                    tracing::warn!(file = %old_name, error = %e, "Failed to remove replaced media file");
                }
            }
        }
    }

    tracing::info!(item_id = id, "Portfolio item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/portfolio/{id}
///
/// Remove the stored file (if any) and the record. Admin only. A file that
/// is already absent from storage is not an error.
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let item = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id,
        }))?;

    if let Some(file_name) = &item.file_name {
        match state.media.remove(file_name).await {
            Ok(removed) => {
                if !removed {
                    tracing::warn!(item_id = id, file = %file_name, "Media file already absent on delete");
                }
            }
            Err(e) => {
                return Err(AppError::InternalError(format!(
                    "Failed to remove media file: {e}"
                )));
            }
        }
    }

    PortfolioRepo::delete(&state.pool, id).await?;

    tracing::info!(item_id = id, "Portfolio item deleted");

    Ok(StatusCode::NO_CONTENT)
}
