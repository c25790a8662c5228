//! Category item endpoints.

use std::collections::BTreeMap;

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use techtree_common::{AppError, AppResult};
use techtree_core::CategoryItemInput;
use techtree_db::entities::{category_item, media_type};
use techtree_db::repositories::CategoryItemWithContent;
use tracing::info;
use validator::{Validate, ValidationErrors};

use crate::{
    middleware::AppState,
    response::{ApiResponse, redirect_to_list},
};

/// Create category item router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_category_items))
        .route("/", post(create_category_item))
        .route("/new", get(new_category_item))
        .route("/{id}", get(category_item_details))
        .route("/{id}/edit", get(edit_category_item))
        .route("/{id}/edit", post(update_category_item))
        .route("/{id}/delete", get(confirm_delete_category_item))
        .route("/{id}/delete", post(delete_category_item))
}

/// Category item detail view model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItemResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub media_type_id: i32,
    pub released_at: DateTime<Utc>,
}

impl From<category_item::Model> for CategoryItemResponse {
    fn from(item: category_item::Model) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            category_id: item.category_id,
            media_type_id: item.media_type_id,
            released_at: item.released_at,
        }
    }
}

/// One row of the list view: an item plus its joined content ID.
///
/// `content_id` is serialized as `null` when no content row references the
/// item.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItemListEntry {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub media_type_id: i32,
    pub released_at: DateTime<Utc>,
    pub content_id: Option<i32>,
}

impl From<CategoryItemWithContent> for CategoryItemListEntry {
    fn from(row: CategoryItemWithContent) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            category_id: row.category_id,
            media_type_id: row.media_type_id,
            released_at: row.released_at,
            content_id: row.content_id,
        }
    }
}

/// List view model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItemListResponse {
    pub category_id: i32,
    pub items: Vec<CategoryItemListEntry>,
}

/// One media type choice in the select control.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: i32,
    pub label: String,
    pub selected: bool,
}

/// Build the select options, marking the row matching `selected_id`.
///
/// `selected_id` 0 is the sentinel for "nothing selected": store-generated
/// IDs start at 1, so no option matches.
fn media_type_options(media_types: Vec<media_type::Model>, selected_id: i32) -> Vec<SelectOption> {
    media_types
        .into_iter()
        .map(|mt| SelectOption {
            value: mt.id,
            label: mt.title,
            selected: mt.id == selected_id,
        })
        .collect()
}

/// Editable field values echoed into a form view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItemFormData {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub media_type_id: i32,
    pub released_at: Option<DateTime<Utc>>,
}

impl CategoryItemFormData {
    /// Blank form scoped to a category.
    const fn blank(category_id: i32) -> Self {
        Self {
            id: 0,
            title: String::new(),
            description: None,
            category_id,
            media_type_id: 0,
            released_at: None,
        }
    }
}

impl From<category_item::Model> for CategoryItemFormData {
    fn from(item: category_item::Model) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            category_id: item.category_id,
            media_type_id: item.media_type_id,
            released_at: Some(item.released_at),
        }
    }
}

impl From<&CategoryItemInput> for CategoryItemFormData {
    fn from(input: &CategoryItemInput) -> Self {
        Self {
            id: input.id,
            title: input.title.clone(),
            description: input.description.clone(),
            category_id: input.category_id,
            media_type_id: input.media_type_id,
            released_at: Some(input.released_at),
        }
    }
}

/// Form view model: the item under edit plus the media type choices.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItemFormResponse {
    pub item: CategoryItemFormData,
    pub media_types: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Flatten validation errors into per-field message lists.
fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .clone()
                        .unwrap_or_else(|| e.code.clone())
                        .into_owned()
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Category scope query parameter.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuery {
    #[serde(default)]
    pub category_id: i32,
}

/// List the items of a category.
async fn list_category_items(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> AppResult<ApiResponse<CategoryItemListResponse>> {
    let items = state
        .category_item_service
        .list_for_category(query.category_id)
        .await?;

    Ok(ApiResponse::ok(CategoryItemListResponse {
        category_id: query.category_id,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// Get a single category item.
async fn category_item_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<CategoryItemResponse>> {
    let item = state
        .category_item_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category item not found: {id}")))?;

    Ok(ApiResponse::ok(item.into()))
}

/// Blank creation form scoped to a category, with nothing selected.
async fn new_category_item(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> AppResult<ApiResponse<CategoryItemFormResponse>> {
    let media_types = state.media_type_service.list_all().await?;

    Ok(ApiResponse::ok(CategoryItemFormResponse {
        item: CategoryItemFormData::blank(query.category_id),
        media_types: media_type_options(media_types, 0),
        errors: None,
    }))
}

/// Re-render the submitted form with validation errors attached.
async fn form_with_errors(
    state: &AppState,
    input: &CategoryItemInput,
    errors: &ValidationErrors,
) -> AppResult<Response> {
    let media_types = state.media_type_service.list_all().await?;

    let form = CategoryItemFormResponse {
        item: CategoryItemFormData::from(input),
        media_types: media_type_options(media_types, input.media_type_id),
        errors: Some(field_errors(errors)),
    };

    Ok((StatusCode::BAD_REQUEST, Json(form)).into_response())
}

/// Create a category item.
async fn create_category_item(
    State(state): State<AppState>,
    Form(input): Form<CategoryItemInput>,
) -> AppResult<Response> {
    if let Err(errors) = input.validate() {
        return form_with_errors(&state, &input, &errors).await;
    }

    info!(category_id = input.category_id, title = %input.title, "Creating category item");

    let item = state.category_item_service.create(input).await?;

    Ok(redirect_to_list(item.category_id).into_response())
}

/// Edit form for an existing item, with its media type pre-selected.
async fn edit_category_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<CategoryItemFormResponse>> {
    let item = state
        .category_item_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category item not found: {id}")))?;

    let media_types = state.media_type_service.list_all().await?;
    let selected = item.media_type_id;

    Ok(ApiResponse::ok(CategoryItemFormResponse {
        item: item.into(),
        media_types: media_type_options(media_types, selected),
        errors: None,
    }))
}

/// Update a category item.
///
/// The path ID must match the bound record ID; a mismatch is answered with
/// `NotFound` before anything reaches the store.
async fn update_category_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<CategoryItemInput>,
) -> AppResult<Response> {
    if id != input.id {
        return Err(AppError::NotFound(format!("Category item not found: {id}")));
    }

    if let Err(errors) = input.validate() {
        return form_with_errors(&state, &input, &errors).await;
    }

    info!(item_id = id, "Updating category item");

    let item = state.category_item_service.update(id, input).await?;

    Ok(redirect_to_list(item.category_id).into_response())
}

/// Confirmation view for deleting a category item.
async fn confirm_delete_category_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<CategoryItemResponse>> {
    let item = state
        .category_item_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category item not found: {id}")))?;

    Ok(ApiResponse::ok(item.into()))
}

/// Delete a category item after confirmation.
async fn delete_category_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    info!(item_id = id, "Deleting category item");

    let removed = state.category_item_service.delete(id).await?;

    Ok(redirect_to_list(removed.category_id))
}
