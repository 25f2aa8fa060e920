//! Request handlers for the HTTP surface

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use creator_studio_domain::usecases::{compose_caption, suggest_hashtags};
use creator_studio_domain::{
    CaptionRequest, CaptionResponse, CreatedPost, CreatorPost, HashtagRequest, HashtagResponse,
    PostList, PostStatus,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::error::ApiError;

/// Collections shown by the status endpoint
const STATUS_COLLECTION_LIMIT: usize = 10;

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
}

/// Health and storage connectivity report
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusReport {
    pub backend: String,
    pub database: String,
    /// "Set" or "Not Set"; the location itself is never reported
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<usize>,
    pub status: Option<String>,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Instagram Content Creator Backend".to_string(),
    })
}

pub async fn status(State(state): State<AppState>) -> Json<StatusReport> {
    let store = state.catalog.store();

    let mut report = StatusReport {
        backend: "running".to_string(),
        database: format!("{} available", store.backend()),
        database_url: if state.database_url.is_some() {
            "Set".to_string()
        } else {
            "Not Set".to_string()
        },
        database_name: Some(store.database_name().to_string()),
        connection_status: "Connected".to_string(),
        collections: Vec::new(),
    };

    match store.collection_names().await {
        Ok(mut names) => {
            names.truncate(STATUS_COLLECTION_LIMIT);
            report.collections = names;
            report.database = format!("{} connected and working", store.backend());
        }
        Err(e) => {
            tracing::warn!(error = %e, "Status check could not list collections");
            report.database = format!("{} connected but error: {}", store.backend(), e);
            report.connection_status = "Error".to_string();
        }
    }

    Json(report)
}

pub async fn generate_caption(
    payload: Result<Json<CaptionRequest>, JsonRejection>,
) -> Result<Json<CaptionResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(CaptionResponse {
        caption: compose_caption(&request),
    }))
}

pub async fn suggest_tags(
    payload: Result<Json<HashtagRequest>, JsonRejection>,
) -> Result<Json<HashtagResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(HashtagResponse {
        hashtags: suggest_hashtags(&request.caption, request.max_tags),
    }))
}

pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatorPost>, JsonRejection>,
) -> Result<Json<CreatedPost>, ApiError> {
    let Json(post) = payload?;
    let id = state.catalog.save(&post).await?;
    Ok(Json(CreatedPost { id }))
}

pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Json<PostList>, ApiError> {
    let Query(query) = query?;

    let status = match query.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<PostStatus>()?),
    };

    let items = state.catalog.list(status, query.limit).await?;
    Ok(Json(PostList { items }))
}
