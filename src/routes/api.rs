// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for computing, logging and reporting emissions.
//!
//! User ids are opaque path segments; no account lookup is performed.

use crate::error::{AppError, Result};
use crate::models::{ActivityInput, DashboardSummary, LogEntry, LogStats};
use crate::services::{self, ComputeResult, SeriesOrder, SortDirection, SortKey};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

const MAX_USER_ID_LEN: usize = 64;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/compute", post(compute))
        .route(
            "/api/logs/{user_id}",
            get(list_logs).post(create_log).delete(clear_logs),
        )
        .route("/api/reports/{user_id}", get(get_report))
        .route("/api/dashboard/{user_id}", get(get_dashboard))
}

fn check_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::BadRequest("User id must not be empty".to_string()));
    }
    if user_id.len() > MAX_USER_ID_LEN {
        return Err(AppError::BadRequest(format!(
            "User id must be at most {} bytes",
            MAX_USER_ID_LEN
        )));
    }
    Ok(())
}

// ─── Compute ─────────────────────────────────────────────────

/// Compute breakdown, eco score and tips without storing anything.
async fn compute(Json(input): Json<ActivityInput>) -> Result<Json<ComputeResult>> {
    input.validate()?;

    let result = services::compute(&input);

    tracing::debug!(
        date = %input.date,
        total_kg = result.breakdown.total_kg,
        eco_score = result.eco_score,
        "Computed emissions"
    );

    Ok(Json(result))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogsResponse {
    /// Entries in the order they were logged
    pub items: Vec<LogEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateLogResponse {
    pub entry: LogEntry,
    pub eco_score: u8,
    pub tips: Vec<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ClearLogsResponse {
    pub removed: usize,
}

async fn list_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<LogsResponse>> {
    check_user_id(&user_id)?;

    let items = state.store.fetch_logs(&user_id).await?;
    tracing::debug!(user_id = %user_id, count = items.len(), "Fetched logs");

    Ok(Json(LogsResponse { items }))
}

async fn create_log(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(input): Json<ActivityInput>,
) -> Result<Json<CreateLogResponse>> {
    check_user_id(&user_id)?;
    input.validate()?;

    let (entry, result) = state.processor.log_activity(&user_id, &input).await?;

    Ok(Json(CreateLogResponse {
        entry,
        eco_score: result.eco_score,
        tips: result.tips,
    }))
}

async fn clear_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ClearLogsResponse>> {
    check_user_id(&user_id)?;

    let removed = state.store.clear_logs(&user_id).await?;
    Ok(Json(ClearLogsResponse { removed }))
}

// ─── Reports ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct ReportQuery {
    #[serde(default)]
    sort_by: SortKey,
    #[serde(default)]
    order: SortDirection,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReportResponse {
    pub stats: LogStats,
    pub sort_by: SortKey,
    pub order: SortDirection,
    /// Entries sorted by `sort_by` / `order`
    pub items: Vec<LogEntry>,
}

/// Get report statistics and a sorted table of a user's logs.
async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<ReportQuery>,
) -> Result<Json<ReportResponse>> {
    check_user_id(&user_id)?;

    let mut series = state.store.fetch_logs(&user_id).await?;
    series.reverse();

    let stats = services::summarize(&series, SeriesOrder::NewestFirst);
    let items = services::sort_logs(&series, params.sort_by, params.order);

    tracing::debug!(
        user_id = %user_id,
        count = stats.count,
        sort_by = ?params.sort_by,
        order = ?params.order,
        "Built report"
    );

    Ok(Json(ReportResponse {
        stats,
        sort_by: params.sort_by,
        order: params.order,
        items,
    }))
}

// ─── Dashboard ───────────────────────────────────────────────

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<DashboardSummary>> {
    check_user_id(&user_id)?;

    let series = state.store.fetch_logs(&user_id).await?;
    Ok(Json(services::dashboard(&series)))
}
