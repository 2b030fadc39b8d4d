use crate::chart::ChartConfig;
use crate::errors::AppError;
use crate::models::{Notice, RowView, SavePayload, TableResponse};
use crate::state::AppState;
use crate::table::{Field, RowId, Table, TableError};
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

const CELL_PREFIX: &str = "row-";

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub since: Option<u64>,
}

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let table = state.table.lock().await;
    let notice = state.notices.latest();
    Html(render_index(
        &state.user,
        &state.summary,
        &table,
        notice.as_ref(),
        query.since,
    ))
}

pub async fn append_row(
    State(state): State<AppState>,
    Form(cells): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let mut table = state.table.lock().await;
    apply_cell_edits(&mut table, &cells)?;
    let id = table.append();
    debug!(%id, rows = table.len(), "row appended");
    Ok(Redirect::to("/"))
}

pub async fn remove_row(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(cells): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let mut table = state.table.lock().await;
    apply_cell_edits(&mut table, &cells)?;
    let removed = table.remove(RowId(id))?;
    debug!(id = %removed.id, rows = table.len(), "row removed");
    Ok(Redirect::to("/"))
}

pub async fn save(
    State(state): State<AppState>,
    Form(cells): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let payload = {
        let mut table = state.table.lock().await;
        apply_cell_edits(&mut table, &cells)?;
        SavePayload::from_table(&state.user.department, &table)
    };
    info!(
        department = %payload.department,
        entries = payload.entries.len(),
        endpoint = state.submit.endpoint(),
        "submitting entries"
    );

    // The page polls for a notice newer than this one.
    let since = state.notices.seq();
    let submit = state.submit.clone();
    let notices = state.notices.clone();
    tokio::spawn(async move {
        submit.save(&payload, &notices).await;
    });

    Ok(Redirect::to(&format!("/?since={since}")))
}

pub async fn get_rows(State(state): State<AppState>) -> Json<TableResponse> {
    let table = state.table.lock().await;
    let entries = table
        .rows()
        .iter()
        .map(|row| RowView {
            id: row.id.0,
            record: row.to_record(),
        })
        .collect();
    Json(TableResponse {
        department: state.user.department.clone(),
        entries,
    })
}

pub async fn get_notice(State(state): State<AppState>) -> Json<Option<Notice>> {
    Json(state.notices.latest())
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartConfig> {
    Json(ChartConfig::from_summary(&state.summary))
}

/// Name of the form input holding one cell.
pub fn cell_name(id: RowId, field: Field) -> String {
    format!("{CELL_PREFIX}{id}-{}", field.name())
}

fn parse_cell_name(name: &str) -> Result<Option<(RowId, Field)>, TableError> {
    let Some(rest) = name.strip_prefix(CELL_PREFIX) else {
        return Ok(None);
    };
    let Some((id, field)) = rest.split_once('-') else {
        return Err(TableError::UnknownField(name.to_string()));
    };
    let id = id
        .parse::<u64>()
        .map_err(|_| TableError::UnknownField(name.to_string()))?;
    Ok(Some((RowId(id), field.parse()?)))
}

/// Writes submitted cell values back into the table. Cells of rows that
/// are gone by now are skipped.
fn apply_cell_edits(table: &mut Table, cells: &HashMap<String, String>) -> Result<(), TableError> {
    for (name, value) in cells {
        let Some((id, field)) = parse_cell_name(name)? else {
            continue;
        };
        match table.edit(id, field, value.as_str()) {
            Ok(()) | Err(TableError::UnknownRow(_)) => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
