//! Compliance issue endpoints

use std::collections::BTreeSet;

use api_types::query::ClientQuery;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{ServerError, server::ServerState};

pub async fn has_open_compliance_issues(
    State(state): State<ServerState>,
    query: Result<Query<ClientQuery>, QueryRejection>,
) -> Result<Json<bool>, ServerError> {
    let Query(query) = query?;
    Ok(Json(
        state
            .engine
            .has_open_compliance_issues(&query.client_full_name),
    ))
}

pub async fn unsolved_issue_ids(State(state): State<ServerState>) -> Json<BTreeSet<i64>> {
    Json(state.engine.unsolved_issue_ids())
}

pub async fn solved_issue_messages(
    State(state): State<ServerState>,
) -> Json<Vec<Option<String>>> {
    let messages = state
        .engine
        .solved_issue_messages()
        .into_iter()
        .map(|message| message.map(str::to_string))
        .collect();
    Json(messages)
}
