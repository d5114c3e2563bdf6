//! Aggregate amount and client endpoints

use api_types::query::SenderQuery;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{ServerError, server::ServerState};

/// Sum of the amounts of all transactions.
pub async fn total_amount(State(state): State<ServerState>) -> Json<f64> {
    Json(state.engine.total_amount())
}

/// Sum of the amounts sent by the `senderName` client.
pub async fn total_amount_sent_by(
    State(state): State<ServerState>,
    query: Result<Query<SenderQuery>, QueryRejection>,
) -> Result<Json<f64>, ServerError> {
    let Query(query) = query?;
    Ok(Json(state.engine.total_amount_sent_by(&query.sender_name)))
}

/// Highest transaction amount.
pub async fn max_amount(State(state): State<ServerState>) -> Json<f64> {
    Json(state.engine.max_amount())
}

/// Number of distinct senders. Clients that only ever received a transfer
/// are not counted.
pub async fn unique_clients_count(State(state): State<ServerState>) -> Json<usize> {
    Json(state.engine.unique_client_count())
}

/// Name of the sender with the highest total, `null` when there are no
/// transactions.
pub async fn top_sender(State(state): State<ServerState>) -> Json<Option<String>> {
    Json(state.engine.top_sender().map(str::to_string))
}
