//! Transaction listing endpoints

use std::collections::BTreeMap;

use api_types::transaction::TransactionView;
use axum::{Json, extract::State};

use crate::server::ServerState;

fn map_transaction(tx: &engine::Transaction) -> TransactionView {
    TransactionView {
        mtn: tx.mtn,
        amount: tx.amount,
        sender_full_name: tx.sender_full_name.clone(),
        sender_age: tx.sender_age,
        beneficiary_full_name: tx.beneficiary_full_name.clone(),
        beneficiary_age: tx.beneficiary_age,
        issue_id: tx.issue_id,
        issue_solved: tx.issue_solved,
        issue_message: tx.issue_message.clone(),
    }
}

/// One transaction per beneficiary, the first one found for each name.
pub async fn by_beneficiary_name(
    State(state): State<ServerState>,
) -> Json<BTreeMap<String, TransactionView>> {
    let transactions = state
        .engine
        .transactions_by_beneficiary()
        .into_iter()
        .map(|(name, tx)| (name.to_string(), map_transaction(tx)))
        .collect();
    Json(transactions)
}

/// The 3 transactions with the highest amount, sorted by amount descending.
pub async fn top3_by_amount(State(state): State<ServerState>) -> Json<Vec<TransactionView>> {
    Json(
        state
            .engine
            .top3_by_amount()
            .into_iter()
            .map(map_transaction)
            .collect(),
    )
}
