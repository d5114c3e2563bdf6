//! JSON shapes exchanged over the HTTP API.
//!
//! Field names follow the camelCase convention of the source data file.

use serde::{Deserialize, Serialize};

pub mod query {
    use super::*;

    /// Query string of `/transactions/totalAmountSentBy`.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SenderQuery {
        pub sender_name: String,
    }

    /// Query string of `/transactions/hasOpenComplianceIssues`.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ClientQuery {
        pub client_full_name: String,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionView {
        pub mtn: Option<i64>,
        pub amount: f64,
        pub sender_full_name: String,
        pub sender_age: Option<i32>,
        pub beneficiary_full_name: String,
        pub beneficiary_age: Option<i32>,
        /// `null` when the transaction has no compliance issue.
        pub issue_id: Option<i64>,
        pub issue_solved: Option<bool>,
        pub issue_message: Option<String>,
    }
}
