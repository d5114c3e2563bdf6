//! Transaction primitives.
//!
//! A `Transaction` is a single transfer from a sender to a beneficiary, with
//! an optional compliance issue attached to it.

use serde::{Deserialize, Serialize};

/// A transfer record as found in the data source.
///
/// Only the amount and the two names are required. A record without
/// `issue_id` has no compliance issue, and a missing `issue_solved` counts as
/// not solved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub mtn: Option<i64>,
    pub amount: f64,
    pub sender_full_name: String,
    #[serde(default)]
    pub sender_age: Option<i32>,
    pub beneficiary_full_name: String,
    #[serde(default)]
    pub beneficiary_age: Option<i32>,
    #[serde(default)]
    pub issue_id: Option<i64>,
    #[serde(default)]
    pub issue_solved: Option<bool>,
    #[serde(default)]
    pub issue_message: Option<String>,
}

impl Transaction {
    /// Returns `true` only if the issue is explicitly marked as solved.
    pub fn is_issue_solved(&self) -> bool {
        self.issue_solved.unwrap_or(false)
    }

    /// Returns `true` if the record carries an issue id that is not solved.
    pub fn has_open_issue(&self) -> bool {
        self.issue_id.is_some() && !self.is_issue_solved()
    }

    /// Returns `true` if `client` is either the sender or the beneficiary.
    pub fn involves(&self, client: &str) -> bool {
        self.sender_full_name == client || self.beneficiary_full_name == client
    }
}
