use std::collections::BTreeSet;

use crate::Engine;

impl Engine {
    /// Whether `client_full_name`, as sender or beneficiary, has at least one
    /// transaction with an unsolved compliance issue.
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.store
            .iter()
            .filter(|tx| tx.involves(client_full_name))
            .any(|tx| tx.has_open_issue())
    }

    /// Identifiers of all open compliance issues, without duplicates.
    pub fn unsolved_issue_ids(&self) -> BTreeSet<i64> {
        self.store
            .iter()
            .filter(|tx| tx.has_open_issue())
            .filter_map(|tx| tx.issue_id)
            .collect()
    }

    /// Messages of every solved issue, in store order.
    ///
    /// Only the solved flag is checked: a solved record without a message
    /// yields `None`.
    pub fn solved_issue_messages(&self) -> Vec<Option<&str>> {
        self.store
            .iter()
            .filter(|tx| tx.is_issue_solved())
            .map(|tx| tx.issue_message.as_deref())
            .collect()
    }
}
