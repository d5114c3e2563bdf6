use std::collections::{BTreeMap, HashSet};

use crate::{Engine, Transaction};

impl Engine {
    /// Number of distinct sender names.
    ///
    /// Only senders are counted: a client that appears solely as a
    /// beneficiary does not contribute.
    pub fn unique_client_count(&self) -> usize {
        self.store
            .iter()
            .map(|tx| tx.sender_full_name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Transactions indexed by beneficiary name.
    ///
    /// When several transactions share a beneficiary the first one in store
    /// order is kept.
    pub fn transactions_by_beneficiary(&self) -> BTreeMap<&str, &Transaction> {
        let mut by_beneficiary = BTreeMap::new();
        for tx in &self.store {
            by_beneficiary
                .entry(tx.beneficiary_full_name.as_str())
                .or_insert(tx);
        }
        by_beneficiary
    }
}

#[cfg(test)]
mod tests {
    use crate::Transaction;
    use crate::ops::fixtures::{engine, transaction};

    fn sent_by(sender: &str) -> Transaction {
        Transaction {
            sender_full_name: sender.to_string(),
            ..transaction()
        }
    }

    fn received_by(beneficiary: &str, mtn: i64) -> Transaction {
        Transaction {
            beneficiary_full_name: beneficiary.to_string(),
            mtn: Some(mtn),
            ..transaction()
        }
    }

    #[test]
    fn unique_client_count() {
        let engine = engine(vec![transaction(), sent_by("Test")]);

        assert_eq!(engine.unique_client_count(), 2);
    }

    #[test]
    fn unique_client_count_duplicates() {
        let engine = engine(vec![transaction(), transaction(), transaction()]);

        assert_eq!(engine.unique_client_count(), 1);
    }

    #[test]
    fn unique_client_count_ignores_beneficiaries() {
        let engine = engine(vec![
            received_by("Arthur Shelby", 1),
            received_by("Grace Burgess", 2),
        ]);

        assert_eq!(engine.unique_client_count(), 1);
    }

    #[test]
    fn unique_client_count_empty() {
        assert_eq!(engine(Vec::new()).unique_client_count(), 0);
    }

    #[test]
    fn transactions_by_beneficiary() {
        let engine = engine(vec![transaction()]);

        let by_beneficiary = engine.transactions_by_beneficiary();
        let tx = by_beneficiary["Alfie Solomons"];

        assert_eq!(by_beneficiary.len(), 1);
        assert_eq!(tx.amount, 430.2);
        assert_eq!(tx.beneficiary_age, Some(33));
        assert_eq!(tx.issue_id, Some(1));
        assert_eq!(
            tx.issue_message.as_deref(),
            Some("Looks like money laundering")
        );
        assert_eq!(tx.mtn, Some(663458));
        assert_eq!(tx.sender_age, Some(22));
        assert_eq!(tx.sender_full_name, "Tom Shelby");
        assert_eq!(tx.issue_solved, Some(false));
    }

    #[test]
    fn transactions_by_beneficiary_first_wins() {
        let engine = engine(vec![
            received_by("Arthur Shelby", 1),
            received_by("Grace Burgess", 2),
            received_by("Arthur Shelby", 3),
        ]);

        let by_beneficiary = engine.transactions_by_beneficiary();

        assert_eq!(by_beneficiary.len(), 2);
        assert_eq!(by_beneficiary["Arthur Shelby"].mtn, Some(1));
        assert_eq!(by_beneficiary["Grace Burgess"].mtn, Some(2));
    }

    #[test]
    fn transactions_by_beneficiary_empty() {
        assert!(engine(Vec::new()).transactions_by_beneficiary().is_empty());
    }
}
