use std::collections::HashMap;

use crate::{Engine, Transaction};

impl Engine {
    /// The `n` transactions with the highest amount, sorted by amount
    /// descending. Equal amounts keep their store order.
    pub fn top_transactions_by_amount(&self, n: usize) -> Vec<&Transaction> {
        let mut ranked: Vec<&Transaction> = self.store.iter().collect();
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        ranked.truncate(n);
        ranked
    }

    pub fn top3_by_amount(&self) -> Vec<&Transaction> {
        self.top_transactions_by_amount(3)
    }

    /// Total amount sent by each sender, in order of first appearance.
    pub fn sender_totals(&self) -> Vec<(&str, f64)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<(&str, f64)> = Vec::new();

        for tx in &self.store {
            let name = tx.sender_full_name.as_str();
            let slot = *index.entry(name).or_insert_with(|| {
                totals.push((name, 0.0));
                totals.len() - 1
            });
            totals[slot].1 += tx.amount;
        }

        totals
    }

    /// Name of the sender with the highest total sent amount.
    ///
    /// On a tie the sender that appears first in the store wins. `None` for
    /// an empty store.
    pub fn top_sender(&self) -> Option<&str> {
        self.sender_totals()
            .into_iter()
            .fold(None::<(&str, f64)>, |best, (name, total)| match best {
                Some((_, max)) if total.total_cmp(&max).is_le() => best,
                _ => Some((name, total)),
            })
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use crate::Transaction;
    use crate::ops::fixtures::{engine, transaction, with_amount};

    fn sent(sender: &str, amount: f64) -> Transaction {
        Transaction {
            sender_full_name: sender.to_string(),
            amount,
            ..transaction()
        }
    }

    #[test]
    fn top3_by_amount() {
        let engine = engine(vec![
            transaction(),
            with_amount(300.0),
            transaction(),
            transaction(),
        ]);

        let top = engine.top3_by_amount();

        assert_eq!(top.len(), 3);
        let first = top[0];
        assert_eq!(first.amount, 430.2);
        assert_eq!(first.beneficiary_age, Some(33));
        assert_eq!(first.issue_id, Some(1));
        assert_eq!(
            first.issue_message.as_deref(),
            Some("Looks like money laundering")
        );
        assert_eq!(first.mtn, Some(663458));
        assert_eq!(first.sender_age, Some(22));
        assert_eq!(first.sender_full_name, "Tom Shelby");
        assert_eq!(first.issue_solved, Some(false));
    }

    #[test]
    fn top3_by_amount_sorted_descending() {
        let engine = engine(vec![
            with_amount(100.0),
            with_amount(400.0),
            with_amount(-10.0),
            with_amount(250.0),
            with_amount(300.0),
        ]);

        let amounts: Vec<f64> = engine.top3_by_amount().iter().map(|tx| tx.amount).collect();

        assert_eq!(amounts, vec![400.0, 300.0, 250.0]);
    }

    #[test]
    fn top3_by_amount_ties_keep_store_order() {
        let engine = engine(vec![
            Transaction { mtn: Some(1), ..with_amount(50.0) },
            Transaction { mtn: Some(2), ..with_amount(80.0) },
            Transaction { mtn: Some(3), ..with_amount(50.0) },
            Transaction { mtn: Some(4), ..with_amount(50.0) },
        ]);

        let mtns: Vec<i64> = engine.top3_by_amount().iter().filter_map(|tx| tx.mtn).collect();

        assert_eq!(mtns, vec![2, 1, 3]);
    }

    #[test]
    fn top3_by_amount_fewer_than_three() {
        let engine = engine(vec![with_amount(1.0), with_amount(2.0)]);

        let amounts: Vec<f64> = engine.top3_by_amount().iter().map(|tx| tx.amount).collect();

        assert_eq!(amounts, vec![2.0, 1.0]);
    }

    #[test]
    fn top3_by_amount_empty() {
        assert!(engine(Vec::new()).top3_by_amount().is_empty());
    }

    #[test]
    fn top_transactions_by_amount_zero() {
        let engine = engine(vec![transaction()]);

        assert!(engine.top_transactions_by_amount(0).is_empty());
    }

    #[test]
    fn sender_totals_in_first_appearance_order() {
        let engine = engine(vec![
            sent("Tom Shelby", 10.0),
            sent("Arthur Shelby", 5.0),
            sent("Tom Shelby", 2.5),
        ]);

        assert_eq!(
            engine.sender_totals(),
            vec![("Tom Shelby", 12.5), ("Arthur Shelby", 5.0)]
        );
    }

    #[test]
    fn top_sender() {
        let engine = engine(vec![
            transaction(),
            with_amount(300.0),
            transaction(),
            transaction(),
        ]);

        assert_eq!(engine.top_sender(), Some("Tom Shelby"));
    }

    #[test]
    fn top_sender_by_total_not_single_amount() {
        let engine = engine(vec![
            sent("Arthur Shelby", 500.0),
            sent("Tom Shelby", 300.0),
            sent("Tom Shelby", 300.0),
        ]);

        assert_eq!(engine.top_sender(), Some("Tom Shelby"));
    }

    #[test]
    fn top_sender_tie_first_in_store_wins() {
        let engine = engine(vec![
            sent("Arthur Shelby", 100.0),
            sent("Tom Shelby", 60.0),
            sent("Tom Shelby", 40.0),
        ]);

        assert_eq!(engine.top_sender(), Some("Arthur Shelby"));
    }

    #[test]
    fn top_sender_empty() {
        assert_eq!(engine(Vec::new()).top_sender(), None);
    }
}
