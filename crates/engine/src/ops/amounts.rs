use crate::Engine;

impl Engine {
    /// Sum of the amounts of all transactions, `0.0` for an empty store.
    pub fn total_amount(&self) -> f64 {
        sum(self.store.iter().map(|tx| tx.amount))
    }

    /// Sum of the amounts sent by `sender_full_name`.
    ///
    /// The name must match exactly (case-sensitive, no trimming).
    pub fn total_amount_sent_by(&self, sender_full_name: &str) -> f64 {
        sum(self
            .store
            .iter()
            .filter(|tx| tx.sender_full_name == sender_full_name)
            .map(|tx| tx.amount))
    }

    /// Highest transaction amount, `0.0` for an empty store.
    pub fn max_amount(&self) -> f64 {
        self.store
            .iter()
            .map(|tx| tx.amount)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }
}

/// Plain left-to-right sum starting at `+0.0`, so an empty input never
/// serializes as `-0.0`.
fn sum(amounts: impl Iterator<Item = f64>) -> f64 {
    amounts.fold(0.0, |acc, amount| acc + amount)
}
