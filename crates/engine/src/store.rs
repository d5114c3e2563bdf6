//! In-memory transaction store.
//!
//! The store is filled once, from a JSON array of records, and never changes
//! afterwards. A source that cannot be read or parsed yields an error and no
//! store at all.

use std::{fs::File, io::BufReader, io::Read, path::Path};

use crate::{EngineError, ResultEngine, Transaction};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Parse a JSON array of transactions from `reader`.
    pub fn from_reader(reader: impl Read) -> ResultEngine<Self> {
        let transactions: Vec<Transaction> = serde_json::from_reader(reader)?;
        Ok(Self::new(transactions))
    }

    pub fn from_json_str(json: &str) -> ResultEngine<Self> {
        let transactions: Vec<Transaction> = serde_json::from_str(json)?;
        Ok(Self::new(transactions))
    }

    /// Load the JSON file at `path`.
    ///
    /// Any failure is reported as [`EngineError::Load`] carrying the path.
    ///
    /// [`EngineError::Load`]: crate::EngineError::Load
    pub fn load(path: impl AsRef<Path>) -> ResultEngine<Self> {
        let path = path.as_ref();
        tracing::debug!("loading transactions from {}", path.display());

        let store = File::open(path)
            .map_err(Into::into)
            .and_then(|file| Self::from_reader(BufReader::new(file)))
            .map_err(|err| EngineError::at(path, err))?;

        tracing::info!("loaded {} transactions", store.len());
        Ok(store)
    }

    /// All transactions, in load order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Transaction>> for TransactionStore {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}
