use std::path::PathBuf;

pub use error::EngineError;
pub use store::TransactionStore;
pub use transactions::Transaction;

mod error;
mod ops;
mod store;
mod transactions;

type ResultEngine<T> = Result<T, EngineError>;

/// Read-only query engine over a [`TransactionStore`].
///
/// The engine owns the store and never mutates it, so a single instance can
/// be shared (e.g. behind an `Arc`) by any number of concurrent readers.
#[derive(Debug)]
pub struct Engine {
    store: TransactionStore,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }
}

enum Source {
    Store(TransactionStore),
    File(PathBuf),
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    source: Option<Source>,
}

impl EngineBuilder {
    /// Use an already loaded store
    pub fn store(mut self, store: TransactionStore) -> EngineBuilder {
        self.source = Some(Source::Store(store));
        self
    }

    /// Use the given transactions, in order
    pub fn transactions(self, transactions: Vec<Transaction>) -> EngineBuilder {
        self.store(TransactionStore::new(transactions))
    }

    /// Load the transactions from a JSON file when building
    pub fn path(mut self, path: impl Into<PathBuf>) -> EngineBuilder {
        self.source = Some(Source::File(path.into()));
        self
    }

    /// Construct `Engine`
    ///
    /// Fails if no source was given: an empty store must be asked for
    /// explicitly, with an empty `transactions` list.
    pub fn build(self) -> ResultEngine<Engine> {
        let store = match self.source {
            Some(Source::Store(store)) => store,
            Some(Source::File(path)) => TransactionStore::load(path)?,
            None => return Err(EngineError::MissingSource),
        };

        Ok(Engine { store })
    }
}
