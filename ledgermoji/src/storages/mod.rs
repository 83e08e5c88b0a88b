mod transaction_storage;

pub use transaction_storage::{Transaction, TransactionSourceTrait, YamlTransactionSource};
#[cfg(test)]
pub use transaction_storage::{EntryType, InMemoryTransactionSource};
