use std::path::PathBuf;

use categorymoji::Category;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Direction of the master journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    Debit,
    Credit,
}

impl EntryType {
    /// CREDIT on the master entry moves money out of the account
    pub fn is_outgoing(&self) -> bool {
        matches!(self, EntryType::Credit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unix timestamp in milliseconds
    pub transaction_date: i64,
    pub title: String,
    pub amount: f64,
    pub entry_type: EntryType,
    pub account_name: String,
    /// Currency code of the amount, e.g. "EUR"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub category: Category,
}

impl Transaction {
    /// Outgoing transaction with a positive amount
    pub fn is_expense(&self) -> bool {
        self.entry_type.is_outgoing() && self.amount > 0.0
    }

    /// Amount signed by direction: negative when money leaves the account
    pub fn signed_amount(&self) -> f64 {
        if self.entry_type.is_outgoing() {
            -self.amount
        } else {
            self.amount
        }
    }
}

/// Serializable structure for a transaction file
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TransactionData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Trait for loading transactions from wherever the ledger keeps them
#[async_trait::async_trait]
pub trait TransactionSourceTrait: Send + Sync {
    /// Load all transactions, in the order the source stores them
    async fn load_transactions(&self) -> Result<Vec<Transaction>, String>;
}

/// Transactions read from a YAML file
#[derive(Clone)]
pub struct YamlTransactionSource {
    path: PathBuf,
}

impl YamlTransactionSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl TransactionSourceTrait for YamlTransactionSource {
    async fn load_transactions(&self) -> Result<Vec<Transaction>, String> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| format!("Failed to read {}: {}", self.path.display(), e))?;

        let data = serde_yaml::from_str::<TransactionData>(&content)
            .map_err(|e| format!("Failed to parse {}: {}", self.path.display(), e))?;

        log::info!(
            "Loaded {} transactions from {:?}",
            data.transactions.len(),
            self.path
        );
        Ok(data.transactions)
    }
}

/// In-memory transaction source for tests
#[cfg(test)]
#[derive(Clone, Default)]
pub struct InMemoryTransactionSource {
    data: std::sync::Arc<tokio::sync::Mutex<Vec<Transaction>>>,
}

#[cfg(test)]
impl InMemoryTransactionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_transactions(&self, transactions: Vec<Transaction>) {
        let mut guard = self.data.lock().await;
        guard.extend(transactions);
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl TransactionSourceTrait for InMemoryTransactionSource {
    async fn load_transactions(&self) -> Result<Vec<Transaction>, String> {
        let guard = self.data.lock().await;
        Ok(guard.clone())
    }
}
