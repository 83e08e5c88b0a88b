use std::sync::Arc;

use crate::{
    commands::{load_filtered, transactions::format_transactions_chronological},
    config::FilterArgs,
    emojis,
    storages::TransactionSourceTrait,
};

/// List matching transactions in chronological order
pub async fn run(
    source: Arc<dyn TransactionSourceTrait>,
    filter: &FilterArgs,
) -> Result<Vec<String>, String> {
    let transactions = load_filtered(source, filter).await?;
    if transactions.is_empty() {
        return Ok(vec![format!("{} No transactions found", emojis::EMPTY)]);
    }

    let mut lines = vec![format!(
        "{} Transactions ({})",
        emojis::LIST,
        transactions.len()
    )];
    lines.extend(format_transactions_chronological(&transactions));
    Ok(lines)
}
