use std::sync::Arc;

use crate::{
    commands::{load_filtered, transactions::format_transactions_recent},
    config::FilterArgs,
    emojis,
    storages::TransactionSourceTrait,
};

/// Show the `limit` newest matching transactions
pub async fn run(
    source: Arc<dyn TransactionSourceTrait>,
    limit: usize,
    filter: &FilterArgs,
) -> Result<Vec<String>, String> {
    let transactions = load_filtered(source, filter).await?;
    let recent = format_transactions_recent(&transactions, limit);
    if recent.is_empty() {
        return Ok(vec![format!("{} No transactions found", emojis::EMPTY)]);
    }

    let mut lines = vec![format!(
        "{} Recent transactions ({})",
        emojis::RECENT,
        recent.len()
    )];
    lines.extend(recent);
    Ok(lines)
}
