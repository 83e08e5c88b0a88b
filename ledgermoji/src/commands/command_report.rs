use std::sync::Arc;

use crate::{
    commands::{
        load_filtered,
        report::{format_report, summarize_by_category},
    },
    config::FilterArgs,
    emojis,
    storages::TransactionSourceTrait,
};

/// Sum matching transactions per category
pub async fn run(
    source: Arc<dyn TransactionSourceTrait>,
    filter: &FilterArgs,
) -> Result<Vec<String>, String> {
    let transactions = load_filtered(source, filter).await?;
    if transactions.is_empty() {
        return Ok(vec![format!("{} No transactions found", emojis::EMPTY)]);
    }

    let summaries = summarize_by_category(&transactions);
    log::info!(
        "Report over {} transactions in {} categories",
        transactions.len(),
        summaries.len()
    );

    let mut lines = vec![format!("{} Report by category", emojis::REPORT)];
    lines.extend(format_report(&summaries));
    Ok(lines)
}
