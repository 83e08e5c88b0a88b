use categorymoji::emoji::{EmojiSource, resolve_emoji_match};

use crate::{config::OTHER_CATEGORY, storages::Transaction, utils::format_timestamp};

/// Category name shown next to the emoji, "Other" when the name is missing or empty
pub fn category_label(transaction: &Transaction) -> &str {
    transaction
        .category
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(OTHER_CATEGORY)
}

/// Amount with two decimals followed by the currency code, if any
pub fn format_amount(amount: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{:.2} {}", amount, currency)
    }
}

/// Format one transaction as `<date> <emoji> <category> <title> <signed amount> [currency]`
pub fn format_transaction_line(transaction: &Transaction) -> String {
    let resolved = resolve_emoji_match(&transaction.category);
    if resolved.source != EmojiSource::Name {
        log::debug!(
            "No emoji for category {:?} of '{}', using {:?} fallback",
            transaction.category.name,
            transaction.title,
            resolved.source
        );
    }

    let mut line = format!(
        "{} {} {} {} {:+.2}",
        format_timestamp(transaction.transaction_date),
        resolved.emoji,
        category_label(transaction),
        transaction.title,
        transaction.signed_amount()
    );
    if let Some(currency) = &transaction.currency {
        line.push(' ');
        line.push_str(currency);
    }
    line
}

/// Format transactions as a chronological list without category grouping
pub fn format_transactions_chronological(transactions: &[Transaction]) -> Vec<String> {
    let mut sorted_transactions = transactions.to_vec();
    sorted_transactions.sort_by_key(|t| t.transaction_date);

    sorted_transactions
        .iter()
        .map(format_transaction_line)
        .collect()
}

/// Format the `limit` most recent transactions, newest first
pub fn format_transactions_recent(transactions: &[Transaction], limit: usize) -> Vec<String> {
    let mut sorted_transactions = transactions.to_vec();
    sorted_transactions.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));

    sorted_transactions
        .iter()
        .take(limit)
        .map(format_transaction_line)
        .collect()
}
