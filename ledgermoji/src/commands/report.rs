use std::collections::{BTreeMap, HashMap};

use categorymoji::resolve_emoji;

use crate::{
    commands::transactions::{category_label, format_amount},
    emojis,
    storages::Transaction,
};

/// Spending totals for one category group, keyed by currency code.
/// Transactions without a currency are summed under "".
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub emoji: &'static str,
    pub totals: BTreeMap<String, f64>,
    pub count: usize,
}

impl CategorySummary {
    /// Sum over all currencies, used for ordering only
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }
}

/// Group expenses by category name and sum their amounts per currency.
/// Only expenses count: incoming transactions are skipped.
/// The group emoji is resolved from the first transaction of the group.
/// Sorted by total, largest first, then by name.
pub fn summarize_by_category(transactions: &[Transaction]) -> Vec<CategorySummary> {
    let mut summaries: HashMap<&str, CategorySummary> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let name = category_label(transaction);
        let summary = summaries.entry(name).or_insert_with(|| CategorySummary {
            name: name.to_string(),
            emoji: resolve_emoji(&transaction.category),
            totals: BTreeMap::new(),
            count: 0,
        });
        let currency = transaction.currency.clone().unwrap_or_default();
        *summary.totals.entry(currency).or_insert(0.0) += transaction.amount;
        summary.count += 1;
    }

    let mut result: Vec<CategorySummary> = summaries.into_values().collect();
    result.sort_by(|a, b| {
        b.total()
            .total_cmp(&a.total())
            .then_with(|| a.name.cmp(&b.name))
    });
    result
}

fn format_totals(totals: &BTreeMap<String, f64>) -> String {
    totals
        .iter()
        .map(|(currency, amount)| format_amount(*amount, currency))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per category plus one grand total line per currency
pub fn format_report(summaries: &[CategorySummary]) -> Vec<String> {
    let mut lines: Vec<String> = summaries
        .iter()
        .map(|s| {
            format!(
                "{} {}: {} ({})",
                s.emoji,
                s.name,
                format_totals(&s.totals),
                s.count
            )
        })
        .collect();

    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for (currency, amount) in summaries.iter().flat_map(|s| s.totals.iter()) {
        *totals.entry(currency.as_str()).or_insert(0.0) += amount;
    }
    if totals.is_empty() {
        totals.insert("", 0.0);
    }
    for (currency, total) in totals {
        lines.push(format!(
            "{} Total: {}",
            emojis::CHART,
            format_amount(total, currency)
        ));
    }
    lines
}
