mod command_list;
mod command_recent;
mod command_report;
mod command_resolve;
mod command_table;
pub mod report;
pub mod transactions;

use std::sync::Arc;

use crate::{
    config::{Command, FilterArgs},
    filters::TransactionFilter,
    storages::{Transaction, TransactionSourceTrait, YamlTransactionSource},
};

/// Execute a parsed command and return the lines to print
pub async fn execute(command: Command) -> Result<Vec<String>, String> {
    match command {
        Command::Resolve {
            name,
            category_type,
        } => Ok(command_resolve::run(name, category_type)),
        Command::Table => Ok(command_table::run()),
        Command::List { file, filter } => {
            command_list::run(Arc::new(YamlTransactionSource::new(file)), &filter).await
        }
        Command::Recent {
            file,
            limit,
            filter,
        } => {
            let source = Arc::new(YamlTransactionSource::new(file));
            command_recent::run(source, limit, &filter).await
        }
        Command::Report { file, filter } => {
            command_report::run(Arc::new(YamlTransactionSource::new(file)), &filter).await
        }
    }
}

/// Load transactions from the source and keep those selected by the filter options
async fn load_filtered(
    source: Arc<dyn TransactionSourceTrait>,
    filter: &FilterArgs,
) -> Result<Vec<Transaction>, String> {
    let filter = TransactionFilter::from_args(filter)?;
    let transactions = source.load_transactions().await?;
    let total = transactions.len();
    let selected = filter.apply(transactions);
    log::debug!("Selected {} of {} transactions", selected.len(), total);
    Ok(selected)
}
