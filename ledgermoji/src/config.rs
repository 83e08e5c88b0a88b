use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Group name for transactions whose category has no name
pub const OTHER_CATEGORY: &str = "Other";

/// Number of transactions shown by `recent` by default
pub const RECENT_LIMIT: usize = 5;

/// Date format for `--from`/`--to` and for printed transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shows ledger transactions decorated with category emoji
#[derive(Parser, Debug)]
#[command(name = "ledgermoji")]
#[command(about = "Shows ledger transactions decorated with category emoji", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Resolve the emoji for a single category
    Resolve {
        /// Category name, matched exactly
        #[arg(long)]
        name: Option<String>,
        /// Account type code (INCOME, EXPENSES, ASSETS, LIABILITIES)
        #[arg(long = "type")]
        category_type: Option<String>,
    },
    /// Print the category and account type emoji tables
    Table,
    /// List transactions in chronological order
    List {
        /// YAML file with transactions
        file: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show the most recent transactions, newest first
    Recent {
        /// YAML file with transactions
        file: PathBuf,
        /// How many transactions to show
        #[arg(long, default_value_t = RECENT_LIMIT)]
        limit: usize,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Sum expenses per category and currency
    Report {
        /// YAML file with transactions
        file: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Transaction selection options shared by `list` and `report`
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD), requires --to
    #[arg(long)]
    pub from: Option<String>,
    /// Last day to include (YYYY-MM-DD), requires --from
    #[arg(long)]
    pub to: Option<String>,
    /// Regex matched against transaction titles
    #[arg(long)]
    pub title_filter: Option<String>,
    /// Keep only outgoing transactions (CREDIT with a positive amount)
    #[arg(long)]
    pub expenses_only: bool,
}
