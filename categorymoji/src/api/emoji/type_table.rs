use std::{collections::HashMap, fmt::Display, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

/// Code of the fallback entry in the account type table
pub const DEFAULT_TYPE_CODE: &str = "DEFAULT";

/// Emoji used when neither the category name nor the account type is known
pub const DEFAULT_EMOJI: &str = "📝";

/// Account type code to emoji pairs, in display order. The last entry is the default.
pub const TYPE_EMOJI_ENTRIES: &[(&str, &str)] = &[
    ("INCOME", "💵"),
    ("EXPENSES", "💳"),
    ("ASSETS", "🏦"),
    ("LIABILITIES", "📊"),
    (DEFAULT_TYPE_CODE, DEFAULT_EMOJI),
];

static TYPE_EMOJIS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TYPE_EMOJI_ENTRIES.iter().copied().collect());

/// Coarse classification of a ledger account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Income,
    Expenses,
    Assets,
    Liabilities,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Income,
        AccountType::Expenses,
        AccountType::Assets,
        AccountType::Liabilities,
    ];

    /// Uppercase code as it appears in category records
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Income => "INCOME",
            AccountType::Expenses => "EXPENSES",
            AccountType::Assets => "ASSETS",
            AccountType::Liabilities => "LIABILITIES",
        }
    }

    pub fn emoji(&self) -> &'static str {
        type_emoji(self.as_str()).unwrap_or(DEFAULT_EMOJI)
    }
}

impl Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an account type code. Matching is exact, so "income" is rejected.
impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::ALL
            .into_iter()
            .find(|account_type| account_type.as_str() == s)
            .ok_or_else(|| format!("Unknown account type: {}", s))
    }
}

/// Get the emoji mapped to an exact account type code.
/// The literal code "DEFAULT" maps to the default emoji.
pub fn type_emoji(code: &str) -> Option<&'static str> {
    TYPE_EMOJIS.get(code).copied()
}

/// Iterate over the account type table in declaration order, default entry last
pub fn type_emojis() -> impl Iterator<Item = (&'static str, &'static str)> {
    TYPE_EMOJI_ENTRIES.iter().copied()
}
