use serde::{Deserialize, Serialize};

use super::{
    category_table::category_emoji,
    type_table::{AccountType, DEFAULT_EMOJI, type_emoji},
};

/// Read-only view of a category record: its name and account type code.
/// Either field may be missing; the resolver treats that as "no match".
pub trait CategoryDescriptor {
    fn name(&self) -> Option<&str>;
    fn category_type(&self) -> Option<&str>;
}

/// Category record as supplied by a ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub category_type: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, category_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            category_type: Some(category_type.into()),
        }
    }

    pub fn with_account_type(name: impl Into<String>, account_type: AccountType) -> Self {
        Self::new(name, account_type.as_str())
    }
}

impl CategoryDescriptor for Category {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn category_type(&self) -> Option<&str> {
        self.category_type.as_deref()
    }
}

/// `(name, type)` pair
impl CategoryDescriptor for (&str, &str) {
    fn name(&self) -> Option<&str> {
        Some(self.0)
    }

    fn category_type(&self) -> Option<&str> {
        Some(self.1)
    }
}

impl<T: CategoryDescriptor + ?Sized> CategoryDescriptor for &T {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn category_type(&self) -> Option<&str> {
        (**self).category_type()
    }
}

/// Which lookup level produced an emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiSource {
    /// Category name table
    Name,
    /// Account type table
    Type,
    /// Nothing matched
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch {
    pub emoji: &'static str,
    pub source: EmojiSource,
}

/// Resolve an emoji and report which level matched.
/// Name match wins over type match, type match wins over the default.
pub fn resolve_emoji_match<C: CategoryDescriptor + ?Sized>(category: &C) -> EmojiMatch {
    if let Some(emoji) = category.name().and_then(category_emoji) {
        return EmojiMatch {
            emoji,
            source: EmojiSource::Name,
        };
    }

    if let Some(emoji) = category.category_type().and_then(type_emoji) {
        return EmojiMatch {
            emoji,
            source: EmojiSource::Type,
        };
    }

    EmojiMatch {
        emoji: DEFAULT_EMOJI,
        source: EmojiSource::Default,
    }
}

/// Get the most specific emoji for a category. Never fails: unknown or
/// missing names and types fall back to the default emoji.
pub fn resolve_emoji<C: CategoryDescriptor + ?Sized>(category: &C) -> &'static str {
    resolve_emoji_match(category).emoji
}
