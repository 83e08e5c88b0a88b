//! Categorymoji - display emoji for ledger categories and account types

// Private API modules
pub(crate) mod api;

// Public emoji module with re-exports
pub mod emoji {
    // Re-export tables and the resolver from internal API
    pub use crate::api::emoji::{
        category_table::{CATEGORY_EMOJI_ENTRIES, category_emoji, category_emojis},
        resolver::{
            Category, CategoryDescriptor, EmojiMatch, EmojiSource, resolve_emoji,
            resolve_emoji_match,
        },
        type_table::{
            AccountType, DEFAULT_EMOJI, DEFAULT_TYPE_CODE, TYPE_EMOJI_ENTRIES, type_emoji,
            type_emojis,
        },
    };
}

pub use emoji::{Category, CategoryDescriptor, resolve_emoji};
