use categorymoji::emoji::{category_emojis, type_emojis};

use crate::emojis;

/// Print both emoji tables: categories first, then account types with the default last
pub fn run() -> Vec<String> {
    let mut lines = vec![format!("{} Categories", emojis::TABLE)];
    lines.extend(category_emojis().map(|(name, emoji)| format!("{} {}", emoji, name)));
    lines.push(format!("{} Account types", emojis::TABLE));
    lines.extend(type_emojis().map(|(code, emoji)| format!("{} {}", emoji, code)));
    lines
}
