use std::{collections::HashMap, sync::LazyLock};

/// Category name to emoji pairs, in display order.
/// Names are matched exactly (case-sensitive, no trimming).
pub const CATEGORY_EMOJI_ENTRIES: &[(&str, &str)] = &[
    // Income categories
    ("Salary", "💰"),
    ("Dividends", "💵"),
    ("Rental income", "🏘️"),
    ("Freelance", "💻"),
    ("Business", "💼"),
    ("Interest", "🏦"),
    ("Gifts received", "🎀"),
    ("Refunds", "↩️"),
    ("Other income", "💸"),

    // Expense categories
    ("Groceries", "🛒"),
    ("Eating out", "🍽️"),
    ("Transport", "🚗"),
    ("Entertainment", "🎮"),
    ("Shopping", "🛍️"),
    ("Health", "⚕️"),
    ("Education", "📚"),
    ("Bills", "📄"),
    ("Rent", "🏠"),
    ("Travel", "✈️"),
    ("Gifts", "🎁"),
    ("Sports", "⚽"),
    ("Beauty", "💅"),
    ("Pets", "🐾"),
    ("Taxi", "🚕"),
    ("Coffee", "☕"),
    ("Alcohol", "🍺"),
    ("Clothes", "👕"),
    ("Internet", "🌐"),
    ("Phone", "📱"),
    ("Utilities", "💡"),
    ("Insurance", "🛡️"),
    ("Car", "🚙"),
    ("Parking", "🅿️"),
    ("Pharmacy", "💊"),
    ("Doctor", "👨‍⚕️"),
    ("Gym", "🏋️"),
    ("Movies", "🎬"),
    ("Music", "🎵"),
    ("Books", "📚"),
    ("Software", "💻"),
    ("Charity", "🤝"),
    ("Investment", "📈"),
    ("Other expenses", "📋"),
    // Add more categories as needed
];

static CATEGORY_EMOJIS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CATEGORY_EMOJI_ENTRIES.iter().copied().collect());

/// Get the emoji mapped to an exact category name
pub fn category_emoji(name: &str) -> Option<&'static str> {
    CATEGORY_EMOJIS.get(name).copied()
}

/// Iterate over all category mappings in declaration order
pub fn category_emojis() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATEGORY_EMOJI_ENTRIES.iter().copied()
}
