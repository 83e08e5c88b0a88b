/// Emoji constants used in ledgermoji output headers and notices.
/// Category emoji come from the categorymoji tables, not from here.

// Section headers
pub const LIST: &str = "🗒️";
pub const REPORT: &str = "📋";
pub const RECENT: &str = "🕒";
pub const TABLE: &str = "🗂";
pub const CHART: &str = "📊";

// Status
pub const ERROR: &str = "❌";
pub const EMPTY: &str = "📂";
