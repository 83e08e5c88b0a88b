use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use regex::Regex;

use crate::{config::FilterArgs, storages::Transaction, utils::parse_date};

/// Inclusive range of Unix milliseconds covering whole UTC days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DateRange {
    /// From the start of `from` to the last millisecond of `to`
    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Result<Self, String> {
        let start = from.and_time(NaiveTime::MIN);
        let end = to
            .and_hms_milli_opt(23, 59, 59, 999)
            .ok_or_else(|| format!("Cannot build end of day for {}", to))?;
        Ok(Self {
            start_ms: Utc.from_utc_datetime(&start).timestamp_millis(),
            end_ms: Utc.from_utc_datetime(&end).timestamp_millis(),
        })
    }

    pub fn contains(&self, timestamp_ms: i64) -> bool {
        self.start_ms <= timestamp_ms && timestamp_ms <= self.end_ms
    }
}

/// Selection of transactions for `list` and `report`
#[derive(Debug, Clone)]
pub struct TransactionFilter {
    date_range: Option<DateRange>,
    title_regex: Option<Regex>,
    expenses_only: bool,
}

impl TransactionFilter {
    pub fn from_args(args: &FilterArgs) -> Result<Self, String> {
        let date_range = match (&args.from, &args.to) {
            (Some(from), Some(to)) => {
                let range = DateRange::from_dates(parse_date(from)?, parse_date(to)?)?;
                log::debug!(
                    "Date range in timestamps: {} to {}",
                    range.start_ms,
                    range.end_ms
                );
                Some(range)
            }
            (None, None) => None,
            _ => {
                log::warn!("Both --from and --to are required for date filtering, ignoring");
                None
            }
        };

        let title_regex = args
            .title_filter
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| format!("Invalid title filter: {}", e))?;

        Ok(Self {
            date_range,
            title_regex,
            expenses_only: args.expenses_only,
        })
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let in_range = self
            .date_range
            .is_none_or(|range| range.contains(transaction.transaction_date));
        let title_matches = self
            .title_regex
            .as_ref()
            .is_none_or(|re| re.is_match(&transaction.title));
        in_range && title_matches && (!self.expenses_only || transaction.is_expense())
    }

    pub fn apply(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        transactions
            .into_iter()
            .filter(|transaction| self.matches(transaction))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use categorymoji::Category;

    use super::*;
    use crate::storages::EntryType;

    fn transaction(
        timestamp: i64,
        title: &str,
        amount: f64,
        entry_type: EntryType,
    ) -> Transaction {
        Transaction {
            transaction_date: timestamp,
            title: title.to_string(),
            amount,
            entry_type,
            account_name: "Checking".to_string(),
            currency: None,
            category: Category::default(),
        }
    }

    fn filter_args(from: Option<&str>, to: Option<&str>, title: Option<&str>) -> FilterArgs {
        FilterArgs {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            title_filter: title.map(str::to_string),
            expenses_only: false,
        }
    }

    #[test]
    fn test_date_range_covers_whole_days() {
        let range = DateRange::from_dates(
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
        )
        .expect("Failed to build range");
        assert_eq!(range.start_ms, 1609459200000); // 2021-01-01 00:00:00 UTC
        assert_eq!(range.end_ms, 1609631999999); // 2021-01-02 23:59:59.999 UTC
        assert!(range.contains(1609459200000));
        assert!(range.contains(1609631999999));
        assert!(!range.contains(1609459199999));
        assert!(!range.contains(1609632000000));
    }

    #[test]
    fn test_latest_supported_date_as_upper_bound() {
        let to = NaiveDate::MAX.format("%Y-%m-%d").to_string();
        let args = filter_args(Some("2024-01-01"), Some(to.as_str()), None);
        let filter = TransactionFilter::from_args(&args).expect("Failed to build filter");
        assert!(filter.matches(&transaction(
            1704067200000, // 2024-01-01 00:00:00 UTC
            "New year",
            1.0,
            EntryType::Credit
        )));
        assert!(!filter.matches(&transaction(
            1704067199999,
            "Old year",
            1.0,
            EntryType::Credit
        )));

        let range = DateRange::from_dates(NaiveDate::MIN, NaiveDate::MAX)
            .expect("Failed to build range");
        assert!(range.start_ms < range.end_ms);
    }

    #[test]
    fn test_filter_by_date() {
        let args = filter_args(Some("2021-01-02"), Some("2021-01-02"), None);
        let filter = TransactionFilter::from_args(&args).expect("Failed to build filter");
        let transactions = vec![
            transaction(1609459200000, "Day one", 1.0, EntryType::Credit),
            transaction(1609545600000, "Day two", 2.0, EntryType::Credit),
            transaction(1609632000000, "Day three", 3.0, EntryType::Credit),
        ];
        let filtered = filter.apply(transactions);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Day two");
    }

    #[test]
    fn test_single_date_bound_is_ignored() {
        let filter = TransactionFilter::from_args(&filter_args(Some("2021-01-02"), None, None))
            .expect("Failed to build filter");
        assert!(filter.matches(&transaction(0, "Epoch", 1.0, EntryType::Debit)));
    }

    #[test]
    fn test_filter_by_title() {
        let filter = TransactionFilter::from_args(&filter_args(None, None, Some("(?i)coffee")))
            .expect("Failed to build filter");
        assert!(filter.matches(&transaction(0, "Morning Coffee", 3.5, EntryType::Credit)));
        assert!(!filter.matches(&transaction(0, "Bus ticket", 2.0, EntryType::Credit)));
    }

    #[test]
    fn test_expenses_only() {
        let args = FilterArgs {
            expenses_only: true,
            ..FilterArgs::default()
        };
        let filter = TransactionFilter::from_args(&args).expect("Failed to build filter");
        assert!(filter.matches(&transaction(0, "Rent", 900.0, EntryType::Credit)));
        assert!(!filter.matches(&transaction(0, "Salary", 3000.0, EntryType::Debit)));
        assert!(!filter.matches(&transaction(0, "Reversal", -5.0, EntryType::Credit)));
    }

    #[test]
    fn test_invalid_arguments() {
        let args = filter_args(Some("2021-13-01"), Some("2021-01-02"), None);
        let bad_date = TransactionFilter::from_args(&args);
        assert!(bad_date.unwrap_err().starts_with("Invalid date"));

        let bad_regex = TransactionFilter::from_args(&filter_args(None, None, Some("(unclosed")));
        assert!(bad_regex.unwrap_err().starts_with("Invalid title filter"));
    }
}
