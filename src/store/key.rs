use crate::store::row::Row;

/// Derives the next primary key from the existing data rows.
///
/// Scans the first field of every row, parses it as an integer, and returns
/// `max + 1`. Rows whose first field is not a valid integer contribute
/// nothing and never raise. A table with no valid keys starts at 1.
pub(crate) fn next_key(rows: &[Row]) -> u64 {
    rows.iter()
        .filter_map(|row| row.key().and_then(|field| field.parse::<u64>().ok()))
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        Row::new(fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_empty_table_starts_at_one() {
        assert_eq!(next_key(&[]), 1);
    }

    #[test]
    fn test_next_key_is_max_plus_one() {
        let rows = vec![row(&["1", "alice"]), row(&["3", "carol"]), row(&["2", "bob"])];
        assert_eq!(next_key(&rows), 4);
    }

    #[test]
    fn test_gaps_are_not_reused() {
        let rows = vec![row(&["5", "eve"])];
        assert_eq!(next_key(&rows), 6);
    }

    #[test]
    fn test_non_numeric_keys_are_ignored() {
        let rows = vec![row(&["alice", "30"]), row(&["2", "bob"]), row(&["", "x"])];
        assert_eq!(next_key(&rows), 3);
    }

    #[test]
    fn test_all_keys_invalid_starts_at_one() {
        let rows = vec![row(&["alice", "30"]), row(&["bob", "25"])];
        assert_eq!(next_key(&rows), 1);
    }
}
