/// Field delimiter used by table files.
///
/// The format has no quoting or escaping: field values must not contain the
/// delimiter or a line terminator. This is a documented limitation of the
/// store, not something the codec works around.
pub(crate) const FIELD_DELIMITER: &str = ",";

/// Splits one line into its fields.
pub(crate) fn decode(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(str::to_string).collect()
}

/// Joins fields into one line.
///
/// Whitespace trimming of raw input is the caller's job; the codec joins
/// fields exactly as given.
pub(crate) fn encode<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| field.as_ref())
        .collect::<Vec<_>>()
        .join(FIELD_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_splits_on_delimiter() {
        assert_eq!(decode("1,alice,30"), vec!["1", "alice", "30"]);
    }

    #[test]
    fn test_decode_keeps_empty_fields() {
        assert_eq!(decode("1,,30"), vec!["1", "", "30"]);
    }

    #[test]
    fn test_encode_joins_fields() {
        assert_eq!(encode(&["1", "alice", "30"]), "1,alice,30");
    }

    #[test]
    fn test_encode_single_field_has_no_delimiter() {
        assert_eq!(encode(&["alice"]), "alice");
    }

    #[test]
    fn test_round_trip() {
        let fields = vec!["2".to_string(), "bob".to_string(), "25".to_string()];
        assert_eq!(decode(&encode(&fields)), fields);
    }
}
