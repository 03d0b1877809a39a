//! Tests for `PackingError` formatting and source chaining

#[cfg(test)]
mod tests {
    use deckpack::PackingError;
    use std::error::Error;

    // Tests InvalidParameter carries all three fields into the message
    // Verified by omitting the value field from the Display impl
    #[test]
    fn test_invalid_parameter_message_contains_all_fields() {
        let error = deckpack::io::error::invalid_parameter("block_spacing", &-1, &"must be >= 0");

        let message = error.to_string();
        assert!(message.contains("block_spacing"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be >= 0"));
    }

    // Tests InputInvalid formats its reason
    // Verified by swapping the reason out for a fixed string
    #[test]
    fn test_input_invalid_message_contains_reason() {
        let error = deckpack::io::error::input_invalid("footprint is empty");
        assert_eq!(error.to_string(), "invalid input: footprint is empty");
    }

    // Tests RecordParse chains the underlying serde_json error as its source
    // Verified by returning None from source() unconditionally
    #[test]
    fn test_record_parse_error_chains_source() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = PackingError::RecordParse {
            source_name: "<test>".to_string(),
            source: json_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("<test>"));
    }

    // Tests InvalidParameter and InputInvalid report no source, since they
    // carry no wrapped error
    // Verified by making source() return Some for every variant
    #[test]
    fn test_leaf_variants_report_no_source() {
        let invalid_input = deckpack::io::error::input_invalid("reason");
        assert!(invalid_input.source().is_none());

        let invalid_param = deckpack::io::error::invalid_parameter("width", &0, &"must be > 0");
        assert!(invalid_param.source().is_none());
    }

    // Tests Io chains the underlying std::io::Error as its source and names the path
    // Verified by formatting the path out of the Display impl
    #[test]
    fn test_io_error_chains_source_and_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = deckpack::io::error::io_error("decks/bow.json", source);

        assert!(error.source().is_some());
        assert!(error.to_string().contains("decks/bow.json"));
    }
}
