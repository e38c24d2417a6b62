use proptest::prelude::*;
use rex_syntax::parse;

proptest! {
    /// For any input text, parsing either succeeds or fails with a position
    /// inside `[0, length(text)]`.
    #[test]
    fn parse_error_position_is_in_bounds(text in "[a-zA-Z0-9.*+?|()\\[\\]^{}\\\\-]{0,24}") {
        if let Err(e) = parse(&text) {
            prop_assert!(e.position() <= text.len());
        }
    }

    #[test]
    fn parsing_plain_literals_never_fails(text in "[a-zA-Z0-9]{0,16}") {
        prop_assert!(parse(&text).is_ok());
    }
}
