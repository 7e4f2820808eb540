use super::*;

#[test]
fn only_literal_true_is_expanded() {
    assert!(is_expanded(Some("true")));
}

#[test]
fn missing_attribute_is_collapsed() {
    assert!(!is_expanded(None));
}

#[test]
fn malformed_values_are_collapsed() {
    for junk in ["", "false", "True", "TRUE", "1", "yes"] {
        assert!(!is_expanded(Some(junk)), "{junk:?}");
    }
}
