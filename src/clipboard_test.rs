use super::*;

// =============================================================
// Aggregate env payload
// =============================================================

#[test]
fn env_payload_is_four_lines_in_order() {
    let payload = env_payload();
    let lines: Vec<&str> = payload.lines().collect();
    assert_eq!(
        lines,
        vec![
            "LANDING_API_KEY=<your api key>",
            "LANDING_API_SECRET=<your api secret>",
            "LANDING_REGION=<region>",
            "LANDING_ENDPOINT=https://api.example.com/v1",
        ]
    );
}

#[test]
fn env_payload_has_no_trailing_newline() {
    assert!(!env_payload().ends_with('\n'));
}

// =============================================================
// Toast wording
// =============================================================

#[test]
fn copied_message_names_the_label() {
    assert_eq!(copied_message("API key"), "API key copied");
    assert_eq!(copied_message("env template"), "env template copied");
}

#[test]
fn failure_message_tells_the_user_to_copy_manually() {
    assert!(FAILED_MESSAGE.contains("manually"));
}
