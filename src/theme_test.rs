use super::*;

// =============================================================
// Stored value parsing
// =============================================================

#[test]
fn stored_light_parses() {
    assert_eq!(Theme::from_stored(Some("light")), Some(Theme::Light));
}

#[test]
fn stored_dark_parses() {
    assert_eq!(Theme::from_stored(Some("dark")), Some(Theme::Dark));
}

#[test]
fn stored_garbage_is_absent() {
    for junk in ["", "Light", "DARK", "auto", "true", "0"] {
        assert_eq!(Theme::from_stored(Some(junk)), None, "{junk:?}");
    }
    assert_eq!(Theme::from_stored(None), None);
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn stored_value_beats_system_preference() {
    assert_eq!(resolve(Some("light"), false), Theme::Light);
    assert_eq!(resolve(Some("dark"), true), Theme::Dark);
}

#[test]
fn unset_follows_system_light() {
    assert_eq!(resolve(None, true), Theme::Light);
}

#[test]
fn unset_defaults_to_dark() {
    assert_eq!(resolve(None, false), Theme::Dark);
}

#[test]
fn garbage_stored_defaults_to_dark() {
    assert_eq!(resolve(Some("sepia"), false), Theme::Dark);
}

// =============================================================
// Toggle round trip
// =============================================================

#[test]
fn toggling_twice_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
        assert_ne!(theme.toggled(), theme);
    }
}

#[test]
fn confirmation_names_the_new_theme() {
    assert_eq!(Theme::Dark.confirmation(), "Dark theme enabled");
    assert_eq!(Theme::Light.confirmation(), "Light theme enabled");
}

#[test]
fn as_str_round_trips_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), Some(theme));
    }
}
