use super::*;

fn ratios(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(id, r)| ((*id).to_owned(), *r)).collect()
}

// =============================================================
// most_visible
// =============================================================

#[test]
fn highest_ratio_wins() {
    let map = ratios(&[("intro", 0.2), ("pricing", 0.6), ("faq", 0.4)]);
    assert_eq!(most_visible(&map), Some("pricing"));
}

#[test]
fn single_entry_wins() {
    let map = ratios(&[("intro", 0.15)]);
    assert_eq!(most_visible(&map), Some("intro"));
}

#[test]
fn empty_map_has_no_winner() {
    assert_eq!(most_visible(&HashMap::new()), None);
}

#[test]
fn ties_break_to_first_id() {
    let map = ratios(&[("b-section", 0.5), ("a-section", 0.5)]);
    assert_eq!(most_visible(&map), Some("a-section"));
}

#[test]
fn winner_tracks_updates() {
    let mut map = ratios(&[("intro", 0.65), ("pricing", 0.25)]);
    assert_eq!(most_visible(&map), Some("intro"));
    map.remove("intro");
    assert_eq!(most_visible(&map), Some("pricing"));
}

// =============================================================
// fragment_of
// =============================================================

#[test]
fn fragment_strips_the_hash() {
    assert_eq!(fragment_of(Some("#pricing")), Some("pricing"));
}

#[test]
fn bare_hash_is_not_a_fragment() {
    assert_eq!(fragment_of(Some("#")), None);
}

#[test]
fn external_hrefs_are_not_fragments() {
    assert_eq!(fragment_of(Some("/docs")), None);
    assert_eq!(fragment_of(Some("https://example.com#x")), None);
    assert_eq!(fragment_of(None), None);
}
