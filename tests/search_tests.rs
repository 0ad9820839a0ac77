// Integration tests for the search API: match records, snippets, lifecycle

use boolmatch::{Matcher, BOUNDARY};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris \
nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla \
pariatur. Excepteur sint occaecat cupidatat non proident, sunt in \
culpa qui officia deserunt mollit anim id est laborum.";

// ============ Search Basics ============

#[test]
fn test_search_lorem_paragraph() {
    let mut m = Matcher::new("irure AND reprehenderit").unwrap();
    let result = m.search(LOREM);
    assert!(result.has_match());
}

#[test]
fn test_search_no_match() {
    let mut m = Matcher::new("missing").unwrap();
    let result = m.search(LOREM);
    assert!(!result.has_match());
    assert!(result.matches().is_empty());
    assert_eq!(result.hit_sentence(), "");
}

#[test]
fn test_search_input_is_normalized() {
    let mut m = Matcher::new("world").unwrap();
    let result = m.search("Hello WORLD");
    let normalized: String = result.input().iter().collect();
    assert_eq!(normalized, "hello world");
}

#[test]
fn test_search_input_contains_no_sentinels() {
    let mut m = Matcher::new("a").unwrap();
    let result = m.search("a b c");
    assert!(result.input().iter().all(|&c| c != BOUNDARY));
}

#[test]
fn test_and_reports_matches_from_both_sides() {
    let mut m = Matcher::new("irure AND reprehenderit").unwrap();
    let result = m.search(LOREM);
    assert_eq!(result.matches().len(), 2);
}

#[test]
fn test_or_reports_matches_from_either_side() {
    let mut m = Matcher::new("dolor OR nothere").unwrap();
    let result = m.search(LOREM);
    assert!(result.has_match());
    // "dolor" appears twice as a standalone word
    assert_eq!(result.matches().len(), 2);
}

#[test]
fn test_match_records_carry_word_indices() {
    let mut m = Matcher::new("three").unwrap();
    let result = m.search("one two three four");
    assert_eq!(result.matches().len(), 1);
    assert_eq!(result.matches()[0].word_index, 3);
    assert_eq!(result.matches()[0].len, 5);
}

// ============ Snippets ============

#[test]
fn test_snippet_contains_the_match() {
    let mut m = Matcher::new("irure").unwrap();
    let result = m.search(LOREM);
    assert!(result.hit_sentence().contains("irure"));
}

#[test]
fn test_snippet_has_ellipses_inside_long_text() {
    let mut m = Matcher::new("consequat").unwrap();
    let sentence = m.search(LOREM).hit_sentence();
    assert!(sentence.starts_with("… "));
    assert!(sentence.ends_with(" …"));
}

#[test]
fn test_snippet_round_trip() {
    // stripped of ellipses, the snippet is a contiguous piece of the
    // normalized input
    let expressions = ["irure", "lorem*", "\"dolore magna\"", "laborum"];
    for expression in expressions {
        let mut m = Matcher::new(expression).unwrap();
        let result = m.search(LOREM);
        assert!(result.has_match(), "{} should match", expression);

        let normalized: String = result.input().iter().collect();
        let sentence = m.search(LOREM).hit_sentence();
        let core = sentence.trim_start_matches("… ").trim_end_matches(" …");
        assert!(
            normalized.contains(core),
            "snippet {:?} not found for {}",
            core,
            expression
        );
    }
}

#[test]
fn test_snippet_on_short_input_has_no_ellipses() {
    let mut m = Matcher::new("short").unwrap();
    let sentence = m.search("short text").hit_sentence();
    assert!(!sentence.contains('…'));
    assert!(sentence.contains("short"));
}

// ============ Query Lifecycle ============

#[test]
fn test_compiled_query_is_reusable() {
    let mut m = Matcher::new("dolor").unwrap();

    for _ in 0..3 {
        assert!(m.search(LOREM).has_match());
        assert!(!m.search("nothing relevant").has_match());
    }
}

#[test]
fn test_hits_do_not_accumulate_across_scans() {
    let mut m = Matcher::new("echo").unwrap();
    let first = m.search("echo echo echo").matches().len();
    let second = m.search("echo").matches().len();
    assert_eq!(first, 3);
    assert_eq!(second, 1);
}

#[test]
fn test_match_equals_normalized_match() {
    // matching pre-normalized text gives the same verdict
    let mut m = Matcher::new("Ångström").unwrap();
    let raw = "the Ångström unit";
    let normalized: String = {
        let mut probe = Matcher::new("unit").unwrap();
        probe.search(raw).input().iter().collect()
    };
    assert!(m.is_match(raw));
    assert!(m.is_match(&normalized));
}

#[test]
fn test_empty_document() {
    let mut m = Matcher::new("anything").unwrap();
    assert!(!m.is_match(""));
    assert!(!m.search("").has_match());
}

#[test]
fn test_control_characters_separate_words() {
    let mut m = Matcher::new("\"two words\"").unwrap();
    assert!(m.is_match("two\twords"));
    assert!(m.is_match("two\nwords"));
}
