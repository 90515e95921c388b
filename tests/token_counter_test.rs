//! Token estimation properties

use kodegen_tools_markdown_mirror::markdown_converter::{
    HeuristicTokenCounter, TokenCounter, count_tokens,
};
use proptest::prelude::*;

#[test]
fn test_prose_estimate() {
    assert_eq!(count_tokens("Hello world this is a test"), 8);
    assert_eq!(count_tokens(""), 0);
    assert_eq!(count_tokens("   \n\t  "), 0);
}

#[test]
fn test_code_costs_more_than_prose() {
    let prose = "let x = compute(1, 2);";
    let fenced = format!("```\n{prose}\n```");
    assert!(count_tokens(&fenced) > count_tokens(prose));
}

#[test]
fn test_heuristic_counter_matches_function() {
    let text = "Some words\n\n```\ncode here\n```";
    assert_eq!(HeuristicTokenCounter.count(text), count_tokens(text));
}

#[test]
fn test_closure_counter() {
    let by_chars = |text: &str| text.chars().count();
    assert_eq!(by_chars.count("abcd"), 4);
}

proptest! {
    #[test]
    fn prop_estimate_at_least_word_count(text in "[a-z ]{0,200}") {
        let words = text.split_whitespace().count();
        prop_assert!(count_tokens(&text) >= words);
    }

    #[test]
    fn prop_fencing_never_lowers_estimate(text in "[a-z]{1,8}( [a-z]{1,8}){0,20}") {
        let fenced = format!("```\n{text}\n```");
        prop_assert!(count_tokens(&fenced) >= count_tokens(&text));
    }

    #[test]
    fn prop_estimate_is_deterministic(text in "\\PC{0,300}") {
        prop_assert_eq!(count_tokens(&text), count_tokens(&text));
    }
}
