//! Heuristic token estimation for rendered markdown.
//!
//! The estimate is deliberately tokenizer-agnostic: roughly 1.33 tokens per
//! whitespace-separated word, plus an overhead for fenced code, which
//! tokenizes less efficiently than prose. Callers needing a real tokenizer
//! plug one in through [`TokenCounter`].

use crate::utils::constants::{CODE_BLOCK_OVERHEAD, TOKENS_PER_WORD};
use regex::Regex;
use std::sync::LazyLock;

static FENCED_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```.*?```").expect("BUG: hardcoded fenced code block regex is invalid")
});

/// Anything that can count tokens in a piece of text.
///
/// Implemented for plain closures, so `Arc::new(|text: &str| text.len() / 4)`
/// is a valid counter.
pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;
}

impl<F> TokenCounter for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn count(&self, text: &str) -> usize {
        self(text)
    }
}

/// The default word-based estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTokenCounter;

impl TokenCounter for HeuristicTokenCounter {
    fn count(&self, text: &str) -> usize {
        count_tokens(text)
    }
}

/// Estimate the number of LLM tokens in `text`.
///
/// ```rust
/// # use kodegen_tools_markdown_mirror::markdown_converter::count_tokens;
/// assert_eq!(count_tokens(""), 0);
/// assert_eq!(count_tokens("Hello world this is a test"), 8);
/// ```
#[must_use]
pub fn count_tokens(text: &str) -> usize {
    let word_count = text.split_whitespace().count();

    let code_overhead: f64 = FENCED_CODE_BLOCK
        .find_iter(text)
        .map(|block| {
            let block_words = block.as_str().split_whitespace().count();
            (block_words as f64 * CODE_BLOCK_OVERHEAD).ceil()
        })
        .sum();

    (word_count as f64 * TOKENS_PER_WORD + code_overhead).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prose() {
        assert_eq!(count_tokens("Hello world this is a test"), 8);
    }

    #[test]
    fn test_whitespace_runs_are_single_separators() {
        // 3 words * 1.33 = 3.99
        assert_eq!(count_tokens("word1   word2 \n\t word3"), 4);
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(count_tokens(""), 0);
        assert_eq!(count_tokens(" \n\t "), 0);
    }

    #[test]
    fn test_code_block_overhead() {
        let prose = "let x = 1;";
        let fenced = "```\nlet x = 1;\n```";
        assert!(count_tokens(fenced) > count_tokens(prose));
    }

    #[test]
    fn test_each_code_block_counted() {
        let one = "```\na b c\n```";
        let two = "```\na b c\n```\n\n```\na b c\n```";
        // fences count as words: 5 per block, overhead ceil(1.5) per block
        assert_eq!(count_tokens(one), 9);
        assert_eq!(count_tokens(two), 18);
    }

    #[test]
    fn test_closure_counter() {
        let counter = |_: &str| 999_usize;
        assert_eq!(counter.count("anything"), 999);
        assert_eq!(HeuristicTokenCounter.count("Hello world this is a test"), 8);
    }
}
