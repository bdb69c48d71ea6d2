//! The two ruby recognition rules
//!
//!     Rules are data: each is a lazily-compiled regex with `base` and `reading`
//!     capture groups, paired with a processor that builds the replacement node.
//!     A near-miss (two base characters in the bracket form, a katakana reading
//!     in the fullwidth form) simply fails to match and the text passes through
//!     unchanged; there is no error path here.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;

use super::building::build_ruby;
use super::nodes::InlineNode;

/// Bracket form: `[X](-Y)`. One base character of any kind, a free-form
/// reading, non-greedy up to the first closing parenthesis.
static BRACKET_RUBY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?P<base>.)\]\(-(?P<reading>.+?)\)").unwrap());

/// Fullwidth form: `X（Y）`. One CJK ideograph followed by a hiragana reading
/// in fullwidth parentheses (U+FF08/U+FF09), as produced by a Japanese IME.
static FULLWIDTH_RUBY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<base>[\x{4E00}-\x{9FAF}])（(?P<reading>[\x{3040}-\x{3096}]+?)）").unwrap()
});

/// One successful recognition event.
///
/// Produced per match and consumed immediately by the tree builder; never
/// retained. The span is the byte range of the full match in the scanned
/// text, which is exactly the range the host replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct RubyMatch {
    pub span: Range<usize>,
    pub base: String,
    pub reading: String,
}

impl RubyMatch {
    /// Extract a match record from the capture groups of either rule.
    fn from_captures(caps: &Captures<'_>) -> Self {
        let full = caps.get(0).unwrap();
        Self {
            span: full.start()..full.end(),
            base: caps.name("base").unwrap().as_str().to_string(),
            reading: caps.name("reading").unwrap().as_str().to_string(),
        }
    }
}

/// An inline recognition rule as the scanning host sees it.
///
/// The host runs [`pattern`](InlineProcessor::pattern) over the plain text
/// runs still present, and for each hit hands the capture groups to
/// [`handle_match`](InlineProcessor::handle_match), which returns the
/// replacement node plus the byte range of text it replaces. Returning `None`
/// declines the match and the candidate text is emitted unchanged.
///
/// Processors hold no mutable state, so one instance can serve any number of
/// documents concurrently.
pub trait InlineProcessor: Send + Sync {
    /// The compiled pattern the host scans with.
    fn pattern(&self) -> &Regex;

    /// Build the replacement for one match. The returned range must lie
    /// within the match itself.
    fn handle_match(&self, caps: &Captures<'_>) -> Option<(InlineNode, Range<usize>)>;
}

/// Processor for the bracket form `[X](-Y)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketRubyProcessor;

impl InlineProcessor for BracketRubyProcessor {
    fn pattern(&self) -> &Regex {
        &BRACKET_RUBY
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<(InlineNode, Range<usize>)> {
        let (ruby, span) = build_ruby(&RubyMatch::from_captures(caps));
        Some((InlineNode::Ruby(ruby), span))
    }
}

/// Processor for the fullwidth form `X（Y）`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullwidthRubyProcessor;

impl InlineProcessor for FullwidthRubyProcessor {
    fn pattern(&self) -> &Regex {
        &FULLWIDTH_RUBY
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<(InlineNode, Range<usize>)> {
        let (ruby, span) = build_ruby(&RubyMatch::from_captures(caps));
        Some((InlineNode::Ruby(ruby), span))
    }
}
