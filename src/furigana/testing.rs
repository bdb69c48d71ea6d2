//! Shared helpers for tests
//!
//! Integration tests assert against the markup string for exact-output
//! properties and against the node sequence for structural ones; these
//! shortcuts keep both one call away from a default processor.

use super::inlines::nodes::{InlineContent, RubyAnnotation};
use super::processor::MarkupProcessor;

/// Parse with a default processor.
pub fn parse(text: &str) -> InlineContent {
    MarkupProcessor::new().parse(text)
}

/// Convert to markup with a default processor.
pub fn convert(text: &str) -> String {
    MarkupProcessor::new().convert(text)
}

/// Collect the ruby annotations of parsed content, in source order.
pub fn ruby_nodes(content: &InlineContent) -> Vec<&RubyAnnotation> {
    content.iter().filter_map(|node| node.as_ruby()).collect()
}

/// Collect the plain runs of parsed content, in source order.
pub fn plain_runs(content: &InlineContent) -> Vec<&str> {
    content.iter().filter_map(|node| node.as_plain()).collect()
}
