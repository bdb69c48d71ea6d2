//! Scan text with registered rules and splice the matched trees
//!
//! Processors run in registry priority order, one single pass each. A
//! processor only ever sees the plain text runs still present, so a span
//! consumed by an earlier rule is never re-scanned and replacements cannot
//! overlap. Re-running the scan over already-produced output is a no-op as
//! long as no rule matches its own output, which holds for both ruby forms.

use super::nodes::{InlineContent, InlineNode};
use super::patterns::InlineProcessor;
use super::registry::InlineRegistry;

/// Parse inline nodes from a raw string using every registered rule.
pub fn parse_inlines(text: &str, registry: &InlineRegistry) -> InlineContent {
    if text.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![InlineNode::Plain(text.to_string())];
    for processor in registry.iter() {
        nodes = apply_processor(nodes, processor);
    }
    nodes
}

/// Run one processor over the plain runs of the current content.
fn apply_processor(nodes: InlineContent, processor: &dyn InlineProcessor) -> InlineContent {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            InlineNode::Plain(text) => scan_segment(&text, processor, &mut out),
            other => out.push(other),
        }
    }
    out
}

/// Scan one plain run, splicing replacement nodes at each accepted match.
fn scan_segment(text: &str, processor: &dyn InlineProcessor, out: &mut InlineContent) {
    let mut cursor = 0;
    for caps in processor.pattern().captures_iter(text) {
        let full = caps.get(0).unwrap();
        match processor.handle_match(&caps) {
            Some((node, span)) => {
                debug_assert!(
                    full.start() <= span.start && span.end <= full.end(),
                    "replacement span must lie within the match"
                );
                push_plain(out, &text[cursor..span.start]);
                out.push(node);
                cursor = span.end;
            }
            None => {
                // Declined match: the candidate text stays as-is.
                push_plain(out, &text[cursor..full.end()]);
                cursor = full.end();
            }
        }
    }
    push_plain(out, &text[cursor..]);
}

/// Append plain text, merging into a trailing plain node when present.
fn push_plain(out: &mut InlineContent, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(InlineNode::Plain(existing)) = out.last_mut() {
        existing.push_str(text);
    } else {
        out.push(InlineNode::Plain(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furigana::extension::{Extension, FuriganaExtension};
    use crate::furigana::inlines::nodes::RubyAnnotation;
    use regex::{Captures, Regex};
    use std::ops::Range;

    fn default_registry() -> InlineRegistry {
        let mut registry = InlineRegistry::new();
        FuriganaExtension.extend(&mut registry);
        registry
    }

    #[test]
    fn empty_input_yields_no_nodes() {
        let nodes = parse_inlines("", &default_registry());
        assert!(nodes.is_empty());
    }

    #[test]
    fn text_without_matches_stays_one_plain_node() {
        let nodes = parse_inlines("ただのテキスト", &default_registry());
        assert_eq!(
            nodes,
            vec![InlineNode::Plain("ただのテキスト".to_string())]
        );
    }

    #[test]
    fn match_splits_surrounding_text() {
        let nodes = parse_inlines("で本（ほん）を", &default_registry());
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], InlineNode::Plain("で".to_string()));
        assert_eq!(nodes[1], InlineNode::Ruby(RubyAnnotation::new("本", "ほん")));
        assert_eq!(nodes[2], InlineNode::Plain("を".to_string()));
    }

    #[test]
    fn adjacent_matches_produce_adjacent_rubies() {
        let nodes = parse_inlines("図（と）書（しょ）", &default_registry());
        assert_eq!(
            nodes,
            vec![
                InlineNode::Ruby(RubyAnnotation::new("図", "と")),
                InlineNode::Ruby(RubyAnnotation::new("書", "しょ")),
            ]
        );
    }

    #[test]
    fn empty_registry_leaves_text_untouched() {
        let registry = InlineRegistry::new();
        let nodes = parse_inlines("[図](-と)", &registry);
        assert_eq!(nodes, vec![InlineNode::Plain("[図](-と)".to_string())]);
    }

    struct DecliningProcessor(Regex);
    impl InlineProcessor for DecliningProcessor {
        fn pattern(&self) -> &Regex {
            &self.0
        }
        fn handle_match(&self, _caps: &Captures<'_>) -> Option<(InlineNode, Range<usize>)> {
            None
        }
    }

    #[test]
    fn declined_match_is_emitted_verbatim() {
        let mut registry = InlineRegistry::new();
        registry.register(DecliningProcessor(Regex::new("b+").unwrap()), "decline", 10);

        let nodes = parse_inlines("abba", &registry);
        assert_eq!(nodes, vec![InlineNode::Plain("abba".to_string())]);
    }
}
