//! Load-time registration of the ruby rules.

use super::inlines::patterns::{BracketRubyProcessor, FullwidthRubyProcessor};
use super::inlines::registry::InlineRegistry;

/// Priority shared by both ruby rules.
///
/// Sits ahead of where a host's generic link and emphasis recognizers run,
/// so the bracket-and-parenthesis shape is claimed as a ruby annotation
/// before anything can read it as a link.
pub const RUBY_PRIORITY: u32 = 175;

/// A syntax extension, as the host's registration interface sees it.
/// Invoked once at load time.
pub trait Extension {
    /// Register this extension's inline rules.
    fn extend(&self, inline_patterns: &mut InlineRegistry);
}

/// The furigana extension: both ruby rules at one fixed priority.
///
/// The two shapes cannot overlap (one requires ASCII brackets, the other a
/// CJK base with fullwidth parentheses), so their relative order carries no
/// meaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuriganaExtension;

impl Extension for FuriganaExtension {
    fn extend(&self, inline_patterns: &mut InlineRegistry) {
        inline_patterns.register(BracketRubyProcessor, "ruby-bracket", RUBY_PRIORITY);
        inline_patterns.register(FullwidthRubyProcessor, "ruby-fullwidth", RUBY_PRIORITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_both_rules_at_shared_priority() {
        let mut registry = InlineRegistry::new();
        FuriganaExtension.extend(&mut registry);

        assert_eq!(registry.len(), 2);
        assert!(registry.has("ruby-bracket"));
        assert!(registry.has("ruby-fullwidth"));
        assert_eq!(
            registry.list_names(),
            vec!["ruby-bracket", "ruby-fullwidth"]
        );
    }

    #[test]
    fn extending_twice_is_idempotent() {
        let mut registry = InlineRegistry::new();
        FuriganaExtension.extend(&mut registry);
        FuriganaExtension.extend(&mut registry);

        assert_eq!(registry.len(), 2);
    }
}
