//! Conversion API tying registry, parser, and formats together
//!
//! This is the extension wired into the minimal host it needs: construct a
//! processor, feed it a span of source text, get back the spliced content or
//! its serialized form.
//!
//! ```rust,ignore
//! use furigana::furigana::MarkupProcessor;
//!
//! let processor = MarkupProcessor::new();
//! let markup = processor.convert("私（わたし）");
//! assert_eq!(
//!     markup,
//!     "<ruby><rb>私</rb><rp>(</rp><rt>わたし</rt><rp>)</rp></ruby>"
//! );
//! ```

use super::extension::{Extension, FuriganaExtension};
use super::formats::registry::{FormatError, FormatRegistry};
use super::inlines::nodes::InlineContent;
use super::inlines::parser::parse_inlines;
use super::inlines::registry::InlineRegistry;

/// A processor with the furigana extension and default formats applied.
pub struct MarkupProcessor {
    inline_patterns: InlineRegistry,
    formats: FormatRegistry,
}

impl MarkupProcessor {
    /// Create a processor with the furigana rules registered.
    pub fn new() -> Self {
        let mut inline_patterns = InlineRegistry::new();
        FuriganaExtension.extend(&mut inline_patterns);
        Self {
            inline_patterns,
            formats: FormatRegistry::with_defaults(),
        }
    }

    /// The inline pattern registry, for hosts that register further rules.
    pub fn inline_patterns(&mut self) -> &mut InlineRegistry {
        &mut self.inline_patterns
    }

    /// Parse a span of source text into spliced inline content.
    pub fn parse(&self, text: &str) -> InlineContent {
        parse_inlines(text, &self.inline_patterns)
    }

    /// Convert a span of source text to ruby markup.
    pub fn convert(&self, text: &str) -> String {
        super::formats::markup::to_markup(&self.parse(text))
    }

    /// Convert a span of source text using a named output format.
    pub fn convert_to(&self, text: &str, format: &str) -> Result<String, FormatError> {
        self.formats.serialize(&self.parse(text), format)
    }
}

impl Default for MarkupProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_rewrites_both_forms() {
        let processor = MarkupProcessor::new();
        assert_eq!(
            processor.convert("[図](-と)"),
            "<ruby><rb>図</rb><rp>(</rp><rt>と</rt><rp>)</rp></ruby>"
        );
        assert_eq!(
            processor.convert("図（と）"),
            "<ruby><rb>図</rb><rp>(</rp><rt>と</rt><rp>)</rp></ruby>"
        );
    }

    #[test]
    fn convert_to_unknown_format_errors() {
        let processor = MarkupProcessor::new();
        let result = processor.convert_to("図（と）", "yaml");
        assert!(matches!(
            result,
            Err(FormatError::FormatNotFound(name)) if name == "yaml"
        ));
    }

    #[test]
    fn convert_to_markup_matches_convert() {
        let processor = MarkupProcessor::new();
        let text = "本（ほん）を読（よ）む";
        assert_eq!(
            processor.convert_to(text, "markup").unwrap(),
            processor.convert(text)
        );
    }

    #[test]
    fn registry_is_open_for_host_rules() {
        let mut processor = MarkupProcessor::new();
        assert_eq!(processor.inline_patterns().len(), 2);
    }
}
