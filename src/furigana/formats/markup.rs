//! Ruby markup serialization
//!
//! A ruby annotation serializes to
//! `<ruby><rb>BASE</rb><rp>(</rp><rt>READING</rt><rp>)</rp></ruby>` with no
//! attributes and no whitespace between tags. Plain runs are emitted
//! verbatim; escaping belongs to the embedding host's serializer.

use std::fmt::Write;

use super::registry::{FormatError, Formatter};
use crate::furigana::inlines::nodes::{InlineContent, InlineNode};

/// Serialize inline content to ruby markup.
pub fn to_markup(content: &InlineContent) -> String {
    let mut out = String::new();
    for node in content {
        match node {
            InlineNode::Plain(text) => out.push_str(text),
            InlineNode::Ruby(ruby) => {
                out.push_str("<ruby>");
                for child in ruby.children() {
                    let tag = child.tag();
                    // write! to a String cannot fail
                    let _ = write!(out, "<{tag}>{}</{tag}>", child.text());
                }
                out.push_str("</ruby>");
            }
        }
    }
    out
}

/// The default output format.
pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
    fn name(&self) -> &str {
        "markup"
    }

    fn serialize(&self, content: &InlineContent) -> Result<String, FormatError> {
        Ok(to_markup(content))
    }

    fn description(&self) -> &str {
        "Ruby annotation markup (ruby/rb/rp/rt tags)"
    }
}
