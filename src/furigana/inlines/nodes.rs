//! Inline AST nodes produced by the ruby annotation rules.
//!
//! These nodes are intentionally lightweight: a flat sequence of plain text
//! runs and ruby elements is all the splicing host needs, and the fixed shape
//! of a ruby element is enforced by construction rather than validation.

use std::fmt;

/// Sequence of inline nodes in source order.
pub type InlineContent = Vec<InlineNode>;

/// Inline node variants produced by the scan.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum InlineNode {
    /// Plain text segment, left untouched by every rule.
    Plain(String),
    /// A ruby annotation element spliced in place of matched source text.
    Ruby(RubyAnnotation),
}

impl InlineNode {
    /// Returns the plain text from this node when available.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            InlineNode::Plain(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the ruby annotation when this node is one.
    pub fn as_ruby(&self) -> Option<&RubyAnnotation> {
        match self {
            InlineNode::Ruby(ruby) => Some(ruby),
            _ => None,
        }
    }

    /// Returns `true` when this node is plain text.
    pub fn is_plain(&self) -> bool {
        matches!(self, InlineNode::Plain(_))
    }
}

/// One child of a ruby element, tagged by its role.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum RubyNode {
    /// Base text run (`<rb>`).
    Base(String),
    /// Parenthetical fallback for renderers without ruby layout (`<rp>`).
    Fallback(String),
    /// Phonetic reading (`<rt>`).
    Reading(String),
}

impl RubyNode {
    /// The text value this child owns.
    pub fn text(&self) -> &str {
        match self {
            RubyNode::Base(text) | RubyNode::Fallback(text) | RubyNode::Reading(text) => text,
        }
    }

    /// Element name of this child in the markup output.
    pub fn tag(&self) -> &'static str {
        match self {
            RubyNode::Base(_) => "rb",
            RubyNode::Fallback(_) => "rp",
            RubyNode::Reading(_) => "rt",
        }
    }
}

/// A ruby annotation: base text plus phonetic reading.
///
/// The element always owns exactly four children in this order: base,
/// left fallback parenthesis, reading, right fallback parenthesis. The
/// fallback children carry literal ASCII `(` and `)` no matter which source
/// form produced the match. The only way to obtain one is [`RubyAnnotation::new`],
/// so the shape cannot drift after construction.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RubyAnnotation {
    children: [RubyNode; 4],
}

impl RubyAnnotation {
    /// Build the four-child tree from a base capture and a reading capture.
    /// Both are used verbatim.
    pub fn new(base: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            children: [
                RubyNode::Base(base.into()),
                RubyNode::Fallback("(".to_string()),
                RubyNode::Reading(reading.into()),
                RubyNode::Fallback(")".to_string()),
            ],
        }
    }

    /// The base text (first child).
    pub fn base(&self) -> &str {
        self.children[0].text()
    }

    /// The reading text (third child).
    pub fn reading(&self) -> &str {
        self.children[2].text()
    }

    /// All four children in display order.
    pub fn children(&self) -> &[RubyNode; 4] {
        &self.children
    }
}

impl fmt::Display for RubyAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ruby({}/{})", self.base(), self.reading())
    }
}
