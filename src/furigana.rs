//! Main module for the furigana extension
//!
//!     The extension is two inline recognition rules feeding one tree shape. The
//!     bracket form `[X](-Y)` takes any single base character and a free-form
//!     reading; the fullwidth form `X（Y）` takes a kanji base with a hiragana
//!     reading, the way a Japanese IME produces it. Both rewrite to the same
//!     four-child ruby element, with ASCII parentheses kept as fallback display
//!     for renderers that strip ruby markup.
//!
//!     The surrounding plumbing is the minimal host contract the rules need: a
//!     priority-ordered inline pattern registry, a single-pass scan that splices
//!     matched trees into the content, and an output format registry.

pub mod extension;
pub mod formats;
pub mod inlines;
pub mod processor;
pub mod testing;

pub use extension::{Extension, FuriganaExtension, RUBY_PRIORITY};
pub use formats::{FormatError, FormatRegistry, Formatter};
pub use inlines::{
    parse_inlines, InlineContent, InlineNode, InlineProcessor, InlineRegistry, RubyAnnotation,
    RubyMatch, RubyNode,
};
pub use processor::MarkupProcessor;
