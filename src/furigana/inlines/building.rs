//! Ruby tree construction from a successful match.

use std::ops::Range;

use super::nodes::RubyAnnotation;
use super::patterns::RubyMatch;

/// Build the fixed-shape ruby tree for one match and report the span the
/// host must replace.
///
/// Invoked only on an already-successful match, so there is nothing left to
/// fail: captures are taken verbatim and the span is returned untouched.
pub fn build_ruby(m: &RubyMatch) -> (RubyAnnotation, Range<usize>) {
    (
        RubyAnnotation::new(m.base.as_str(), m.reading.as_str()),
        m.span.clone(),
    )
}
