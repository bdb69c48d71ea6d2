//! Output format implementations for spliced inline content
//!
//! Two formats ship by default: `markup` emits the ruby tag structure the
//! document consumer renders, `json` serializes the node sequence for
//! tooling. Both sit behind the pluggable [`Formatter`] trait and
//! [`FormatRegistry`].

pub mod json;
pub mod markup;
pub mod registry;

pub use json::JsonFormatter;
pub use markup::{to_markup, MarkupFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
