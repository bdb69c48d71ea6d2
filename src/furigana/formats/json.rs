//! JSON serialization of inline content, for tooling and debugging.

use super::registry::{FormatError, Formatter};
use crate::furigana::inlines::nodes::InlineContent;

/// Serializes the node sequence with serde.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, content: &InlineContent) -> Result<String, FormatError> {
        serde_json::to_string(content)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "JSON representation of the inline node sequence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furigana::inlines::nodes::{InlineNode, RubyAnnotation};
    use serde_json::Value;

    #[test]
    fn serializes_plain_nodes() {
        let content = vec![InlineNode::Plain("で".to_string())];
        let json = JsonFormatter.serialize(&content).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["Plain"], "で");
    }

    #[test]
    fn serializes_ruby_children_in_order() {
        let content = vec![InlineNode::Ruby(RubyAnnotation::new("図", "と"))];
        let json = JsonFormatter.serialize(&content).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let children = &value[0]["Ruby"]["children"];
        assert_eq!(children[0]["Base"], "図");
        assert_eq!(children[1]["Fallback"], "(");
        assert_eq!(children[2]["Reading"], "と");
        assert_eq!(children[3]["Fallback"], ")");
    }
}
