//! Priority-ordered registry of inline recognition rules
//!
//! The host invokes registered processors in descending priority order and
//! splices the trees they return into its content at the reported spans.
//! Registering under an existing name replaces that entry, keeping the new
//! priority.

use super::patterns::InlineProcessor;

struct RegistryEntry {
    name: String,
    priority: u32,
    processor: Box<dyn InlineProcessor>,
}

/// Registry mapping a rule identifier to (recognizer, priority).
#[derive(Default)]
pub struct InlineRegistry {
    /// Kept sorted by descending priority; ties stay in registration order.
    entries: Vec<RegistryEntry>,
}

impl InlineRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a processor under a name with a numeric priority.
    ///
    /// Higher priorities run earlier in the scan. If a processor with the
    /// same name already exists, it is replaced.
    pub fn register<P: InlineProcessor + 'static>(
        &mut self,
        processor: P,
        name: &str,
        priority: u32,
    ) {
        self.entries.retain(|entry| entry.name != name);
        let position = self
            .entries
            .iter()
            .position(|entry| entry.priority < priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            position,
            RegistryEntry {
                name: name.to_string(),
                priority,
                processor: Box::new(processor),
            },
        );
    }

    /// Get a processor by name.
    pub fn get(&self, name: &str) -> Option<&dyn InlineProcessor> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.processor.as_ref())
    }

    /// Check if a rule is registered under this name.
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Iterate processors in invocation order (descending priority, then
    /// registration order).
    pub fn iter(&self) -> impl Iterator<Item = &dyn InlineProcessor> {
        self.entries.iter().map(|entry| entry.processor.as_ref())
    }

    /// Rule names in invocation order.
    pub fn list_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
