//! Registration-time mapping from operation name to descriptor.
//!
//! Descriptors are declared once, when operations are registered, instead of
//! being discovered at call time. An operation with no entry is passed
//! through by the interceptor untouched.

use std::collections::HashMap;

use forum_core::descriptor::OperationDescriptor;

/// Explicit table of interceptable operations.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    descriptors: HashMap<String, OperationDescriptor>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operation's descriptor, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, descriptor: OperationDescriptor) {
        self.descriptors.insert(name.into(), descriptor);
    }

    /// Builder-style registration.
    pub fn with_operation(
        mut self,
        name: impl Into<String>,
        descriptor: OperationDescriptor,
    ) -> Self {
        self.register(name, descriptor);
        self
    }

    /// Looks up the descriptor declared for `name`.
    pub fn descriptor(&self, name: &str) -> Option<&OperationDescriptor> {
        self.descriptors.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::descriptor::FrequencyKind;

    #[test]
    fn test_lookup() {
        let registry = OperationRegistry::new().with_operation(
            "post_article",
            OperationDescriptor::new()
                .with_login()
                .with_frequency(FrequencyKind::PostArticle),
        );

        let descriptor = registry.descriptor("post_article").unwrap();
        assert!(descriptor.check_login);
        assert_eq!(descriptor.frequency, FrequencyKind::PostArticle);
        assert!(registry.descriptor("unknown").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = OperationRegistry::new();
        registry.register("op", OperationDescriptor::new().with_login());
        registry.register("op", OperationDescriptor::new());
        assert!(!registry.descriptor("op").unwrap().check_login);
    }
}
