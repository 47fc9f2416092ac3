use crate::error::{FloragenError, Result};
use crate::genetics::definition::GenomeDefinition;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Process-scoped lookup from organism kind to genome definition
///
/// Constructed once at session start and handed to every caller; entries
/// live until the process exits. Many simulation threads may hit the
/// registry in the same tick, so first-time creation goes through
/// `register_or_create_with`, which resolves the check-then-insert race
/// under a single write lock: both racers get the same definition instead
/// of two silently diverging maps.
pub struct GenomeRegistry {
    definitions: RwLock<HashMap<String, Arc<GenomeDefinition>>>,
}

impl GenomeRegistry {
    pub fn new() -> Self {
        Self {
            definitions: RwLock::new(HashMap::new()),
        }
    }

    /// Read-only lookup, no side effect
    pub fn get_definition(&self, kind: &str) -> Option<Arc<GenomeDefinition>> {
        let definitions = self.definitions.read().unwrap();
        definitions.get(kind).cloned()
    }

    /// One-time registration; repeating a kind is an error
    pub fn register_definition(&self, kind: &str, definition: Arc<GenomeDefinition>) -> Result<()> {
        let mut definitions = self.definitions.write().unwrap();
        if definitions.contains_key(kind) {
            return Err(FloragenError::AlreadyRegistered(kind.to_string()));
        }
        definitions.insert(kind.to_string(), definition);
        Ok(())
    }

    /// Atomic insert-if-absent: returns the existing definition or builds
    /// one with `create` while holding the write lock
    pub fn register_or_create_with<F>(&self, kind: &str, create: F) -> Result<Arc<GenomeDefinition>>
    where
        F: FnOnce() -> Result<Arc<GenomeDefinition>>,
    {
        // Fast path for the common already-registered case.
        if let Some(existing) = self.get_definition(kind) {
            return Ok(existing);
        }

        let mut definitions = self.definitions.write().unwrap();
        if let Some(existing) = definitions.get(kind) {
            return Ok(Arc::clone(existing));
        }
        let definition = create()?;
        definitions.insert(kind.to_string(), Arc::clone(&definition));
        Ok(definition)
    }

    pub fn registered_kinds(&self) -> Vec<String> {
        let definitions = self.definitions.read().unwrap();
        definitions.keys().cloned().collect()
    }
}

impl Default for GenomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
