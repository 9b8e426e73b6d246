//! CollectionRegistry for mapping collection names to CollectionModel implementations.

use crate::domain::model::{AnimalsModel, CollectionModel, PeopleModel, TweetsModel};
use std::collections::HashMap;
use std::sync::Arc;

/// A registry that maps collection names to their CollectionModel implementations.
pub struct CollectionRegistry {
    models: HashMap<String, Arc<dyn CollectionModel>>,
}

impl CollectionRegistry {
    /// Creates a new empty CollectionRegistry.
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// The collections served out of the box: people, tweets and animals.
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register(PeopleModel);
        reg.register(TweetsModel);
        reg.register(AnimalsModel);
        reg
    }

    /// Registers a model under its own collection name, replacing any previous entry.
    pub fn register<M: CollectionModel + 'static>(&mut self, model: M) {
        self.models
            .insert(model.collection_name().to_string(), Arc::new(model));
    }

    /// Retrieves a model by collection name.
    /// Returns None if the collection is not registered.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CollectionModel>> {
        self.models.get(name).cloned()
    }

    /// Returns all registered collection names, sorted.
    pub fn list_collections(&self) -> Vec<String> {
        let mut names: Vec<String> = self.models.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn models(&self) -> impl Iterator<Item = &Arc<dyn CollectionModel>> {
        self.models.values()
    }
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_the_three_collections() {
        let reg = CollectionRegistry::with_defaults();
        assert_eq!(reg.list_collections(), vec!["animals", "people", "tweets"]);
        assert_eq!(reg.get("people").unwrap().collection_name(), "people");
        assert!(reg.get("planets").is_none());
    }

    #[test]
    fn empty_registry_serves_nothing() {
        let reg = CollectionRegistry::new();
        assert!(reg.list_collections().is_empty());
        assert_eq!(reg.models().count(), 0);
    }
}
