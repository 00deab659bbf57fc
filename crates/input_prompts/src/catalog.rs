//! Binding catalog: logical action path → physical binding candidates.

use crate::action::ActionAsset;
use crate::binding::{BindingDescriptor, LogicalActionPath};
use indexmap::IndexMap;

/// Table of every binding declared by the loaded action documents.
///
/// Keys are lowercase `"<map>/<action>"` strings. Descriptors keep document
/// enumeration order, which is also the order composites are displayed in.
/// Duplicates across documents are kept as alternatives.
#[derive(Clone, Debug, Default)]
pub struct BindingCatalog {
    bindings: IndexMap<String, Vec<BindingDescriptor>>,
}

impl BindingCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from action-definition documents.
    pub fn build<'a>(sources: impl IntoIterator<Item = &'a ActionAsset>) -> Self {
        let mut catalog = Self::new();
        for asset in sources {
            catalog.add_asset(asset);
        }
        catalog
    }

    /// Append every binding of one document.
    pub fn add_asset(&mut self, asset: &ActionAsset) {
        for map in &asset.maps {
            for binding in &map.bindings {
                let path = map.path_of(binding);
                self.insert(&path, binding.to_descriptor());
            }
        }
    }

    /// Append one descriptor under `path`.
    pub fn insert(&mut self, path: &LogicalActionPath, descriptor: BindingDescriptor) {
        self.bindings
            .entry(path.key().to_string())
            .or_default()
            .push(descriptor);
    }

    /// Descriptors for an action, in enumeration order. Lookup is case-insensitive.
    pub fn get(&self, path: &str) -> Option<&[BindingDescriptor]> {
        self.bindings
            .get(path.to_lowercase().as_str())
            .map(Vec::as_slice)
    }

    /// Returns `true` if the action has at least one binding.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Iterate over normalized action keys.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of distinct actions.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
