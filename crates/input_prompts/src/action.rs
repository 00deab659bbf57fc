//! Serializable action-definition documents.
//!
//! An [`ActionAsset`] is one document of action maps, each holding the
//! bindings of its actions. The binding catalog is built from a list of these.

use crate::binding::{BindingDescriptor, LogicalActionPath};
use serde::{Deserialize, Serialize};

/// One action-definition document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAsset {
    /// Display name of the document.
    #[serde(default)]
    pub name: String,
    /// Action maps defined by this document.
    #[serde(default)]
    pub maps: Vec<ActionMap>,
}

impl ActionAsset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            maps: Vec::new(),
        }
    }

    /// Append an action map.
    pub fn with_map(mut self, map: ActionMap) -> Self {
        self.maps.push(map);
        self
    }
}

/// A named group of actions (e.g. `Player`, `UI`) and their bindings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMap {
    /// Name of the action map.
    pub name: String,
    /// Bindings of every action in the map, in authoring order.
    #[serde(default)]
    pub bindings: Vec<ActionBinding>,
}

impl ActionMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    /// Append a binding.
    pub fn with_binding(mut self, binding: ActionBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Logical path of a binding inside this map.
    pub fn path_of(&self, binding: &ActionBinding) -> LogicalActionPath {
        LogicalActionPath::from_parts(&self.name, &binding.action)
    }
}

/// One binding of an action as authored in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBinding {
    /// Name of the action this binding triggers.
    pub action: String,
    /// Authored control path.
    pub path: String,
    /// Runtime override replacing `path` (e.g. after a user rebind).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_path: Option<String>,
    #[serde(default)]
    pub is_composite: bool,
    #[serde(default)]
    pub is_part_of_composite: bool,
}

impl ActionBinding {
    /// Plain binding of `action` to `path`.
    pub fn new(action: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Parent binding of a composite, `path` being the composite kind (e.g. `2DVector`).
    pub fn composite(action: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            is_composite: true,
            ..Self::new(action, path)
        }
    }

    /// One part of the preceding composite.
    pub fn part(action: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            is_part_of_composite: true,
            ..Self::new(action, path)
        }
    }

    /// Set a runtime override path.
    pub fn with_override(mut self, path: impl Into<String>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    /// The path actually in effect: the override when present, else the authored path.
    pub fn effective_path(&self) -> &str {
        self.override_path.as_deref().unwrap_or(&self.path)
    }

    /// Convert into the catalog representation using the effective path.
    pub fn to_descriptor(&self) -> BindingDescriptor {
        BindingDescriptor {
            binding_path: self.effective_path().to_string(),
            is_composite: self.is_composite,
            is_part_of_composite: self.is_part_of_composite,
        }
    }
}
