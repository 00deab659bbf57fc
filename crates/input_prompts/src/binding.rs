//! Logical action paths and the physical bindings that can trigger them.
//!
//! A [`LogicalActionPath`] names an action independent of hardware
//! (`Player/Jump`), a [`BindingDescriptor`] names one control path that
//! satisfies it (`<Gamepad>/buttonSouth`, `<Keyboard>/w`, `*/{Submit}`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Marker that opens a usage-style wildcard binding (`*/{Submit}`).
pub const USAGE_WILDCARD_PREFIX: &str = "*/{";

/// Case-insensitive identifier of an action, `"<ActionMap>/<ActionName>"`.
///
/// The original spelling is kept for display, equality and hashing use the
/// lowercase key.
#[derive(Clone)]
pub struct LogicalActionPath {
    raw: Arc<str>,
    key: Arc<str>,
}

impl LogicalActionPath {
    /// Create a path from its textual form.
    pub fn new(path: impl Into<String>) -> Self {
        let raw: String = path.into();
        let key = raw.to_lowercase();
        Self {
            raw: Arc::from(raw.into_boxed_str()),
            key: Arc::from(key.into_boxed_str()),
        }
    }

    /// Build the path for an action inside an action map.
    pub fn from_parts(action_map: &str, action: &str) -> Self {
        Self::new(format!("{action_map}/{action}"))
    }

    /// The spelling the path was created with.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The normalized lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for LogicalActionPath {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for LogicalActionPath {}

impl Hash for LogicalActionPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl From<&str> for LogicalActionPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LogicalActionPath {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for LogicalActionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicalActionPath({})", self.raw)
    }
}

impl fmt::Display for LogicalActionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for LogicalActionPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for LogicalActionPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(LogicalActionPath::new(value))
    }
}

/// One physical binding candidate for a logical action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingDescriptor {
    /// Effective control path, e.g. `<Gamepad>/buttonSouth` or `*/{Submit}`.
    pub binding_path: String,
    /// This binding is the parent of a composite (e.g. a 2D vector).
    #[serde(default)]
    pub is_composite: bool,
    /// This binding is one part of a composite.
    #[serde(default)]
    pub is_part_of_composite: bool,
}

impl BindingDescriptor {
    /// Create a plain (non-composite) binding.
    pub fn new(binding_path: impl Into<String>) -> Self {
        Self {
            binding_path: binding_path.into(),
            is_composite: false,
            is_part_of_composite: false,
        }
    }

    /// Create the parent binding of a composite.
    pub fn composite(binding_path: impl Into<String>) -> Self {
        Self {
            is_composite: true,
            ..Self::new(binding_path)
        }
    }

    /// Create one part of a composite.
    pub fn composite_part(binding_path: impl Into<String>) -> Self {
        Self {
            is_part_of_composite: true,
            ..Self::new(binding_path)
        }
    }

    /// Returns `true` for usage-style wildcard bindings such as `*/{Submit}`.
    pub fn is_usage_wildcard(&self) -> bool {
        self.binding_path.contains(USAGE_WILDCARD_PREFIX)
    }

    /// The usage named by a wildcard binding, if this is one.
    pub fn usage(&self) -> Option<&str> {
        parse_usage(&self.binding_path)
    }

    /// Case-insensitive comparison against another control path.
    pub fn matches_path(&self, binding_path: &str) -> bool {
        eq_ignore_case(&self.binding_path, binding_path)
    }
}

/// Compare two identifiers the way catalog keys are normalized (Unicode lowercase).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Extract the usage token from a wildcard path: `*/{Submit}` → `Submit`.
///
/// Returns `None` when the path is not a wildcard or the brace is never closed.
pub fn parse_usage(binding_path: &str) -> Option<&str> {
    let start = binding_path.find(USAGE_WILDCARD_PREFIX)? + USAGE_WILDCARD_PREFIX.len();
    let rest = &binding_path[start..];
    let end = rest.find('}')?;
    Some(&rest[..end])
}
