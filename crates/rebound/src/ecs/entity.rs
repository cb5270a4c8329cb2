//! Entity ids.
//!
//! An entity has no record of its own. It is only the key that ties the
//! components of different kinds together.

use std::borrow::Borrow;
use std::fmt;

/// String identifier of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&EntityId> for EntityId {
    fn from(id: &EntityId) -> Self {
        id.clone()
    }
}

// Lets `HashMap<EntityId, _>` be queried with a plain `&str`.
impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn display_is_the_raw_id() {
        assert_eq!(EntityId::new("1").to_string(), "1");
    }

    #[test]
    fn lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(EntityId::from("paddle"), 7usize);
        assert_eq!(map.get("paddle"), Some(&7));
    }
}
