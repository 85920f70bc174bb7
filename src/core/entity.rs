//! Game entity system with simple integer IDs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple integer ID for game entities
///
/// Keeps IDs simple and contiguous for human readability. IDs are
/// assigned by the external game engine and are stable for the lifetime
/// of the object they name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    pub fn new(id: u32) -> Self {
        EntityId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ID of one selectable mode of a charm spell
pub type OptionId = EntityId;

/// ID of a player
pub type PlayerId = EntityId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_roundtrip() {
        let id = EntityId::new(7);
        assert_eq!(id.as_u32(), 7);
        assert_eq!(format!("{}", id), "7");
        assert_eq!(id, EntityId::new(7));
        assert_ne!(id, EntityId::new(8));
    }
}
