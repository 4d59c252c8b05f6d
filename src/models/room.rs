//! Room model.
//!
//! Rooms are supplied externally and never mutated. Selection among
//! rooms of the same type follows input list order (first match), which
//! keeps room assignment deterministic.

use serde::{Deserialize, Serialize};

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Room type (e.g., "Standard", "Lab", "Hall").
    pub room_type: String,
}

impl Room {
    /// Creates a room.
    pub fn new(name: impl Into<String>, room_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            room_type: room_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_new() {
        let room = Room::new("Lab-1", "Lab");
        assert_eq!(room.name, "Lab-1");
        assert_eq!(room.room_type, "Lab");
    }
}
