//! Unique identifier types for the elevator simulator
//!
//! Passenger identifiers are UUID-backed so that door transit bookkeeping
//! and reports can reference passengers without borrowing them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassengerId(pub Uuid);

impl PassengerId {
    /// Create a new random passenger ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PassengerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PAX_{}", self.0.simple())
    }
}

impl Serialize for PassengerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("PAX_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for PassengerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("PAX_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(PassengerId(uuid))
        } else {
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(PassengerId(uuid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_id_uniqueness() {
        assert_ne!(PassengerId::new(), PassengerId::new());
    }

    #[test]
    fn test_passenger_id_display() {
        let id = PassengerId::new();
        assert!(id.to_string().starts_with("PAX_"));
    }

    #[test]
    fn test_passenger_id_serde_roundtrip() {
        let id = PassengerId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.contains("PAX_"));
        let back: PassengerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_passenger_id_deserialize_raw_uuid() {
        let uuid = Uuid::new_v4();
        let json = format!("\"{}\"", uuid);
        let id: PassengerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id.0, uuid);
    }
}
