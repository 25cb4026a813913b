//! Unique identifier types for the daily routine simulator
//!
//! Each simulated day carries a UUID-based identifier so that narration and
//! statistics from multi-day runs can be told apart.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one simulated day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayId(pub Uuid);

impl DayId {
    /// Create a new random day ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DAY_{}", self.0.simple())
    }
}

impl Serialize for DayId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DayId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("DAY_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(DayId(uuid))
    }
}
