use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as a string (used as `<option>` values and keys)
    fn as_string(&self) -> String;

    /// Parse the id back from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid u32: {}", e))
    }
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s.trim()).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_round_trip_tolerates_whitespace() {
        assert_eq!(<u32 as AggregateId>::from_string(" 42 "), Ok(42));
        assert!(<u32 as AggregateId>::from_string("forty-two").is_err());
    }

    #[test]
    fn test_invalid_uuid() {
        let err = <uuid::Uuid as AggregateId>::from_string("not-a-uuid").unwrap_err();
        assert!(err.starts_with("Invalid UUID"));
    }
}
