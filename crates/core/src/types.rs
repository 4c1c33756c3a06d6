//! Identifier types for career logs
//!
//! This module defines the two keys a stored career log carries:
//! - [`RecordId`]: store-assigned identifier used for reads
//! - [`Token`]: creation-time secret used as the update key

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a stored career log
///
/// Assigned by the store on insert and never changed afterwards. Reads
/// (`get_by_id`, milestone timelines) address records by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random RecordId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use careerlog_core::types::RecordId;
    ///
    /// let id1 = RecordId::new();
    /// let id2 = RecordId::new();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn new() -> Self {
        RecordId(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(RecordId)
    }
}

/// Update key handed to the client when a career log is created
///
/// 128 random bits rendered as 32 lowercase hex digits. Generation does not
/// check for collisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Generate a fresh random token
    ///
    /// # Examples
    ///
    /// ```
    /// use careerlog_core::types::Token;
    ///
    /// let token = Token::generate();
    /// assert_eq!(token.as_str().len(), 32);
    /// assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    /// ```
    pub fn generate() -> Self {
        Token(Uuid::new_v4().simple().to_string())
    }

    /// Borrow the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token(s)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(s.to_string())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_roundtrips_through_display() {
        let id = RecordId::new();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_record_id_rejects_garbage() {
        assert!("not-an-id".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_record_id_serializes_as_plain_string() {
        let id = RecordId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn test_tokens_are_hex_and_distinct() {
        let a = Token::generate();
        let b = Token::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
        assert!(a.as_str().bytes().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
