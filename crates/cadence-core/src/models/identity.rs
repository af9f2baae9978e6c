//! Caller identity.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CadenceError, Result};

/// Stable opaque identifier of the user that owns plans, rubrics and posts.
///
/// The planner never looks identity up from ambient state; every operation
/// takes the owner explicitly. Construction fails with
/// [`CadenceError::Unauthorized`] when the identifier is missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Creates an owner id from a non-blank string.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CadenceError::Unauthorized);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Creates an owner id from an optional value, as supplied by a flag or
    /// environment variable.
    pub fn from_optional(value: Option<&str>) -> Result<Self> {
        value.map_or(Err(CadenceError::Unauthorized), Self::new)
    }

    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OwnerId {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
