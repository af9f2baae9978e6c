//! Social network reference data.

use serde::{Deserialize, Serialize};

/// A social network posts can be scheduled for.
///
/// Networks are seeded with the schema and never modified at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialNetwork {
    /// Numeric identifier; listing order follows it
    pub id: u64,

    /// Short machine name, used for hashtags (e.g. `telegram`)
    pub slug: String,

    /// Display name
    pub name: String,

    /// Brand color as a hex string
    pub color: String,
}
