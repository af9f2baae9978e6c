//! Rubric (content category) model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::OwnerId;

/// A content category rotated through the posts of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rubric {
    /// Unique identifier for the rubric
    pub id: u64,

    /// User that owns the rubric
    pub owner_id: OwnerId,

    /// Rubric name, used in post titles
    pub name: String,

    /// What the rubric is about
    pub description: Option<String>,

    /// Desired number of posts per month
    pub posts_per_month: u32,

    /// Position among the owner's rubrics (0-indexed)
    pub sort_order: u32,

    /// Inactive rubrics are hidden from default listings
    pub is_active: bool,

    /// Timestamp when the rubric was created (UTC)
    pub created_at: Timestamp,
}
