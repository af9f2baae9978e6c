//! Post model definition.

use jiff::{
    civil::{Date, Time},
    Timestamp,
};
use serde::{Deserialize, Serialize};

use super::{OwnerId, PostStatus};

/// A scheduled post produced by content plan generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Unique identifier for the post
    pub id: u64,

    /// ID of the parent content plan
    pub content_plan_id: u64,

    /// User that owns the post
    pub owner_id: OwnerId,

    /// Network the post is scheduled for
    pub social_network_id: u64,

    /// Rubric the post belongs to, if the plan had any
    pub rubric_id: Option<u64>,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Space-separated hashtags
    pub hashtags: String,

    /// Calendar day the post is scheduled for
    pub publish_date: Date,

    /// Optional time of day, set when editing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<Time>,

    /// Editorial status
    pub status: PostStatus,

    /// Position within the generation batch (0-indexed)
    pub sort_order: u32,

    /// Timestamp when the post was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the post was last updated (UTC)
    pub updated_at: Timestamp,
}
