//! Filter types for querying content plans and posts.

use jiff::civil::Date;

use super::{ContentPlanStatus, PostStatus};

/// Filter options for listing content plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Only plans with this status
    pub status: Option<ContentPlanStatus>,
}

/// Filter options for listing the posts of a plan.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Only posts for this network
    pub social_network_id: Option<u64>,

    /// Only posts with this status
    pub status: Option<PostStatus>,

    /// Only posts scheduled on or after this day
    pub from: Option<Date>,

    /// Only posts scheduled on or before this day
    pub to: Option<Date>,
}

impl PostFilter {
    /// Whether any criterion is set.
    pub fn is_empty(&self) -> bool {
        self.social_network_id.is_none()
            && self.status.is_none()
            && self.from.is_none()
            && self.to.is_none()
    }
}
