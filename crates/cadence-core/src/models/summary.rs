//! Content plan summary types.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{AiProvider, ContentPlan, ContentPlanStatus, PlanDuration};

/// Compact view of a content plan used by listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPlanSummary {
    /// Plan ID
    pub id: u64,
    /// First day of the window
    pub start_date: Date,
    /// Last day of the window (inclusive)
    pub end_date: Date,
    /// Window length
    pub duration: PlanDuration,
    /// Posting days per week
    pub posts_per_week: u8,
    /// Plan status
    pub status: ContentPlanStatus,
    /// Provider of the configured model
    pub ai_provider: AiProvider,
    /// Configured model
    pub ai_model: String,
    /// Names of the attached networks, in attachment order
    pub networks: Vec<String>,
    /// Number of attached rubrics
    pub rubrics_count: u32,
    /// Number of stored posts
    pub posts_count: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
}

impl ContentPlanSummary {
    /// Create a summary from a plan and its stored post count.
    pub fn from_plan(plan: &ContentPlan, posts_count: u32) -> Self {
        Self {
            id: plan.id,
            start_date: plan.start_date,
            end_date: plan.window_end(),
            duration: plan.duration,
            posts_per_week: plan.posts_per_week,
            status: plan.status,
            ai_provider: plan.ai_provider,
            ai_model: plan.ai_model.clone(),
            networks: plan
                .social_networks
                .iter()
                .map(|network| network.name.clone())
                .collect(),
            rubrics_count: plan.rubrics.len() as u32,
            posts_count,
            created_at: plan.created_at,
        }
    }
}

/// Result of a successful generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The generated plan
    pub plan_id: u64,
    /// Number of posts stored by this run
    pub posts_count: u32,
}
