//! Content plan model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{
    AiProvider, ContentPlanStatus, OwnerId, PlanDuration, PublishDays, Rubric, SocialNetwork,
};

/// A user's configuration for a batch of scheduled social posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentPlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// User that owns the plan
    pub owner_id: OwnerId,

    /// First day of the scheduling window
    pub start_date: Date,

    /// Length of the scheduling window
    #[serde(default)]
    pub duration: PlanDuration,

    /// Number of posting days per week (1-7)
    pub posts_per_week: u8,

    /// Weekdays on which posts are scheduled (0 = Sunday)
    pub publish_days: PublishDays,

    /// Free-form topic wishes used in placeholder content
    pub wishes: Option<String>,

    /// Text-generation provider
    pub ai_provider: AiProvider,

    /// Model identifier within the provider
    pub ai_model: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: ContentPlanStatus,

    /// Attached social networks, in attachment order
    #[serde(default)]
    pub social_networks: Vec<SocialNetwork>,

    /// Attached rubrics, in attachment order
    #[serde(default)]
    pub rubrics: Vec<Rubric>,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl ContentPlan {
    /// Last day (inclusive) of the plan's scheduling window.
    pub fn window_end(&self) -> Date {
        self.duration.window_end(self.start_date)
    }

    /// The wishes text as entered, or `None` when it is missing or blank.
    pub fn wishes_text(&self) -> Option<&str> {
        self.wishes
            .as_deref()
            .filter(|wishes| !wishes.trim().is_empty())
    }
}
