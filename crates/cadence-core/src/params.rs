//! Parameter structures for planner operations
//!
//! This module contains shared parameter structures used by every interface
//! (CLI, MCP) without framework-specific derives. Interfaces add their own
//! derives on wrapper types and convert into these structures:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Textual fields (dates, statuses, providers) stay as strings here and are
//! parsed by the validated request types in [`crate::models`], so every
//! interface reports the same [`crate::CadenceError::InvalidInput`] errors.
//!
//! JSON schema generation for MCP tools is enabled by the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{requests::parse_field, ContentPlanStatus, PlanFilter, PostFilter},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a content plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateContentPlan {
    /// First day of the plan, as YYYY-MM-DD
    pub start_date: String,
    /// Window length: 'two_weeks', 'one_month' (default), 'two_months' or
    /// 'three_months'
    #[serde(default)]
    pub duration: Option<String>,
    /// Number of posting days per week (1-7)
    pub posts_per_week: u8,
    /// Weekday indices to publish on, 0 = Sunday .. 6 = Saturday. Must contain
    /// exactly `posts_per_week` distinct days
    pub publish_days: Vec<u8>,
    /// Optional topic wishes for the generated posts
    #[serde(default)]
    pub wishes: Option<String>,
    /// Text-generation provider: 'openai' (default) or 'anthropic'
    #[serde(default)]
    pub ai_provider: Option<String>,
    /// Model id within the provider; defaults to the provider's default model
    #[serde(default)]
    pub ai_model: Option<String>,
    /// Social network IDs, in the order posts should rotate through them
    pub social_network_ids: Vec<u64>,
    /// Rubric IDs, in the order they should rotate across publish dates
    pub rubric_ids: Vec<u64>,
}

/// Parameters for listing content plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Only plans with this status ('draft', 'generating', 'completed',
    /// 'failed')
    #[serde(default)]
    pub status: Option<String>,
}

impl ListPlans {
    /// Parse the listing parameters into a filter.
    pub fn filter(&self) -> Result<PlanFilter> {
        Ok(PlanFilter {
            status: self
                .status
                .as_deref()
                .map(|raw| parse_field::<ContentPlanStatus>("status", raw))
                .transpose()?,
        })
    }
}

/// Parameters for generating the posts of a content plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePosts {
    /// Content plan ID
    pub id: u64,
    /// Replace the posts of an already completed plan
    #[serde(default)]
    pub replace: bool,
}

/// Parameters for listing the posts of a content plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPosts {
    /// Content plan ID
    pub plan_id: u64,
    /// Only posts for this social network
    #[serde(default)]
    pub social_network_id: Option<u64>,
    /// Only posts with this status ('draft', 'review', 'approved',
    /// 'published')
    #[serde(default)]
    pub status: Option<String>,
    /// Only posts on or after this day (YYYY-MM-DD)
    #[serde(default)]
    pub from: Option<String>,
    /// Only posts on or before this day (YYYY-MM-DD)
    #[serde(default)]
    pub to: Option<String>,
}

impl ListPosts {
    /// Parse the listing parameters into a filter.
    ///
    /// ```rust
    /// use cadence_core::{models::PostStatus, params::ListPosts};
    ///
    /// let params = ListPosts {
    ///     plan_id: 1,
    ///     status: Some("review".to_string()),
    ///     from: Some("2024-03-10".to_string()),
    ///     ..Default::default()
    /// };
    /// let filter = params.filter().unwrap();
    /// assert_eq!(filter.status, Some(PostStatus::Review));
    /// assert!(filter.to.is_none());
    /// ```
    pub fn filter(&self) -> Result<PostFilter> {
        Ok(PostFilter {
            social_network_id: self.social_network_id,
            status: self
                .status
                .as_deref()
                .map(|raw| parse_field("status", raw))
                .transpose()?,
            from: self
                .from
                .as_deref()
                .map(|raw| parse_field("from", raw))
                .transpose()?,
            to: self
                .to
                .as_deref()
                .map(|raw| parse_field("to", raw))
                .transpose()?,
        })
    }
}

/// Parameters for editing a generated post.
///
/// Only provided fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdatePost {
    /// Post ID to update (required)
    pub id: u64,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New body text
    #[serde(default)]
    pub content: Option<String>,
    /// New space-separated hashtags
    #[serde(default)]
    pub hashtags: Option<String>,
    /// Time of day as HH:MM; an empty string clears it
    #[serde(default)]
    pub publish_time: Option<String>,
    /// New status ('draft', 'review', 'approved', 'published')
    #[serde(default)]
    pub status: Option<String>,
}

/// Parameters for creating a rubric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateRubric {
    /// Rubric name (required)
    pub name: String,
    /// Optional description of what the rubric covers
    #[serde(default)]
    pub description: Option<String>,
    /// Target number of posts per month (default 4)
    #[serde(default)]
    pub posts_per_month: Option<u32>,
}

/// Parameters for listing rubrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRubrics {
    /// Include deactivated rubrics
    #[serde(default)]
    pub include_inactive: bool,
}

/// Parameters for activating or deactivating a rubric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetRubricActive {
    /// Rubric ID
    pub id: u64,
    /// Whether the rubric is active
    pub active: bool,
}

/// Parameters for replacing one text field of the knowledge base.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateKnowledge {
    /// New text; omit or leave blank to clear the field
    #[serde(default)]
    pub text: Option<String>,
}

impl UpdateKnowledge {
    /// The text to store, with blank input treated as a clear.
    pub fn normalized(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{error::CadenceError, models::PostStatus};

    #[test]
    fn test_list_plans_filter() {
        let params = ListPlans {
            status: Some("completed".to_string()),
        };
        assert_eq!(params.filter().unwrap().status, Some(ContentPlanStatus::Completed));

        let params = ListPlans {
            status: Some("done".to_string()),
        };
        assert!(matches!(
            params.filter(),
            Err(CadenceError::InvalidInput { field, .. }) if field == "status"
        ));
    }

    #[test]
    fn test_list_posts_filter() {
        let params = ListPosts {
            plan_id: 3,
            social_network_id: Some(2),
            status: Some("published".to_string()),
            from: Some("2024-03-01".to_string()),
            to: Some("2024-03-31".to_string()),
        };

        let filter = params.filter().unwrap();
        assert_eq!(filter.social_network_id, Some(2));
        assert_eq!(filter.status, Some(PostStatus::Published));
        assert_eq!(filter.from, Some(date(2024, 3, 1)));
        assert_eq!(filter.to, Some(date(2024, 3, 31)));
    }

    #[test]
    fn test_list_posts_filter_rejects_bad_date() {
        let params = ListPosts {
            plan_id: 3,
            to: Some("March".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.filter(),
            Err(CadenceError::InvalidInput { field, .. }) if field == "to"
        ));
    }

    #[test]
    fn test_update_knowledge_normalizes_blank() {
        let params = UpdateKnowledge {
            text: Some("  Дружелюбный тон  ".to_string()),
        };
        assert_eq!(params.normalized(), Some("Дружелюбный тон"));

        let params = UpdateKnowledge {
            text: Some("   ".to_string()),
        };
        assert_eq!(params.normalized(), None);
    }

    #[test]
    fn test_create_plan_deserializes_with_defaults() {
        let params: CreateContentPlan = serde_json::from_str(
            r#"{"start_date":"2024-03-01","posts_per_week":1,"publish_days":[3],
                "social_network_ids":[1],"rubric_ids":[2]}"#,
        )
        .unwrap();

        assert!(params.duration.is_none());
        assert!(params.ai_model.is_none());
        assert_eq!(params.publish_days, vec![3]);
    }
}
