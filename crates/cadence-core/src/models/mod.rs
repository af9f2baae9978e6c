//! Data models for content plans, posts and their reference data.
//!
//! This module contains the core domain models of the planner. Display
//! implementations for these models are located in
//! [`crate::display::models`] to keep data structures apart from
//! presentation.
//!
//! # Overview
//!
//! - [`ContentPlan`]: cadence, window and AI configuration, with its attached
//!   [`SocialNetwork`]s and [`Rubric`]s in attachment order
//! - [`Post`]: one scheduled post produced by generation
//! - [`KnowledgeBase`]: per-user brief and communication style
//! - [`PublishDays`] / [`PlanDuration`]: the scheduling cadence
//! - [`OwnerId`]: explicit caller identity
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{ContentPlan, ContentPlanStatus, OwnerId, PlanDuration, PublishDays};
//! use jiff::{civil::date, Timestamp};
//!
//! let plan = ContentPlan {
//!     id: 1,
//!     owner_id: OwnerId::new("user-1").unwrap(),
//!     start_date: date(2024, 3, 1),
//!     duration: PlanDuration::OneMonth,
//!     posts_per_week: 2,
//!     publish_days: PublishDays::from_indices([1, 5]).unwrap(),
//! #   wishes: None,
//! #   ai_provider: Default::default(),
//! #   ai_model: "gpt-5.2".to_string(),
//! #   status: ContentPlanStatus::Draft,
//! #   social_networks: vec![],
//! #   rubrics: vec![],
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//!     // ... other fields
//! };
//! assert_eq!(plan.window_end(), date(2024, 4, 1));
//! ```

pub mod ai;
pub mod content_plan;
pub mod filters;
pub mod identity;
pub mod knowledge;
pub mod network;
pub mod post;
pub mod requests;
pub mod rubric;
pub mod schedule;
pub mod status;
pub mod summary;

#[cfg(test)]
mod tests;

pub use ai::{default_ai_model, find_ai_model, AiModel, AI_MODELS, DEFAULT_AI_MODEL};
pub use content_plan::ContentPlan;
pub use filters::{PlanFilter, PostFilter};
pub use identity::OwnerId;
pub use knowledge::KnowledgeBase;
pub use network::SocialNetwork;
pub use post::Post;
pub use requests::{NewContentPlan, UpdatePostRequest};
pub use rubric::Rubric;
pub use schedule::{weekday_index, PlanDuration, PublishDays};
pub use status::{AiProvider, ContentPlanStatus, PostStatus};
pub use summary::{ContentPlanSummary, GenerationOutcome};
