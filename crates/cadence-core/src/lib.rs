//! Core library for the Cadence social-media content planner.
//!
//! Users configure a content plan (social networks, weekly cadence, rotating
//! rubrics and an AI model) and the planner generates a calendar of draft
//! posts, assigning every post a publish date, a network and a rubric.
//!
//! # Layers
//!
//! - [`distribution`]: the pure scheduling engine that turns a plan into
//!   ordered post placements
//! - [`db`]: SQLite persistence, including the atomic generation unit
//! - [`planner`]: the async API used by every interface, with explicit
//!   caller identity ([`models::OwnerId`])
//! - [`display`]: markdown formatting of models and operation results
//! - [`params`]: interface-neutral operation parameters
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cadence_core::{
//!     models::OwnerId,
//!     params::{CreateContentPlan, CreateRubric, GeneratePosts, ListPosts},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("cadence.db"))
//!     .build()
//!     .await?;
//! let owner = OwnerId::new("user-1")?;
//!
//! let rubric = planner
//!     .create_rubric(&owner, &CreateRubric {
//!         name: "Кейсы".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let plan = planner
//!     .create_content_plan(&owner, &CreateContentPlan {
//!         start_date: "2024-03-01".to_string(),
//!         posts_per_week: 2,
//!         publish_days: vec![1, 5],
//!         social_network_ids: vec![1],
//!         rubric_ids: vec![rubric.id],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! planner
//!     .generate_posts(&owner, &GeneratePosts { id: plan.id, replace: false })
//!     .await?;
//!
//! let calendar = planner
//!     .post_calendar(&owner, &ListPosts { plan_id: plan.id, ..Default::default() })
//!     .await?;
//! println!("{calendar}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod distribution;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    AiModels, CreateResult, LocalDateTime, OperationStatus, PlanSummaries, PostCalendar, Rubrics,
    SocialNetworks, UpdateResult,
};
pub use distribution::{distribute, PostPlacement, PublishCalendar};
pub use error::{CadenceError, Result};
pub use models::{
    ContentPlan, ContentPlanStatus, ContentPlanSummary, GenerationOutcome, KnowledgeBase,
    OwnerId, Post, PostStatus, Rubric, SocialNetwork,
};
pub use params::{
    CreateContentPlan, CreateRubric, GeneratePosts, Id, ListPlans, ListPosts, ListRubrics,
    SetRubricActive, UpdateKnowledge, UpdatePost,
};
pub use planner::{Planner, PlannerBuilder};
