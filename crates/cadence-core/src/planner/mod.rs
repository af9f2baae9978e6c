//! High-level async planner API.
//!
//! [`Planner`] is the entry point for every interface. Each operation takes
//! the caller's [`OwnerId`](crate::models::OwnerId) explicitly, validates its
//! parameters, then runs the blocking database work on Tokio's blocking pool
//! with a fresh connection.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display types)│───▶│ (plan_ops, ...) │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: creates [`Planner`] instances
//! - [`plan_ops`]: content plans and post generation
//! - [`post_ops`]: listing and editing generated posts
//! - [`catalog_ops`]: social networks, rubrics and AI models
//! - [`knowledge_ops`]: the per-user knowledge base
//! - [`handlers`]: the same operations returning display wrappers
//!
//! # Examples
//!
//! ```rust,no_run
//! use cadence_core::{
//!     models::OwnerId,
//!     params::{CreateContentPlan, CreateRubric, GeneratePosts},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/cadence.db"))
//!     .build()
//!     .await?;
//! let owner = OwnerId::new("user-1")?;
//!
//! let rubric = planner
//!     .create_rubric(&owner, &CreateRubric {
//!         name: "Новости".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let plan = planner
//!     .create_content_plan(&owner, &CreateContentPlan {
//!         start_date: "2024-03-01".to_string(),
//!         posts_per_week: 2,
//!         publish_days: vec![1, 5],
//!         social_network_ids: vec![1, 3],
//!         rubric_ids: vec![rubric.id],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let outcome = planner
//!     .generate_posts(&owner, &GeneratePosts { id: plan.id, replace: false })
//!     .await?;
//! assert_eq!(outcome.posts_count, 20);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{CadenceError, Result},
};

pub mod builder;
pub mod catalog_ops;
pub mod handlers;
pub mod knowledge_ops;
pub mod plan_ops;
pub mod post_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for content plans, posts and reference data.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database file this planner operates on.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `operation` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| CadenceError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
