//! Atomic post generation for a content plan.
//!
//! Generation runs in a single `BEGIN IMMEDIATE` transaction, which takes the
//! SQLite write lock before the plan is read. A concurrent call waits for the
//! busy timeout and then sees the committed status of the first call, so the
//! status guard cannot be raced and a plan never ends up with two batches.

use jiff::Timestamp;
use log::{debug, info, warn};
use rusqlite::{params, Connection, TransactionBehavior};

use crate::{
    distribution,
    error::{CadenceError, DatabaseResultExt, Result},
    models::{ContentPlan, ContentPlanStatus, GenerationOutcome, OwnerId, PostStatus},
};

const DELETE_PLAN_POSTS_SQL: &str = "DELETE FROM posts WHERE content_plan_id = ?1";
const INSERT_POST_SQL: &str = "INSERT INTO posts (content_plan_id, owner_id, social_network_id, rubric_id, title, content, hashtags, publish_date, status, sort_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)";

impl super::Database {
    /// Distributes and stores the posts of one of the owner's plans.
    ///
    /// Draft and failed plans are always accepted. A completed plan is only
    /// accepted with `replace`, in which case its previous posts are removed
    /// in the same transaction. Any existing posts are cleared before the new
    /// batch is inserted.
    ///
    /// # Errors
    ///
    /// * [`CadenceError::PlanNotFound`] if the plan is missing or not owned by
    ///   `owner`
    /// * [`CadenceError::GenerationConflict`] if the plan's status refuses
    ///   generation
    /// * [`CadenceError::GenerationFailure`] if anything fails after the
    ///   guard passed. Nothing is persisted and the plan is marked `failed`.
    pub fn generate_posts(
        &mut self,
        owner: &OwnerId,
        id: u64,
        replace: bool,
    ) -> Result<GenerationOutcome> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin generation transaction")?;

        let plan = Self::load_plan(&tx, owner, id)?.ok_or(CadenceError::PlanNotFound { id })?;

        if !plan.status.accepts_generation(replace) {
            return Err(CadenceError::GenerationConflict {
                id,
                status: plan.status,
            });
        }

        let stored = Self::store_generation(&tx, &plan).and_then(|count| {
            tx.commit()
                .db_context("Failed to commit generation")
                .map(|()| count)
        });

        match stored {
            Ok(posts_count) => {
                info!("Generated {posts_count} posts for content plan {id}");
                Ok(GenerationOutcome {
                    plan_id: id,
                    posts_count,
                })
            }
            Err(e) => {
                warn!("Generation of content plan {id} rolled back: {e}");
                if let Err(mark_err) =
                    Self::write_plan_status(&self.connection, id, ContentPlanStatus::Failed)
                {
                    warn!("Failed to mark content plan {id} as failed: {mark_err}");
                }
                Err(CadenceError::generation_failure(id, e))
            }
        }
    }

    fn store_generation(conn: &Connection, plan: &ContentPlan) -> Result<u32> {
        Self::write_plan_status(conn, plan.id, ContentPlanStatus::Generating)?;

        let placements = distribution::distribute(plan);
        debug!(
            "Distributed {} placements for content plan {} ({} to {})",
            placements.len(),
            plan.id,
            plan.start_date,
            plan.window_end()
        );

        let removed = conn
            .execute(DELETE_PLAN_POSTS_SQL, params![plan.id as i64])
            .db_context("Failed to remove previous posts")?;
        if removed > 0 {
            debug!("Removed {removed} previous posts of content plan {}", plan.id);
        }

        let mut stmt = conn
            .prepare(INSERT_POST_SQL)
            .db_context("Failed to prepare post insert")?;
        let now = Timestamp::now().to_string();

        for placement in &placements {
            stmt.execute(params![
                plan.id as i64,
                plan.owner_id.as_str(),
                placement.social_network_id as i64,
                placement.rubric_id.map(|id| id as i64),
                placement.title,
                placement.content,
                placement.hashtags,
                placement.publish_date.to_string(),
                PostStatus::Draft.as_str(),
                placement.sort_order,
                now,
            ])
            .db_context("Failed to insert post")?;
        }

        Self::write_plan_status(conn, plan.id, ContentPlanStatus::Completed)?;

        Ok(placements.len() as u32)
    }
}
