//! Content plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use super::utils::{id_column, parse_column, timestamp_column};
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{
        ContentPlan, ContentPlanStatus, ContentPlanSummary, NewContentPlan, OwnerId, PlanFilter,
        PublishDays,
    },
};

const PLAN_COLUMNS: &str = "id, owner_id, start_date, duration, posts_per_week, publish_days, wishes, ai_provider, ai_model, status, created_at, updated_at";
const INSERT_PLAN_SQL: &str = "INSERT INTO content_plans (owner_id, start_date, duration, posts_per_week, publish_days, wishes, ai_provider, ai_model, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)";
const INSERT_PLAN_NETWORK_SQL: &str = "INSERT INTO content_plan_networks (content_plan_id, social_network_id, position) VALUES (?1, ?2, ?3)";
const INSERT_PLAN_RUBRIC_SQL: &str =
    "INSERT INTO content_plan_rubrics (content_plan_id, rubric_id, position) VALUES (?1, ?2, ?3)";
const UPDATE_PLAN_STATUS_SQL: &str =
    "UPDATE content_plans SET status = ?1, updated_at = ?2 WHERE id = ?3";
const COUNT_PLAN_POSTS_SQL: &str = "SELECT COUNT(*) FROM posts WHERE content_plan_id = ?1";

impl super::Database {
    fn build_plan_from_row(row: &Row) -> rusqlite::Result<ContentPlan> {
        let publish_days: String = row.get(5)?;
        let publish_days = serde_json::from_str::<PublishDays>(&publish_days)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

        Ok(ContentPlan {
            id: id_column(row, 0)?,
            owner_id: parse_column(row, 1)?,
            start_date: parse_column(row, 2)?,
            duration: parse_column(row, 3)?,
            posts_per_week: row.get(4)?,
            publish_days,
            wishes: row.get(6)?,
            ai_provider: parse_column(row, 7)?,
            ai_model: row.get(8)?,
            status: parse_column(row, 9)?,
            social_networks: Vec::new(),
            rubrics: Vec::new(),
            created_at: timestamp_column(row, 10)?,
            updated_at: timestamp_column(row, 11)?,
        })
    }

    /// Creates a content plan and attaches its networks and rubrics in the
    /// order given.
    ///
    /// Every network must exist and every rubric must belong to `owner`;
    /// otherwise nothing is stored.
    pub fn create_content_plan(
        &mut self,
        owner: &OwnerId,
        new_plan: &NewContentPlan,
    ) -> Result<ContentPlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let social_networks = Self::resolve_networks(&tx, &new_plan.social_network_ids)?;
        let rubrics = Self::resolve_rubrics(&tx, owner, &new_plan.rubric_ids)?;

        let now = Timestamp::now();
        let publish_days = serde_json::to_string(&new_plan.publish_days)?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                owner.as_str(),
                new_plan.start_date.to_string(),
                new_plan.duration.as_str(),
                new_plan.posts_per_week,
                publish_days,
                new_plan.wishes.as_deref(),
                new_plan.ai_provider.as_str(),
                new_plan.ai_model,
                ContentPlanStatus::Draft.as_str(),
                now.to_string(),
            ],
        )
        .db_context("Failed to insert content plan")?;

        let id = tx.last_insert_rowid() as u64;

        for (position, network) in social_networks.iter().enumerate() {
            tx.execute(
                INSERT_PLAN_NETWORK_SQL,
                params![id as i64, network.id as i64, position as i64],
            )
            .db_context("Failed to attach social network")?;
        }

        for (position, rubric) in rubrics.iter().enumerate() {
            tx.execute(
                INSERT_PLAN_RUBRIC_SQL,
                params![id as i64, rubric.id as i64, position as i64],
            )
            .db_context("Failed to attach rubric")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ContentPlan {
            id,
            owner_id: owner.clone(),
            start_date: new_plan.start_date,
            duration: new_plan.duration,
            posts_per_week: new_plan.posts_per_week,
            publish_days: new_plan.publish_days,
            wishes: new_plan.wishes.clone(),
            ai_provider: new_plan.ai_provider,
            ai_model: new_plan.ai_model.clone(),
            status: ContentPlanStatus::Draft,
            social_networks,
            rubrics,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves one of the owner's plans with its attachments.
    pub fn get_content_plan(&self, owner: &OwnerId, id: u64) -> Result<Option<ContentPlan>> {
        Self::load_plan(&self.connection, owner, id)
    }

    /// Lists the owner's plans, newest first, with their stored post counts.
    pub fn list_content_plans(
        &self,
        owner: &OwnerId,
        filter: Option<&PlanFilter>,
    ) -> Result<Vec<ContentPlanSummary>> {
        let mut query = format!("SELECT {PLAN_COLUMNS} FROM content_plans WHERE owner_id = ?1");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(owner.as_str().to_string())];

        if let Some(status) = filter.and_then(|f| f.status) {
            query.push_str(" AND status = ?2");
            params_vec.push(Box::new(status.as_str()));
        }

        // Row ids grow with creation time
        query.push_str(" ORDER BY id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let plans = stmt
            .query_map(&params_refs[..], Self::build_plan_from_row)
            .db_context("Failed to query content plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch content plans")?;

        plans
            .into_iter()
            .map(|mut plan| {
                plan.social_networks = Self::plan_networks(&self.connection, plan.id)?;
                plan.rubrics = Self::plan_rubrics(&self.connection, plan.id)?;
                let posts_count = Self::count_plan_posts(&self.connection, plan.id)?;
                Ok(ContentPlanSummary::from_plan(&plan, posts_count))
            })
            .collect()
    }

    /// Sets a plan's status.
    pub fn set_plan_status(&mut self, id: u64, status: ContentPlanStatus) -> Result<()> {
        Self::write_plan_status(&self.connection, id, status)
    }

    pub(crate) fn load_plan(
        conn: &Connection,
        owner: &OwnerId,
        id: u64,
    ) -> Result<Option<ContentPlan>> {
        let query =
            format!("SELECT {PLAN_COLUMNS} FROM content_plans WHERE id = ?1 AND owner_id = ?2");

        let plan = conn
            .query_row(
                &query,
                params![id as i64, owner.as_str()],
                Self::build_plan_from_row,
            )
            .optional()
            .db_context("Failed to query content plan")?;

        match plan {
            Some(mut plan) => {
                plan.social_networks = Self::plan_networks(conn, plan.id)?;
                plan.rubrics = Self::plan_rubrics(conn, plan.id)?;
                Ok(Some(plan))
            }
            None => Ok(None),
        }
    }

    pub(crate) fn write_plan_status(
        conn: &Connection,
        id: u64,
        status: ContentPlanStatus,
    ) -> Result<()> {
        let rows = conn
            .execute(
                UPDATE_PLAN_STATUS_SQL,
                params![status.as_str(), Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to update content plan status")?;

        if rows == 0 {
            return Err(CadenceError::PlanNotFound { id });
        }
        Ok(())
    }

    pub(crate) fn count_plan_posts(conn: &Connection, plan_id: u64) -> Result<u32> {
        conn.query_row(COUNT_PLAN_POSTS_SQL, params![plan_id as i64], |row| {
            row.get(0)
        })
        .db_context("Failed to count posts")
    }
}
