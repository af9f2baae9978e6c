//! Post queries and editing.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::utils::{id_column, parse_column, parse_optional_column, timestamp_column};
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{OwnerId, Post, PostFilter, UpdatePostRequest},
};

const POST_COLUMNS: &str = "id, content_plan_id, owner_id, social_network_id, rubric_id, title, content, hashtags, publish_date, publish_time, status, sort_order, created_at, updated_at";
const UPDATE_POST_SQL: &str = "UPDATE posts SET title = ?1, content = ?2, hashtags = ?3, publish_time = ?4, status = ?5, updated_at = ?6 WHERE id = ?7 AND owner_id = ?8";

impl super::Database {
    fn build_post_from_row(row: &Row) -> rusqlite::Result<Post> {
        Ok(Post {
            id: id_column(row, 0)?,
            content_plan_id: id_column(row, 1)?,
            owner_id: parse_column(row, 2)?,
            social_network_id: id_column(row, 3)?,
            rubric_id: row.get::<_, Option<i64>>(4)?.map(|id| id as u64),
            title: row.get(5)?,
            content: row.get(6)?,
            hashtags: row.get(7)?,
            publish_date: parse_column(row, 8)?,
            publish_time: parse_optional_column(row, 9)?,
            status: parse_column(row, 10)?,
            sort_order: row.get(11)?,
            created_at: timestamp_column(row, 12)?,
            updated_at: timestamp_column(row, 13)?,
        })
    }

    /// Lists the posts of one of the owner's plans, ordered by publish date
    /// and then by generation order.
    pub fn list_posts(
        &self,
        owner: &OwnerId,
        plan_id: u64,
        filter: Option<&PostFilter>,
    ) -> Result<Vec<Post>> {
        if Self::load_plan(&self.connection, owner, plan_id)?.is_none() {
            return Err(CadenceError::PlanNotFound { id: plan_id });
        }

        let mut query =
            format!("SELECT {POST_COLUMNS} FROM posts WHERE content_plan_id = ? AND owner_id = ?");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![
            Box::new(plan_id as i64),
            Box::new(owner.as_str().to_string()),
        ];

        if let Some(f) = filter {
            if let Some(network_id) = f.social_network_id {
                query.push_str(" AND social_network_id = ?");
                params_vec.push(Box::new(network_id as i64));
            }

            if let Some(status) = f.status {
                query.push_str(" AND status = ?");
                params_vec.push(Box::new(status.as_str()));
            }

            // ISO dates compare correctly as text
            if let Some(from) = f.from {
                query.push_str(" AND publish_date >= ?");
                params_vec.push(Box::new(from.to_string()));
            }

            if let Some(to) = f.to {
                query.push_str(" AND publish_date <= ?");
                params_vec.push(Box::new(to.to_string()));
            }
        }

        query.push_str(" ORDER BY publish_date, sort_order");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let posts = stmt
            .query_map(&params_refs[..], Self::build_post_from_row)
            .db_context("Failed to query posts")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch posts")?;

        Ok(posts)
    }

    /// Retrieves one of the owner's posts.
    pub fn get_post(&self, owner: &OwnerId, id: u64) -> Result<Option<Post>> {
        Self::find_post(&self.connection, owner, id)
    }

    /// Applies a partial update to one of the owner's posts and returns the
    /// updated post.
    pub fn update_post(
        &mut self,
        owner: &OwnerId,
        id: u64,
        request: UpdatePostRequest,
    ) -> Result<Post> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut post =
            Self::find_post(&tx, owner, id)?.ok_or(CadenceError::PostNotFound { id })?;

        if request.is_empty() {
            return Ok(post);
        }

        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(content) = request.content {
            post.content = content;
        }
        if let Some(hashtags) = request.hashtags {
            post.hashtags = hashtags;
        }
        if let Some(publish_time) = request.publish_time {
            post.publish_time = publish_time;
        }
        if let Some(status) = request.status {
            post.status = status;
        }
        post.updated_at = Timestamp::now();

        tx.execute(
            UPDATE_POST_SQL,
            params![
                post.title,
                post.content,
                post.hashtags,
                post.publish_time.map(|time| time.to_string()),
                post.status.as_str(),
                post.updated_at.to_string(),
                id as i64,
                owner.as_str(),
            ],
        )
        .db_context("Failed to update post")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(post)
    }

    fn find_post(conn: &Connection, owner: &OwnerId, id: u64) -> Result<Option<Post>> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1 AND owner_id = ?2");
        conn.query_row(
            &query,
            params![id as i64, owner.as_str()],
            Self::build_post_from_row,
        )
        .optional()
        .db_context("Failed to query post")
    }
}
