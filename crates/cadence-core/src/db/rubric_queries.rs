//! Rubric CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::utils::{id_column, parse_column, timestamp_column};
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{OwnerId, Rubric},
};

const RUBRIC_COLUMNS: &str =
    "id, owner_id, name, description, posts_per_month, sort_order, is_active, created_at";
const NEXT_RUBRIC_ORDER_SQL: &str =
    "SELECT COALESCE(MAX(sort_order), -1) + 1 FROM rubrics WHERE owner_id = ?1";
const INSERT_RUBRIC_SQL: &str = "INSERT INTO rubrics (owner_id, name, description, posts_per_month, sort_order, is_active, created_at) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)";
const UPDATE_RUBRIC_ACTIVE_SQL: &str =
    "UPDATE rubrics SET is_active = ?1 WHERE id = ?2 AND owner_id = ?3";
const SELECT_PLAN_RUBRICS_SQL: &str = "SELECT r.id, r.owner_id, r.name, r.description, r.posts_per_month, r.sort_order, r.is_active, r.created_at
     FROM content_plan_rubrics cpr
     JOIN rubrics r ON r.id = cpr.rubric_id
     WHERE cpr.content_plan_id = ?1
     ORDER BY cpr.position";

impl super::Database {
    fn build_rubric_from_row(row: &Row) -> rusqlite::Result<Rubric> {
        Ok(Rubric {
            id: id_column(row, 0)?,
            owner_id: parse_column(row, 1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            posts_per_month: row.get(4)?,
            sort_order: row.get(5)?,
            is_active: row.get(6)?,
            created_at: timestamp_column(row, 7)?,
        })
    }

    /// Creates a rubric at the end of the owner's rubric list.
    pub fn create_rubric(
        &mut self,
        owner: &OwnerId,
        name: &str,
        description: Option<&str>,
        posts_per_month: u32,
    ) -> Result<Rubric> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sort_order: u32 = tx
            .query_row(NEXT_RUBRIC_ORDER_SQL, params![owner.as_str()], |row| {
                row.get(0)
            })
            .db_context("Failed to get next rubric order")?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_RUBRIC_SQL,
            params![
                owner.as_str(),
                name,
                description,
                posts_per_month,
                sort_order,
                now.to_string()
            ],
        )
        .db_context("Failed to insert rubric")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Rubric {
            id,
            owner_id: owner.clone(),
            name: name.to_string(),
            description: description.map(String::from),
            posts_per_month,
            sort_order,
            is_active: true,
            created_at: now,
        })
    }

    /// Retrieves one of the owner's rubrics.
    pub fn get_rubric(&self, owner: &OwnerId, id: u64) -> Result<Option<Rubric>> {
        Self::find_rubric(&self.connection, owner, id)
    }

    /// Lists the owner's rubrics in sort order.
    pub fn list_rubrics(&self, owner: &OwnerId, include_inactive: bool) -> Result<Vec<Rubric>> {
        let query = if include_inactive {
            format!("SELECT {RUBRIC_COLUMNS} FROM rubrics WHERE owner_id = ?1 ORDER BY sort_order, id")
        } else {
            format!("SELECT {RUBRIC_COLUMNS} FROM rubrics WHERE owner_id = ?1 AND is_active = 1 ORDER BY sort_order, id")
        };

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let rubrics = stmt
            .query_map(params![owner.as_str()], Self::build_rubric_from_row)
            .db_context("Failed to query rubrics")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch rubrics")?;

        Ok(rubrics)
    }

    /// Activates or deactivates one of the owner's rubrics.
    pub fn set_rubric_active(&mut self, owner: &OwnerId, id: u64, active: bool) -> Result<Rubric> {
        let rows = self
            .connection
            .execute(
                UPDATE_RUBRIC_ACTIVE_SQL,
                params![active, id as i64, owner.as_str()],
            )
            .db_context("Failed to update rubric")?;

        if rows == 0 {
            return Err(CadenceError::RubricNotFound { id });
        }

        self.get_rubric(owner, id)?
            .ok_or(CadenceError::RubricNotFound { id })
    }

    pub(crate) fn find_rubric(
        conn: &Connection,
        owner: &OwnerId,
        id: u64,
    ) -> Result<Option<Rubric>> {
        let query = format!("SELECT {RUBRIC_COLUMNS} FROM rubrics WHERE id = ?1 AND owner_id = ?2");
        conn.query_row(
            &query,
            params![id as i64, owner.as_str()],
            Self::build_rubric_from_row,
        )
        .optional()
        .db_context("Failed to query rubric")
    }

    /// Resolves the owner's active rubric ids in the order given.
    pub(crate) fn resolve_rubrics(
        conn: &Connection,
        owner: &OwnerId,
        ids: &[u64],
    ) -> Result<Vec<Rubric>> {
        ids.iter()
            .map(|&id| {
                let rubric =
                    Self::find_rubric(conn, owner, id)?.ok_or(CadenceError::RubricNotFound { id })?;
                if !rubric.is_active {
                    return Err(CadenceError::invalid_input("rubric_ids")
                        .with_reason(format!("rubric {id} is inactive")));
                }
                Ok(rubric)
            })
            .collect()
    }

    /// Rubrics attached to a plan, in attachment order.
    pub(crate) fn plan_rubrics(conn: &Connection, plan_id: u64) -> Result<Vec<Rubric>> {
        let mut stmt = conn
            .prepare(SELECT_PLAN_RUBRICS_SQL)
            .db_context("Failed to prepare query")?;

        let rubrics = stmt
            .query_map(params![plan_id as i64], Self::build_rubric_from_row)
            .db_context("Failed to query plan rubrics")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch plan rubrics")?;

        Ok(rubrics)
    }
}
