//! Social network reference data queries.

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::utils::id_column;
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::SocialNetwork,
};

const SELECT_NETWORKS_SQL: &str = "SELECT id, slug, name, color FROM social_networks ORDER BY id";
const SELECT_NETWORK_SQL: &str = "SELECT id, slug, name, color FROM social_networks WHERE id = ?1";
const SELECT_PLAN_NETWORKS_SQL: &str = "SELECT n.id, n.slug, n.name, n.color
     FROM content_plan_networks cpn
     JOIN social_networks n ON n.id = cpn.social_network_id
     WHERE cpn.content_plan_id = ?1
     ORDER BY cpn.position";

impl super::Database {
    fn build_network_from_row(row: &Row) -> rusqlite::Result<SocialNetwork> {
        Ok(SocialNetwork {
            id: id_column(row, 0)?,
            slug: row.get(1)?,
            name: row.get(2)?,
            color: row.get(3)?,
        })
    }

    /// Lists every social network in ascending id order.
    pub fn list_social_networks(&self) -> Result<Vec<SocialNetwork>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_NETWORKS_SQL)
            .db_context("Failed to prepare query")?;

        let networks = stmt
            .query_map([], Self::build_network_from_row)
            .db_context("Failed to query social networks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch social networks")?;

        Ok(networks)
    }

    /// Resolves network ids in the order given, failing on the first unknown
    /// id.
    pub(crate) fn resolve_networks(conn: &Connection, ids: &[u64]) -> Result<Vec<SocialNetwork>> {
        let mut stmt = conn
            .prepare(SELECT_NETWORK_SQL)
            .db_context("Failed to prepare query")?;

        ids.iter()
            .map(|&id| {
                stmt.query_row(params![id as i64], Self::build_network_from_row)
                    .optional()
                    .db_context("Failed to query social network")?
                    .ok_or(CadenceError::NetworkNotFound { id })
            })
            .collect()
    }

    /// Networks attached to a plan, in attachment order.
    pub(crate) fn plan_networks(conn: &Connection, plan_id: u64) -> Result<Vec<SocialNetwork>> {
        let mut stmt = conn
            .prepare(SELECT_PLAN_NETWORKS_SQL)
            .db_context("Failed to prepare query")?;

        let networks = stmt
            .query_map(params![plan_id as i64], Self::build_network_from_row)
            .db_context("Failed to query plan networks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch plan networks")?;

        Ok(networks)
    }
}
