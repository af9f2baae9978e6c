//! Per-owner knowledge base storage.

use jiff::Timestamp;
use rusqlite::{params, Row};

use super::utils::{id_column, parse_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{KnowledgeBase, OwnerId},
};

const SELECT_KNOWLEDGE_SQL: &str = "SELECT id, owner_id, brief_text, communication_styles, created_at, updated_at FROM knowledge_bases WHERE owner_id = ?1";
const INSERT_KNOWLEDGE_SQL: &str = "INSERT INTO knowledge_bases (owner_id, created_at, updated_at) VALUES (?1, ?2, ?2) ON CONFLICT(owner_id) DO NOTHING";
const UPSERT_BRIEF_SQL: &str = "INSERT INTO knowledge_bases (owner_id, brief_text, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)
     ON CONFLICT(owner_id) DO UPDATE SET brief_text = excluded.brief_text, updated_at = excluded.updated_at";
const UPSERT_STYLES_SQL: &str = "INSERT INTO knowledge_bases (owner_id, communication_styles, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)
     ON CONFLICT(owner_id) DO UPDATE SET communication_styles = excluded.communication_styles, updated_at = excluded.updated_at";

impl super::Database {
    fn build_knowledge_from_row(row: &Row) -> rusqlite::Result<KnowledgeBase> {
        Ok(KnowledgeBase {
            id: id_column(row, 0)?,
            owner_id: parse_column(row, 1)?,
            brief_text: row.get(2)?,
            communication_styles: row.get(3)?,
            created_at: timestamp_column(row, 4)?,
            updated_at: timestamp_column(row, 5)?,
        })
    }

    /// Returns the owner's knowledge base, creating an empty one on first
    /// access.
    pub fn get_or_create_knowledge_base(&mut self, owner: &OwnerId) -> Result<KnowledgeBase> {
        self.connection
            .execute(
                INSERT_KNOWLEDGE_SQL,
                params![owner.as_str(), Timestamp::now().to_string()],
            )
            .db_context("Failed to create knowledge base")?;

        self.fetch_knowledge_base(owner)
    }

    /// Replaces the brand brief. `None` clears it.
    pub fn update_brief_text(
        &mut self,
        owner: &OwnerId,
        text: Option<&str>,
    ) -> Result<KnowledgeBase> {
        self.connection
            .execute(
                UPSERT_BRIEF_SQL,
                params![owner.as_str(), text, Timestamp::now().to_string()],
            )
            .db_context("Failed to update brief text")?;

        self.fetch_knowledge_base(owner)
    }

    /// Replaces the communication style notes. `None` clears them.
    pub fn update_communication_styles(
        &mut self,
        owner: &OwnerId,
        text: Option<&str>,
    ) -> Result<KnowledgeBase> {
        self.connection
            .execute(
                UPSERT_STYLES_SQL,
                params![owner.as_str(), text, Timestamp::now().to_string()],
            )
            .db_context("Failed to update communication styles")?;

        self.fetch_knowledge_base(owner)
    }

    fn fetch_knowledge_base(&self, owner: &OwnerId) -> Result<KnowledgeBase> {
        self.connection
            .query_row(
                SELECT_KNOWLEDGE_SQL,
                params![owner.as_str()],
                Self::build_knowledge_from_row,
            )
            .db_context("Failed to query knowledge base")
    }
}
