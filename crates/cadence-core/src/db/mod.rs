//! Database operations and SQLite management for content plans and posts.
//!
//! This module provides the low-level persistence layer of the planner. It
//! handles SQLite connections, schema management and the query interfaces
//! for each entity:
//!
//! - [`plan_queries`]: content plans and their network/rubric attachments
//! - [`generation`]: the atomic post generation unit
//! - [`post_queries`]: listing and editing generated posts
//! - [`rubric_queries`], [`network_queries`]: reference data
//! - [`knowledge_queries`]: per-user knowledge base

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod generation;
pub mod knowledge_queries;
pub mod migrations;
pub mod network_queries;
pub mod plan_queries;
pub mod post_queries;
pub mod rubric_queries;
pub mod utils;

/// How long a connection waits for another writer before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to configure busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
