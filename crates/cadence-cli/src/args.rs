use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    KnowledgeCommands, ModelCommands, NetworkCommands, PlanCommands, PostCommands, RubricCommands,
};

/// Social media content planner
///
/// Cadence turns a content plan (networks, weekly cadence and rotating
/// rubrics) into a calendar of draft posts. It can be used directly from the
/// command line or as an MCP server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true, env = "CADENCE_DATABASE")]
    pub database_file: Option<PathBuf>,

    /// Identifier of the user whose plans, rubrics and posts are accessed
    #[arg(long, global = true, env = "CADENCE_USER")]
    pub user: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage content plans and generate their posts
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Browse and edit generated posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// Manage content rubrics
    #[command(alias = "r")]
    Rubric {
        #[command(subcommand)]
        command: RubricCommands,
    },
    /// Browse the social network catalog
    Network {
        #[command(subcommand)]
        command: NetworkCommands,
    },
    /// Browse the AI model catalog
    Model {
        #[command(subcommand)]
        command: ModelCommands,
    },
    /// Manage the brand brief and communication styles
    #[command(alias = "kb")]
    Knowledge {
        #[command(subcommand)]
        command: KnowledgeCommands,
    },
    /// Start the MCP server
    Serve,
}
