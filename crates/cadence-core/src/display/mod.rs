//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation results are wrapped in newtypes that add
//! headings and empty-collection handling. All output is markdown, rendered
//! in the terminal by the CLI and returned verbatim by the MCP server.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Wrappers &    │    │   Formatted     │
//! │  (Plan, Post)   │───▶│  Result Types   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers (PlanSummaries, PostCalendar, ...)
//! - [`results`]: operation results (CreateResult, UpdateResult)
//! - [`status`]: confirmation messages (OperationStatus)
//! - [`datetime`]: timestamp and weekday formatting
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use cadence_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Rubric 3 deactivated".to_string());
//! assert_eq!(format!("{status}"), "Success: Rubric 3 deactivated\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{AiModels, PlanSummaries, PostCalendar, Rubrics, SocialNetworks};
pub use datetime::{weekday_names, LocalDateTime};
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
