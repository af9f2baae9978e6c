//! Knowledge base model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::OwnerId;

/// Per-user brand brief and communication style that inform generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBase {
    pub id: u64,

    pub owner_id: OwnerId,

    /// Brand brief
    pub brief_text: Option<String>,

    /// Tone-of-voice and communication style notes
    pub communication_styles: Option<String>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}
