//! Status and provider enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle of a content plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum ContentPlanStatus {
    /// Plan is configured but has no posts yet
    #[default]
    Draft,

    /// Posts are being distributed and stored
    Generating,

    /// Posts were generated and stored
    Completed,

    /// The last generation attempt failed; nothing was stored
    Failed,
}

impl FromStr for ContentPlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ContentPlanStatus::Draft),
            "generating" => Ok(ContentPlanStatus::Generating),
            "completed" => Ok(ContentPlanStatus::Completed),
            "failed" => Ok(ContentPlanStatus::Failed),
            _ => Err(format!("Invalid content plan status: {s}")),
        }
    }
}

impl ContentPlanStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentPlanStatus::Draft => "draft",
            ContentPlanStatus::Generating => "generating",
            ContentPlanStatus::Completed => "completed",
            ContentPlanStatus::Failed => "failed",
        }
    }

    /// Whether a generation run may start from this status.
    ///
    /// Draft and failed plans can always be generated. A completed plan only
    /// when its previous batch is being replaced. A plan that is currently
    /// generating never can.
    pub fn accepts_generation(&self, replace: bool) -> bool {
        match self {
            ContentPlanStatus::Draft | ContentPlanStatus::Failed => true,
            ContentPlanStatus::Completed => replace,
            ContentPlanStatus::Generating => false,
        }
    }
}

/// Editorial status of a single post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum PostStatus {
    /// Freshly generated placeholder
    #[default]
    Draft,

    /// Waiting for review
    Review,

    /// Approved for publishing
    Approved,

    /// Already published
    Published,
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PostStatus::Draft),
            "review" => Ok(PostStatus::Review),
            "approved" => Ok(PostStatus::Approved),
            "published" => Ok(PostStatus::Published),
            _ => Err(format!("Invalid post status: {s}")),
        }
    }
}

impl PostStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Review => "review",
            PostStatus::Approved => "approved",
            PostStatus::Published => "published",
        }
    }

    /// Status with an icon, used by calendar listings.
    ///
    /// ```rust
    /// use cadence_core::models::PostStatus;
    ///
    /// assert_eq!(PostStatus::Draft.with_icon(), "○ Draft");
    /// assert_eq!(PostStatus::Published.with_icon(), "✓ Published");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PostStatus::Draft => "○ Draft",
            PostStatus::Review => "◐ Review",
            PostStatus::Approved => "➤ Approved",
            PostStatus::Published => "✓ Published",
        }
    }
}

/// Text-generation provider a plan is configured for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum AiProvider {
    #[default]
    OpenAi,
    Anthropic,
}

impl FromStr for AiProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(AiProvider::OpenAi),
            "anthropic" => Ok(AiProvider::Anthropic),
            _ => Err(format!("Invalid AI provider: {s}")),
        }
    }
}

impl AiProvider {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
        }
    }
}
