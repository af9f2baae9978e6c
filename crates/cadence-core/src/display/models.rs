//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the core domain
//! models, kept apart from the model definitions. Output is markdown for the
//! terminal renderer and for MCP responses.

use std::fmt;

use super::datetime::{weekday_names, LocalDateTime};
use crate::models::{
    AiModel, AiProvider, ContentPlan, ContentPlanStatus, ContentPlanSummary, GenerationOutcome,
    KnowledgeBase, OwnerId, Post, PostStatus, Rubric, SocialNetwork,
};

impl fmt::Display for ContentPlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Content plan {}", self.id)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        writeln!(
            f,
            "- Window: {} to {} ({})",
            self.start_date,
            self.window_end(),
            self.duration
        )?;
        writeln!(
            f,
            "- Cadence: {} per week on {}",
            self.posts_per_week,
            weekday_names(&self.publish_days)
        )?;
        writeln!(f, "- Model: {} / {}", self.ai_provider, self.ai_model)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(wishes) = self.wishes_text() {
            writeln!(f)?;
            writeln!(f, "{wishes}")?;
        }

        writeln!(f, "\n## Social networks")?;
        writeln!(f)?;
        for network in &self.social_networks {
            write!(f, "{network}")?;
        }

        if self.rubrics.is_empty() {
            writeln!(f, "\nNo rubrics attached.")?;
        } else {
            writeln!(f, "\n## Rubrics")?;
            writeln!(f)?;
            for rubric in &self.rubrics {
                write!(f, "{rubric}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ContentPlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Content plan {} ({}, {} posts)",
            self.id, self.status, self.posts_count
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Window**: {} to {} ({})",
            self.start_date, self.end_date, self.duration
        )?;
        writeln!(f, "- **Posts per week**: {}", self.posts_per_week)?;
        writeln!(f, "- **Networks**: {}", self.networks.join(", "))?;
        writeln!(f, "- **Rubrics**: {}", self.rubrics_count)?;
        writeln!(f, "- **Model**: {} / {}", self.ai_provider, self.ai_model)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        match self.publish_time {
            Some(time) => writeln!(
                f,
                "- Publish: {} {}",
                self.publish_date,
                time.strftime("%H:%M")
            )?,
            None => writeln!(f, "- Publish: {}", self.publish_date)?,
        }
        writeln!(f, "- Network: {}", self.social_network_id)?;
        if let Some(rubric_id) = self.rubric_id {
            writeln!(f, "- Rubric: {rubric_id}")?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.content)?;
        writeln!(f)?;
        writeln!(f, "{}", self.hashtags)?;
        writeln!(f)
    }
}

impl fmt::Display for Rubric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** (ID: {}, {} posts per month)",
            self.name, self.id, self.posts_per_month
        )?;
        if !self.is_active {
            write!(f, " *inactive*")?;
        }
        writeln!(f)?;

        if let Some(description) = &self.description {
            writeln!(f, "  {description}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} (ID: {}, `{}`)", self.name, self.id, self.slug)
    }
}

impl fmt::Display for AiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- `{}` {} ({}): {}",
            self.id, self.name, self.provider, self.description
        )
    }
}

impl fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Knowledge base")?;
        writeln!(f)?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Brief")?;
        writeln!(f)?;
        writeln!(f, "{}", self.brief_text.as_deref().unwrap_or("*Not set*"))?;

        writeln!(f, "\n## Communication styles")?;
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            self.communication_styles.as_deref().unwrap_or("*Not set*")
        )
    }
}

impl fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} posts for content plan {}.",
            self.posts_count, self.plan_id
        )
    }
}
