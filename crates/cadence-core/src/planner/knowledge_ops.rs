//! Knowledge base operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::{KnowledgeBase, OwnerId},
    params::UpdateKnowledge,
};

impl Planner {
    /// Returns the owner's knowledge base, creating an empty one on first
    /// access.
    pub async fn get_or_create_knowledge_base(&self, owner: &OwnerId) -> Result<KnowledgeBase> {
        let owner = owner.clone();
        self.with_database(move |db| db.get_or_create_knowledge_base(&owner))
            .await
    }

    /// Replaces the brand brief. Blank text clears it.
    pub async fn update_brief_text(
        &self,
        owner: &OwnerId,
        params: &UpdateKnowledge,
    ) -> Result<KnowledgeBase> {
        let owner = owner.clone();
        let text = params.normalized().map(String::from);

        self.with_database(move |db| db.update_brief_text(&owner, text.as_deref()))
            .await
    }

    /// Replaces the communication style notes. Blank text clears them.
    pub async fn update_communication_styles(
        &self,
        owner: &OwnerId,
        params: &UpdateKnowledge,
    ) -> Result<KnowledgeBase> {
        let owner = owner.clone();
        let text = params.normalized().map(String::from);

        self.with_database(move |db| db.update_communication_styles(&owner, text.as_deref()))
            .await
    }
}
