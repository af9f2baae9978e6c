//! Reference data operations: social networks, rubrics and AI models.

use log::info;

use super::Planner;
use crate::{
    error::{CadenceError, Result},
    models::{find_ai_model, AiModel, AiProvider, OwnerId, Rubric, SocialNetwork, AI_MODELS},
    params::{CreateRubric, ListRubrics, SetRubricActive},
};

/// Posts per month for rubrics created without an explicit target.
const DEFAULT_POSTS_PER_MONTH: u32 = 4;

impl Planner {
    /// Lists the social networks plans can post to, in ascending id order.
    pub async fn list_social_networks(&self) -> Result<Vec<SocialNetwork>> {
        self.with_database(|db| db.list_social_networks()).await
    }

    /// Creates a rubric at the end of the owner's rubric list.
    ///
    /// # Errors
    ///
    /// `CadenceError::InvalidInput` if the name is blank or the monthly
    /// target is zero.
    pub async fn create_rubric(&self, owner: &OwnerId, params: &CreateRubric) -> Result<Rubric> {
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(CadenceError::invalid_input("name").with_reason("must not be blank"));
        }

        let posts_per_month = params.posts_per_month.unwrap_or(DEFAULT_POSTS_PER_MONTH);
        if posts_per_month == 0 {
            return Err(CadenceError::invalid_input("posts_per_month")
                .with_reason("must be at least 1"));
        }

        let description = params
            .description
            .as_deref()
            .map(str::trim)
            .filter(|description| !description.is_empty())
            .map(String::from);
        let owner = owner.clone();

        let rubric = self
            .with_database(move |db| {
                db.create_rubric(&owner, &name, description.as_deref(), posts_per_month)
            })
            .await?;
        info!("Created rubric {} '{}'", rubric.id, rubric.name);
        Ok(rubric)
    }

    /// Lists the owner's rubrics in sort order.
    pub async fn list_rubrics(&self, owner: &OwnerId, params: &ListRubrics) -> Result<Vec<Rubric>> {
        let owner = owner.clone();
        let include_inactive = params.include_inactive;

        self.with_database(move |db| db.list_rubrics(&owner, include_inactive))
            .await
    }

    /// Activates or deactivates one of the owner's rubrics.
    ///
    /// Deactivation hides the rubric from default listings; plans it is
    /// already attached to keep rotating through it.
    pub async fn set_rubric_active(
        &self,
        owner: &OwnerId,
        params: &SetRubricActive,
    ) -> Result<Rubric> {
        let owner = owner.clone();
        let id = params.id;
        let active = params.active;

        self.with_database(move |db| db.set_rubric_active(&owner, id, active))
            .await
    }

    /// The catalog of selectable text-generation models.
    pub fn ai_models(&self) -> &'static [AiModel] {
        AI_MODELS
    }

    /// Looks up a model of the given provider.
    pub fn find_ai_model(&self, provider: AiProvider, id: &str) -> Option<&'static AiModel> {
        find_ai_model(provider, id)
    }
}
