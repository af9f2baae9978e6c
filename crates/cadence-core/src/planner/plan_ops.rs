//! Content plan operations for the Planner.

use log::{debug, info};

use super::Planner;
use crate::{
    error::Result,
    models::{ContentPlan, ContentPlanSummary, GenerationOutcome, NewContentPlan, OwnerId},
    params::{CreateContentPlan, GeneratePosts, Id, ListPlans},
};

impl Planner {
    /// Validates and stores a new content plan in `draft` status.
    ///
    /// # Errors
    ///
    /// * `CadenceError::InvalidInput` for malformed parameters (see
    ///   [`NewContentPlan`])
    /// * `CadenceError::NetworkNotFound` for an unknown network id
    /// * `CadenceError::RubricNotFound` for a rubric that does not exist or
    ///   belongs to another user
    pub async fn create_content_plan(
        &self,
        owner: &OwnerId,
        params: &CreateContentPlan,
    ) -> Result<ContentPlan> {
        let new_plan = NewContentPlan::try_from(params.clone())?;
        let owner = owner.clone();

        let plan = self
            .with_database(move |db| db.create_content_plan(&owner, &new_plan))
            .await?;
        info!(
            "Created content plan {} with {} networks and {} rubrics",
            plan.id,
            plan.social_networks.len(),
            plan.rubrics.len()
        );
        Ok(plan)
    }

    /// Retrieves one of the owner's plans with its networks and rubrics.
    pub async fn get_content_plan(
        &self,
        owner: &OwnerId,
        params: &Id,
    ) -> Result<Option<ContentPlan>> {
        let owner = owner.clone();
        let id = params.id;

        self.with_database(move |db| db.get_content_plan(&owner, id))
            .await
    }

    /// Lists the owner's plans, newest first, with their post counts.
    pub async fn list_content_plans(
        &self,
        owner: &OwnerId,
        params: &ListPlans,
    ) -> Result<Vec<ContentPlanSummary>> {
        let filter = params.filter()?;
        let owner = owner.clone();

        self.with_database(move |db| db.list_content_plans(&owner, Some(&filter)))
            .await
    }

    /// Distributes the plan's posts over its window and stores them
    /// atomically.
    ///
    /// # Errors
    ///
    /// * `CadenceError::PlanNotFound` if the plan is not visible to `owner`
    /// * `CadenceError::GenerationConflict` if the plan is generating, or is
    ///   completed and `params.replace` is false
    /// * `CadenceError::GenerationFailure` if storing the batch failed; the
    ///   plan is left `failed` and can be retried
    pub async fn generate_posts(
        &self,
        owner: &OwnerId,
        params: &GeneratePosts,
    ) -> Result<GenerationOutcome> {
        let owner = owner.clone();
        let id = params.id;
        let replace = params.replace;

        debug!("Generating posts for content plan {id} (replace: {replace})");
        self.with_database(move |db| db.generate_posts(&owner, id, replace))
            .await
    }
}
