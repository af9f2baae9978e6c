//! Planner operations that return display wrappers.
//!
//! The CLI and MCP server share these so both interfaces format results
//! identically.

use super::Planner;
use crate::{
    display::{
        AiModels, CreateResult, OperationStatus, PlanSummaries, PostCalendar, Rubrics,
        SocialNetworks, UpdateResult,
    },
    error::{CadenceError, Result},
    models::{ContentPlan, KnowledgeBase, OwnerId, Post, Rubric},
    params::{
        CreateContentPlan, CreateRubric, GeneratePosts, Id, ListPlans, ListPosts, ListRubrics,
        SetRubricActive, UpdateKnowledge, UpdatePost,
    },
};

impl Planner {
    /// Handle listing plans as summaries with post counts.
    pub async fn list_plans_summary(
        &self,
        owner: &OwnerId,
        params: &ListPlans,
    ) -> Result<PlanSummaries> {
        Ok(PlanSummaries(self.list_content_plans(owner, params).await?))
    }

    /// Handle showing a plan, failing when it is not visible to `owner`.
    pub async fn show_content_plan(&self, owner: &OwnerId, params: &Id) -> Result<ContentPlan> {
        self.get_content_plan(owner, params)
            .await?
            .ok_or(CadenceError::PlanNotFound { id: params.id })
    }

    /// Handle creating a plan.
    pub async fn create_plan_result(
        &self,
        owner: &OwnerId,
        params: &CreateContentPlan,
    ) -> Result<CreateResult<ContentPlan>> {
        let plan = self.create_content_plan(owner, params).await?;
        Ok(CreateResult::new(plan))
    }

    /// Handle generation, reporting the stored post count.
    pub async fn generate_posts_result(
        &self,
        owner: &OwnerId,
        params: &GeneratePosts,
    ) -> Result<OperationStatus> {
        let outcome = self.generate_posts(owner, params).await?;
        Ok(OperationStatus::success(format!(
            "Generated {} posts for content plan {}",
            outcome.posts_count, outcome.plan_id
        )))
    }

    /// Handle listing a plan's posts as a calendar with network names.
    pub async fn post_calendar(&self, owner: &OwnerId, params: &ListPosts) -> Result<PostCalendar> {
        let posts = self.list_posts(owner, params).await?;
        let networks = self.list_social_networks().await?;
        Ok(PostCalendar::new(posts).with_networks(&networks))
    }

    /// Handle editing a post, listing which fields changed.
    pub async fn update_post_result(
        &self,
        owner: &OwnerId,
        params: &UpdatePost,
    ) -> Result<UpdateResult<Post>> {
        let post = self.update_post(owner, params).await?;

        let mut changes = Vec::new();
        if params.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if params.content.is_some() {
            changes.push("Updated content".to_string());
        }
        if params.hashtags.is_some() {
            changes.push("Updated hashtags".to_string());
        }
        if params.publish_time.is_some() {
            match post.publish_time {
                Some(time) => {
                    changes.push(format!("Set publish time to {}", time.strftime("%H:%M")))
                }
                None => changes.push("Cleared publish time".to_string()),
            }
        }
        if params.status.is_some() {
            changes.push(format!("Changed status to {}", post.status));
        }

        Ok(UpdateResult::with_changes(post, changes))
    }

    /// Handle listing the social network catalog.
    pub async fn social_networks(&self) -> Result<SocialNetworks> {
        Ok(SocialNetworks(self.list_social_networks().await?))
    }

    /// Handle listing the AI model catalog.
    pub fn ai_model_catalog(&self) -> AiModels {
        AiModels(self.ai_models().to_vec())
    }

    /// Handle creating a rubric.
    pub async fn create_rubric_result(
        &self,
        owner: &OwnerId,
        params: &CreateRubric,
    ) -> Result<CreateResult<Rubric>> {
        Ok(CreateResult::new(self.create_rubric(owner, params).await?))
    }

    /// Handle listing rubrics.
    pub async fn rubrics(&self, owner: &OwnerId, params: &ListRubrics) -> Result<Rubrics> {
        Ok(Rubrics(self.list_rubrics(owner, params).await?))
    }

    /// Handle activating or deactivating a rubric.
    pub async fn set_rubric_active_result(
        &self,
        owner: &OwnerId,
        params: &SetRubricActive,
    ) -> Result<UpdateResult<Rubric>> {
        let rubric = self.set_rubric_active(owner, params).await?;
        let change = if rubric.is_active {
            "Activated rubric"
        } else {
            "Deactivated rubric"
        };
        Ok(UpdateResult::with_changes(rubric, vec![change.to_string()]))
    }

    /// Handle replacing the brand brief.
    pub async fn update_brief_result(
        &self,
        owner: &OwnerId,
        params: &UpdateKnowledge,
    ) -> Result<UpdateResult<KnowledgeBase>> {
        let knowledge = self.update_brief_text(owner, params).await?;
        let change = match params.normalized() {
            Some(_) => "Updated brief",
            None => "Cleared brief",
        };
        Ok(UpdateResult::with_changes(knowledge, vec![change.to_string()]))
    }

    /// Handle replacing the communication style notes.
    pub async fn update_styles_result(
        &self,
        owner: &OwnerId,
        params: &UpdateKnowledge,
    ) -> Result<UpdateResult<KnowledgeBase>> {
        let knowledge = self.update_communication_styles(owner, params).await?;
        let change = match params.normalized() {
            Some(_) => "Updated communication styles",
            None => "Cleared communication styles",
        };
        Ok(UpdateResult::with_changes(knowledge, vec![change.to_string()]))
    }
}
