//! MCP tool handlers implementation

use std::sync::Arc;

use cadence_core::{models::OwnerId, params as core, CadenceError, Planner};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types are wrapped in a transparent serde container so the
// MCP layer owns the Deserialize/JsonSchema plumbing it needs, while the
// core types stay interface-neutral.

/// Transparent MCP wrapper around a core parameter type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateContentPlan = McpParams<core::CreateContentPlan>;
pub type ListPlans = McpParams<core::ListPlans>;
pub type GeneratePosts = McpParams<core::GeneratePosts>;
pub type ListPosts = McpParams<core::ListPosts>;
pub type UpdatePost = McpParams<core::UpdatePost>;
pub type CreateRubric = McpParams<core::CreateRubric>;
pub type ListRubrics = McpParams<core::ListRubrics>;
pub type SetRubricActive = McpParams<core::SetRubricActive>;
pub type UpdateKnowledge = McpParams<core::UpdateKnowledge>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(output: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        output.to_string(),
    )]))
}

/// Tool implementations, bound to the owner the server was started for.
pub struct McpHandlers {
    planner: Arc<Planner>,
    owner: OwnerId,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>, owner: OwnerId) -> Self {
        Self { planner, owner }
    }

    pub async fn create_content_plan(
        &self,
        Parameters(params): Parameters<CreateContentPlan>,
    ) -> McpResult {
        debug!("create_content_plan: {:?}", params);

        let result = self
            .planner
            .create_plan_result(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create content plan", &e))?;
        text_result(result)
    }

    pub async fn list_content_plans(&self, Parameters(params): Parameters<ListPlans>) -> McpResult {
        debug!("list_content_plans: {:?}", params);

        let summaries = self
            .planner
            .list_plans_summary(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list content plans", &e))?;

        let title = match params.as_ref().status.as_deref() {
            Some(status) => format!("Content plans ({status})"),
            None => "Content plans".to_string(),
        };
        text_result(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_content_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_content_plan: {:?}", params);

        let plan = self
            .planner
            .show_content_plan(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get content plan", &e))?;
        text_result(plan)
    }

    pub async fn generate_posts(&self, Parameters(params): Parameters<GeneratePosts>) -> McpResult {
        debug!("generate_posts: {:?}", params);

        let status = self
            .planner
            .generate_posts_result(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate posts", &e))?;
        text_result(status)
    }

    pub async fn list_posts(&self, Parameters(params): Parameters<ListPosts>) -> McpResult {
        debug!("list_posts: {:?}", params);

        let calendar = self
            .planner
            .post_calendar(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list posts", &e))?;
        text_result(calendar)
    }

    pub async fn show_post(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_post: {:?}", params);

        let id = params.as_ref().id;
        let post = self
            .planner
            .get_post(&self.owner, params.as_ref())
            .await
            .and_then(|post| post.ok_or(CadenceError::PostNotFound { id }))
            .map_err(|e| to_mcp_error("Failed to get post", &e))?;
        text_result(post)
    }

    pub async fn update_post(&self, Parameters(params): Parameters<UpdatePost>) -> McpResult {
        debug!("update_post: {:?}", params);

        let result = self
            .planner
            .update_post_result(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update post", &e))?;
        text_result(result)
    }

    pub async fn list_social_networks(&self) -> McpResult {
        let networks = self
            .planner
            .social_networks()
            .await
            .map_err(|e| to_mcp_error("Failed to list social networks", &e))?;
        text_result(networks)
    }

    pub async fn list_ai_models(&self) -> McpResult {
        text_result(self.planner.ai_model_catalog())
    }

    pub async fn create_rubric(&self, Parameters(params): Parameters<CreateRubric>) -> McpResult {
        debug!("create_rubric: {:?}", params);

        let result = self
            .planner
            .create_rubric_result(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create rubric", &e))?;
        text_result(result)
    }

    pub async fn list_rubrics(&self, Parameters(params): Parameters<ListRubrics>) -> McpResult {
        debug!("list_rubrics: {:?}", params);

        let rubrics = self
            .planner
            .rubrics(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list rubrics", &e))?;
        text_result(rubrics)
    }

    pub async fn set_rubric_active(
        &self,
        Parameters(params): Parameters<SetRubricActive>,
    ) -> McpResult {
        debug!("set_rubric_active: {:?}", params);

        let result = self
            .planner
            .set_rubric_active_result(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update rubric", &e))?;
        text_result(result)
    }

    pub async fn get_knowledge_base(&self) -> McpResult {
        let knowledge = self
            .planner
            .get_or_create_knowledge_base(&self.owner)
            .await
            .map_err(|e| to_mcp_error("Failed to load knowledge base", &e))?;
        text_result(knowledge)
    }

    pub async fn update_brief(&self, Parameters(params): Parameters<UpdateKnowledge>) -> McpResult {
        debug!("update_brief: {:?}", params);

        let result = self
            .planner
            .update_brief_result(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update brief", &e))?;
        text_result(result)
    }

    pub async fn update_communication_styles(
        &self,
        Parameters(params): Parameters<UpdateKnowledge>,
    ) -> McpResult {
        debug!("update_communication_styles: {:?}", params);

        let result = self
            .planner
            .update_styles_result(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update communication styles", &e))?;
        text_result(result)
    }
}
