//! MCP server for the content planner.
//!
//! Exposes the planner operations as tools over stdio. The server is started
//! for a single user; every tool call acts on that user's plans, rubrics,
//! posts and knowledge base.

use std::sync::Arc;

use anyhow::Result;
use cadence_core::{models::OwnerId, Planner};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{
    CreateContentPlan, CreateRubric, GeneratePosts, Id, ListPlans, ListPosts, ListRubrics,
    McpHandlers, McpResult, SetRubricActive, UpdateKnowledge, UpdatePost,
};

/// MCP server for the content planner
#[derive(Clone)]
pub struct CadenceMcpServer {
    planner: Arc<Planner>,
    owner: OwnerId,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CadenceMcpServer {
    pub fn new(planner: Planner, owner: OwnerId) -> Self {
        Self {
            planner: Arc::new(planner),
            owner,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.planner.clone(), self.owner.clone())
    }

    #[tool(
        name = "create_content_plan",
        description = "Create a draft content plan. Requires start_date (YYYY-MM-DD), posts_per_week (1-7), publish_days (weekday indices, 0 = Sunday through 6 = Saturday, exactly posts_per_week of them), social_network_ids and rubric_ids, both in rotation order. Optional: duration ('two_weeks', 'one_month' default, 'two_months', 'three_months'), wishes used as the topic of every post, ai_provider ('openai' or 'anthropic') and ai_model. Returns the new plan ID."
    )]
    async fn create_content_plan(&self, params: Parameters<CreateContentPlan>) -> McpResult {
        self.handlers().create_content_plan(params).await
    }

    #[tool(
        name = "list_content_plans",
        description = "List content plans, newest first, with their status, window, networks and post count. Optional status filter: 'draft', 'generating', 'completed' or 'failed'."
    )]
    async fn list_content_plans(&self, params: Parameters<ListPlans>) -> McpResult {
        self.handlers().list_content_plans(params).await
    }

    #[tool(
        name = "show_content_plan",
        description = "Show a content plan's cadence, window, AI model, attached social networks and rubrics."
    )]
    async fn show_content_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_content_plan(params).await
    }

    #[tool(
        name = "generate_posts",
        description = "Generate the posts of a content plan: one post per publish date and attached network, with rubrics rotating across dates. Draft and failed plans can be generated directly. A completed plan requires replace=true, which atomically swaps the old posts for the new batch. Returns the number of posts stored."
    )]
    async fn generate_posts(&self, params: Parameters<GeneratePosts>) -> McpResult {
        self.handlers().generate_posts(params).await
    }

    #[tool(
        name = "list_posts",
        description = "List the posts of a content plan as a calendar grouped by publish date. Optional filters: social_network_id, status ('draft', 'review', 'approved', 'published'), from and to (YYYY-MM-DD, inclusive)."
    )]
    async fn list_posts(&self, params: Parameters<ListPosts>) -> McpResult {
        self.handlers().list_posts(params).await
    }

    #[tool(
        name = "show_post",
        description = "Show a single post with its title, content, hashtags, publish date and status."
    )]
    async fn show_post(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_post(params).await
    }

    #[tool(
        name = "update_post",
        description = "Edit a generated post. Only provided fields change: title, content, hashtags, publish_time (HH:MM, empty string clears it) and status ('draft', 'review', 'approved', 'published')."
    )]
    async fn update_post(&self, params: Parameters<UpdatePost>) -> McpResult {
        self.handlers().update_post(params).await
    }

    #[tool(
        name = "list_social_networks",
        description = "List the supported social networks with the IDs used by create_content_plan."
    )]
    async fn list_social_networks(&self) -> McpResult {
        self.handlers().list_social_networks().await
    }

    #[tool(
        name = "list_ai_models",
        description = "List the AI models that can be configured on a content plan, grouped by provider."
    )]
    async fn list_ai_models(&self) -> McpResult {
        self.handlers().list_ai_models().await
    }

    #[tool(
        name = "create_rubric",
        description = "Create a content rubric (a recurring theme). Requires name; optional description and posts_per_month (default 4)."
    )]
    async fn create_rubric(&self, params: Parameters<CreateRubric>) -> McpResult {
        self.handlers().create_rubric(params).await
    }

    #[tool(
        name = "list_rubrics",
        description = "List rubrics in display order. Set include_inactive=true to also show deactivated rubrics."
    )]
    async fn list_rubrics(&self, params: Parameters<ListRubrics>) -> McpResult {
        self.handlers().list_rubrics(params).await
    }

    #[tool(
        name = "set_rubric_active",
        description = "Activate or deactivate a rubric. Deactivated rubrics cannot be attached to new content plans."
    )]
    async fn set_rubric_active(&self, params: Parameters<SetRubricActive>) -> McpResult {
        self.handlers().set_rubric_active(params).await
    }

    #[tool(
        name = "get_knowledge_base",
        description = "Show the brand brief and communication style notes, creating an empty knowledge base on first use."
    )]
    async fn get_knowledge_base(&self) -> McpResult {
        self.handlers().get_knowledge_base().await
    }

    #[tool(
        name = "update_brief",
        description = "Replace the brand brief text. Omit text or pass a blank string to clear it."
    )]
    async fn update_brief(&self, params: Parameters<UpdateKnowledge>) -> McpResult {
        self.handlers().update_brief(params).await
    }

    #[tool(
        name = "update_communication_styles",
        description = "Replace the communication style notes. Omit text or pass a blank string to clear them."
    )]
    async fn update_communication_styles(&self, params: Parameters<UpdateKnowledge>) -> McpResult {
        self.handlers().update_communication_styles(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CadenceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cadence".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Cadence plans social media content. A content plan attaches social networks and rotating rubrics to a weekly cadence; generating it produces one draft post per publish date and network.

## Workflow
1. `list_social_networks` to find network IDs, `list_rubrics` or `create_rubric` for rubric IDs
2. `create_content_plan` with the start date, publish weekdays and IDs
3. `generate_posts` to fill the plan; use replace=true to regenerate a completed plan
4. `list_posts` to review the calendar and `update_post` to edit or approve posts

## Notes
- Weekday indices run from 0 (Sunday) to 6 (Saturday)
- Rubrics rotate once per publish date; all networks on a date share a rubric
- `get_knowledge_base`, `update_brief` and `update_communication_styles` hold brand context"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CadenceMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Cadence MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use cadence_core::PlannerBuilder;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_server_registers_every_tool() {
        let temp_dir = TempDir::new().unwrap();
        let planner = PlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .unwrap();
        let server = CadenceMcpServer::new(planner, OwnerId::new("mcp-user").unwrap());

        let names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        assert_eq!(names.len(), 15);
        for expected in [
            "create_content_plan",
            "generate_posts",
            "update_post",
            "get_knowledge_base",
        ] {
            assert!(names.iter().any(|name| name == expected), "missing {expected}");
        }
    }

    #[tokio::test]
    async fn test_generate_twice_reports_conflict() {
        let temp_dir = TempDir::new().unwrap();
        let planner = PlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .unwrap();
        let server = CadenceMcpServer::new(planner, OwnerId::new("mcp-user").unwrap());
        let handlers = server.handlers();

        handlers
            .create_rubric(Parameters(
                serde_json::from_value(serde_json::json!({ "name": "Новости" })).unwrap(),
            ))
            .await
            .unwrap();
        handlers
            .create_content_plan(Parameters(
                serde_json::from_value(serde_json::json!({
                    "start_date": "2024-03-01",
                    "posts_per_week": 2,
                    "publish_days": [1, 5],
                    "social_network_ids": [1, 2],
                    "rubric_ids": [1]
                }))
                .unwrap(),
            ))
            .await
            .unwrap();

        let generate = || -> Parameters<GeneratePosts> {
            Parameters(serde_json::from_value(serde_json::json!({ "id": 1 })).unwrap())
        };
        let first = handlers.generate_posts(generate()).await.unwrap();
        let text = format!("{:?}", first.content);
        assert!(text.contains("Generated 20 posts"));

        let second = handlers.generate_posts(generate()).await.unwrap_err();
        assert_eq!(second.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
