//! Command-line interface definitions and command handlers.
//!
//! Argument structs carry the clap attributes and convert into the
//! interface-neutral types in [`cadence_core::params`], so the core never
//! depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] dispatches each subcommand to the planner and prints the markdown
//! result through the [`TerminalRenderer`].

use anyhow::{Context, Result};
use cadence_core::{
    display::OperationStatus,
    models::OwnerId,
    params::*,
    CadenceError, Planner,
};
use clap::{Args, Subcommand, ValueEnum};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Content plans
// ============================================================================

/// Create a new content plan
///
/// The plan starts in the draft state. Run `cadence plan generate` to fill it
/// with posts.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// First day of the plan (YYYY-MM-DD)
    pub start_date: String,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = DurationArg::OneMonth,
        help = "Length of the scheduling window"
    )]
    pub duration: DurationArg,
    #[arg(
        short,
        long,
        help = "Target number of posts per week, between 1 and 7 (defaults to the number of publish days)"
    )]
    pub posts_per_week: Option<u8>,
    #[arg(
        long = "days",
        value_delimiter = ',',
        required = true,
        help = "Publish weekdays as comma-separated indices, 0 = Sunday through 6 = Saturday"
    )]
    pub publish_days: Vec<u8>,
    #[arg(
        short = 'n',
        long = "networks",
        value_delimiter = ',',
        required = true,
        help = "Social network IDs as comma-separated list, in rotation order"
    )]
    pub social_network_ids: Vec<u64>,
    #[arg(
        short = 'r',
        long = "rubrics",
        value_delimiter = ',',
        required = true,
        help = "Rubric IDs as comma-separated list, in rotation order"
    )]
    pub rubric_ids: Vec<u64>,
    #[arg(short, long, help = "Free-form wishes used as the topic of every post")]
    pub wishes: Option<String>,
    #[arg(long, value_enum, help = "AI provider (defaults to openai)")]
    pub provider: Option<ProviderArg>,
    #[arg(short, long, help = "AI model ID (defaults to the provider's default model)")]
    pub model: Option<String>,
}

impl From<CreatePlanArgs> for CreateContentPlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreateContentPlan {
            start_date: val.start_date,
            duration: Some(val.duration.to_string()),
            posts_per_week: val
                .posts_per_week
                .unwrap_or_else(|| u8::try_from(val.publish_days.len()).unwrap_or(u8::MAX)),
            publish_days: val.publish_days,
            wishes: val.wishes,
            ai_provider: val.provider.map(|p| p.to_string()),
            ai_model: val.model,
            social_network_ids: val.social_network_ids,
            rubric_ids: val.rubric_ids,
        }
    }
}

/// List content plans, newest first
#[derive(Args)]
pub struct ListPlansArgs {
    #[arg(short, long, value_enum, help = "Only show plans with this status")]
    pub status: Option<PlanStatusArg>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Show a content plan with its networks and rubrics
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Unique identifier of the content plan to show")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Generate the posts of a content plan
///
/// Distributes one post per publish date and attached network, rotating
/// rubrics across dates. A completed plan is only regenerated with
/// --replace, which swaps the old posts for the new batch atomically.
#[derive(Args)]
pub struct GeneratePostsArgs {
    #[arg(help = "Unique identifier of the content plan to generate")]
    pub id: u64,
    #[arg(long, help = "Replace the posts of an already completed plan")]
    pub replace: bool,
}

impl From<GeneratePostsArgs> for GeneratePosts {
    fn from(val: GeneratePostsArgs) -> Self {
        GeneratePosts {
            id: val.id,
            replace: val.replace,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new content plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List content plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a content plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Generate the posts of a content plan
    #[command(alias = "g")]
    Generate(GeneratePostsArgs),
}

// ============================================================================
// Posts
// ============================================================================

/// List the posts of a content plan as a calendar
#[derive(Args)]
pub struct ListPostsArgs {
    #[arg(help = "Unique identifier of the content plan")]
    pub plan_id: u64,
    #[arg(short = 'n', long = "network", help = "Only posts for this social network ID")]
    pub social_network_id: Option<u64>,
    #[arg(short, long, value_enum, help = "Only posts with this status")]
    pub status: Option<PostStatusArg>,
    #[arg(long, help = "Only posts on or after this day (YYYY-MM-DD)")]
    pub from: Option<String>,
    #[arg(long, help = "Only posts on or before this day (YYYY-MM-DD)")]
    pub to: Option<String>,
}

impl From<ListPostsArgs> for ListPosts {
    fn from(val: ListPostsArgs) -> Self {
        ListPosts {
            plan_id: val.plan_id,
            social_network_id: val.social_network_id,
            status: val.status.map(|s| s.to_string()),
            from: val.from,
            to: val.to,
        }
    }
}

/// Show a single post
#[derive(Args)]
pub struct ShowPostArgs {
    #[arg(help = "Unique identifier of the post to show")]
    pub id: u64,
}

impl From<ShowPostArgs> for Id {
    fn from(val: ShowPostArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit a generated post
#[derive(Args)]
pub struct UpdatePostArgs {
    #[arg(help = "Unique identifier of the post to update")]
    pub id: u64,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New body text")]
    pub content: Option<String>,
    #[arg(long, help = "New space-separated hashtags")]
    pub hashtags: Option<String>,
    #[arg(long = "time", help = "Publish time as HH:MM; pass an empty string to clear it")]
    pub publish_time: Option<String>,
    #[arg(short, long, value_enum, help = "New status for the post")]
    pub status: Option<PostStatusArg>,
}

impl UpdatePostArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.content.is_some()
            || self.hashtags.is_some()
            || self.publish_time.is_some()
            || self.status.is_some()
    }
}

impl From<UpdatePostArgs> for UpdatePost {
    fn from(val: UpdatePostArgs) -> Self {
        UpdatePost {
            id: val.id,
            title: val.title,
            content: val.content,
            hashtags: val.hashtags,
            publish_time: val.publish_time,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum PostCommands {
    /// List the posts of a content plan
    #[command(aliases = ["l", "ls"])]
    List(ListPostsArgs),
    /// Show a single post
    #[command(alias = "s")]
    Show(ShowPostArgs),
    /// Edit a generated post
    #[command(alias = "u")]
    Update(UpdatePostArgs),
}

// ============================================================================
// Rubrics
// ============================================================================

/// Create a rubric
#[derive(Args)]
pub struct CreateRubricArgs {
    /// Name of the rubric
    pub name: String,
    #[arg(short, long, help = "What the rubric covers")]
    pub description: Option<String>,
    #[arg(short, long, help = "Target number of posts per month (default 4)")]
    pub posts_per_month: Option<u32>,
}

impl From<CreateRubricArgs> for CreateRubric {
    fn from(val: CreateRubricArgs) -> Self {
        CreateRubric {
            name: val.name,
            description: val.description,
            posts_per_month: val.posts_per_month,
        }
    }
}

/// List rubrics in their display order
#[derive(Args)]
pub struct ListRubricsArgs {
    #[arg(short, long, help = "Include deactivated rubrics")]
    pub all: bool,
}

impl From<ListRubricsArgs> for ListRubrics {
    fn from(val: ListRubricsArgs) -> Self {
        ListRubrics {
            include_inactive: val.all,
        }
    }
}

#[derive(Args)]
pub struct RubricIdArgs {
    #[arg(help = "Unique identifier of the rubric")]
    pub id: u64,
}

#[derive(Subcommand)]
pub enum RubricCommands {
    /// Create a rubric
    #[command(alias = "c")]
    Create(CreateRubricArgs),
    /// List rubrics
    #[command(aliases = ["l", "ls"])]
    List(ListRubricsArgs),
    /// Make a rubric available for new plans again
    Activate(RubricIdArgs),
    /// Hide a rubric from new plans
    Deactivate(RubricIdArgs),
}

// ============================================================================
// Catalogs and knowledge base
// ============================================================================

#[derive(Subcommand)]
pub enum NetworkCommands {
    /// List the supported social networks
    #[command(aliases = ["l", "ls"])]
    List,
}

#[derive(Subcommand)]
pub enum ModelCommands {
    /// List the supported AI models
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Replace a knowledge base text
#[derive(Args)]
pub struct KnowledgeTextArgs {
    /// New text; omit to clear the field
    pub text: Option<String>,
}

impl From<KnowledgeTextArgs> for UpdateKnowledge {
    fn from(val: KnowledgeTextArgs) -> Self {
        UpdateKnowledge { text: val.text }
    }
}

#[derive(Subcommand)]
pub enum KnowledgeCommands {
    /// Show the brand brief and communication styles
    #[command(alias = "s")]
    Show,
    /// Replace the brand brief
    Brief(KnowledgeTextArgs),
    /// Replace the communication style notes
    Styles(KnowledgeTextArgs),
}

// ============================================================================
// Value enums
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DurationArg {
    TwoWeeks,
    OneMonth,
    TwoMonths,
    ThreeMonths,
}

impl std::fmt::Display for DurationArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationArg::TwoWeeks => write!(f, "two_weeks"),
            DurationArg::OneMonth => write!(f, "one_month"),
            DurationArg::TwoMonths => write!(f, "two_months"),
            DurationArg::ThreeMonths => write!(f, "three_months"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Openai,
    Anthropic,
}

impl std::fmt::Display for ProviderArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderArg::Openai => write!(f, "openai"),
            ProviderArg::Anthropic => write!(f, "anthropic"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlanStatusArg {
    Draft,
    Generating,
    Completed,
    Failed,
}

impl std::fmt::Display for PlanStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatusArg::Draft => write!(f, "draft"),
            PlanStatusArg::Generating => write!(f, "generating"),
            PlanStatusArg::Completed => write!(f, "completed"),
            PlanStatusArg::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PostStatusArg {
    Draft,
    Review,
    Approved,
    Published,
}

impl std::fmt::Display for PostStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatusArg::Draft => write!(f, "draft"),
            PostStatusArg::Review => write!(f, "review"),
            PostStatusArg::Approved => write!(f, "approved"),
            PostStatusArg::Published => write!(f, "published"),
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs CLI commands against the planner and renders their output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    user: Option<String>,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, user: Option<String>) -> Self {
        Self {
            planner,
            renderer,
            user,
        }
    }

    /// The raw user identifier from --user or CADENCE_USER.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn into_planner(self) -> Planner {
        self.planner
    }

    fn owner(&self) -> Result<OwnerId> {
        OwnerId::from_optional(self.user()).context("Set --user or CADENCE_USER")
    }

    fn render(&self, output: impl ToString) -> Result<()> {
        self.renderer.render(&output.to_string())
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(&args.into()).await,
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Generate(args) => self.generate_posts(&args.into()).await,
        }
    }

    pub async fn handle_post_command(&self, command: PostCommands) -> Result<()> {
        match command {
            PostCommands::List(args) => self.list_posts(&args.into()).await,
            PostCommands::Show(args) => self.show_post(&args.into()).await,
            PostCommands::Update(args) => {
                if !args.has_changes() {
                    return self.render(OperationStatus::failure(format!(
                        "No changes specified for post {}",
                        args.id
                    )));
                }
                self.update_post(&args.into()).await
            }
        }
    }

    pub async fn handle_rubric_command(&self, command: RubricCommands) -> Result<()> {
        match command {
            RubricCommands::Create(args) => self.create_rubric(&args.into()).await,
            RubricCommands::List(args) => self.list_rubrics(&args.into()).await,
            RubricCommands::Activate(args) => {
                self.set_rubric_active(&SetRubricActive {
                    id: args.id,
                    active: true,
                })
                .await
            }
            RubricCommands::Deactivate(args) => {
                self.set_rubric_active(&SetRubricActive {
                    id: args.id,
                    active: false,
                })
                .await
            }
        }
    }

    pub async fn handle_network_command(&self, command: NetworkCommands) -> Result<()> {
        match command {
            NetworkCommands::List => {
                let networks = self
                    .planner
                    .social_networks()
                    .await
                    .context("Failed to list social networks")?;
                self.render(networks)
            }
        }
    }

    pub fn handle_model_command(&self, command: ModelCommands) -> Result<()> {
        match command {
            ModelCommands::List => self.render(self.planner.ai_model_catalog()),
        }
    }

    pub async fn handle_knowledge_command(&self, command: KnowledgeCommands) -> Result<()> {
        let owner = self.owner()?;
        match command {
            KnowledgeCommands::Show => {
                let knowledge = self
                    .planner
                    .get_or_create_knowledge_base(&owner)
                    .await
                    .context("Failed to load knowledge base")?;
                self.render(knowledge)
            }
            KnowledgeCommands::Brief(args) => {
                let result = self
                    .planner
                    .update_brief_result(&owner, &args.into())
                    .await
                    .context("Failed to update brief")?;
                self.render(result)
            }
            KnowledgeCommands::Styles(args) => {
                let result = self
                    .planner
                    .update_styles_result(&owner, &args.into())
                    .await
                    .context("Failed to update communication styles")?;
                self.render(result)
            }
        }
    }

    async fn create_plan(&self, params: &CreateContentPlan) -> Result<()> {
        let result = self
            .planner
            .create_plan_result(&self.owner()?, params)
            .await
            .context("Failed to create content plan")?;
        self.render(result)
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self
            .planner
            .list_plans_summary(&self.owner()?, params)
            .await
            .context("Failed to list content plans")?;
        self.render(summaries)
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .planner
            .show_content_plan(&self.owner()?, params)
            .await
            .context("Failed to show content plan")?;
        self.render(plan)
    }

    async fn generate_posts(&self, params: &GeneratePosts) -> Result<()> {
        let status = self
            .planner
            .generate_posts_result(&self.owner()?, params)
            .await
            .context("Failed to generate posts")?;
        self.render(status)
    }

    async fn list_posts(&self, params: &ListPosts) -> Result<()> {
        let calendar = self
            .planner
            .post_calendar(&self.owner()?, params)
            .await
            .context("Failed to list posts")?;
        self.render(calendar)
    }

    async fn show_post(&self, params: &Id) -> Result<()> {
        let post = self
            .planner
            .get_post(&self.owner()?, params)
            .await
            .context("Failed to show post")?
            .ok_or(CadenceError::PostNotFound { id: params.id })?;
        self.render(post)
    }

    async fn update_post(&self, params: &UpdatePost) -> Result<()> {
        let result = self
            .planner
            .update_post_result(&self.owner()?, params)
            .await
            .context("Failed to update post")?;
        self.render(result)
    }

    async fn create_rubric(&self, params: &CreateRubric) -> Result<()> {
        let result = self
            .planner
            .create_rubric_result(&self.owner()?, params)
            .await
            .context("Failed to create rubric")?;
        self.render(result)
    }

    async fn list_rubrics(&self, params: &ListRubrics) -> Result<()> {
        let rubrics = self
            .planner
            .rubrics(&self.owner()?, params)
            .await
            .context("Failed to list rubrics")?;
        self.render(rubrics)
    }

    async fn set_rubric_active(&self, params: &SetRubricActive) -> Result<()> {
        let result = self
            .planner
            .set_rubric_active_result(&self.owner()?, params)
            .await
            .context("Failed to update rubric")?;
        self.render(result)
    }
}
