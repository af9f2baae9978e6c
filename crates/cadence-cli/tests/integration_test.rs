//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server uses.

use std::process::Command;

use cadence_core::{
    models::OwnerId,
    params::{CreateRubric, GeneratePosts, Id, ListPlans, ListPosts},
    Planner, PlannerBuilder,
};
use tempfile::TempDir;

const USER: &str = "integration-user";

async fn create_test_planner() -> (Planner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command as [`USER`] and capture its stdout.
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_cadence"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .env("CADENCE_USER", USER)
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

/// Creates a rubric and a two-network plan through the CLI, then generates it.
fn seed_generated_plan(db_path: &str) {
    run_cli_command(db_path, &["rubric", "create", "Новости"]);
    run_cli_command(
        db_path,
        &[
            "plan",
            "create",
            "2024-03-01",
            "--days",
            "1,5",
            "--networks",
            "1,3",
            "--rubrics",
            "1",
            "--wishes",
            "весенняя коллекция",
        ],
    );
    let output = run_cli_command(db_path, &["plan", "generate", "1"]);
    assert!(output.contains("Generated 20 posts"), "unexpected output: {output}");
}

#[tokio::test]
async fn test_plan_display_consistency() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();
    seed_generated_plan(db_str);

    let owner = OwnerId::new(USER).unwrap();
    let plan = planner
        .show_content_plan(&owner, &Id { id: 1 })
        .await
        .expect("Failed to load plan");

    let cli_output = run_cli_command(db_str, &["plan", "show", "1"]);
    assert_eq!(cli_output, plan.to_string());
    assert!(cli_output.contains("Telegram"));
    assert!(cli_output.contains("VK"));
}

#[tokio::test]
async fn test_plan_list_display_consistency() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();
    seed_generated_plan(db_str);

    let owner = OwnerId::new(USER).unwrap();
    let summaries = planner
        .list_plans_summary(&owner, &ListPlans::default())
        .await
        .expect("Failed to list plans");

    let cli_output = run_cli_command(db_str, &["plan", "list"]);
    assert_eq!(cli_output, summaries.to_string());
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].posts_count, 20);
}

#[tokio::test]
async fn test_post_calendar_display_consistency() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();
    seed_generated_plan(db_str);

    let owner = OwnerId::new(USER).unwrap();
    let calendar = planner
        .post_calendar(
            &owner,
            &ListPosts {
                plan_id: 1,
                ..Default::default()
            },
        )
        .await
        .expect("Failed to list posts");

    let cli_output = run_cli_command(db_str, &["post", "list", "1"]);
    assert_eq!(cli_output, calendar.to_string());
    assert_eq!(calendar.len(), 20);
    assert!(cli_output.contains("## 2024-04-01 (Monday)"));
}

#[tokio::test]
async fn test_planner_and_cli_share_the_database() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let owner = OwnerId::new(USER).unwrap();
    planner
        .create_rubric(
            &owner,
            &CreateRubric {
                name: "Кейсы".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create rubric");

    let cli_output = run_cli_command(db_str, &["rubric", "list"]);
    assert!(cli_output.contains("Кейсы"));

    seed_generated_plan_with_rubric(db_str);
    let outcome = planner
        .generate_posts(&owner, &GeneratePosts { id: 1, replace: true })
        .await
        .expect("Failed to regenerate");
    assert_eq!(outcome.posts_count, 3);
}

/// Creates and generates a two-week, Friday-only plan on Telegram using the
/// rubric created through the planner.
fn seed_generated_plan_with_rubric(db_path: &str) {
    run_cli_command(
        db_path,
        &[
            "plan",
            "create",
            "2024-03-01",
            "--duration",
            "two-weeks",
            "--days",
            "5",
            "--networks",
            "1",
            "--rubrics",
            "1",
        ],
    );
    let output = run_cli_command(db_path, &["plan", "generate", "1"]);
    assert!(output.contains("Generated 3 posts"), "unexpected output: {output}");
}
