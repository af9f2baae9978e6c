//! Tests for the display-returning planner handlers.

use tempfile::TempDir;

use super::*;
use crate::{
    models::OwnerId,
    params::{
        CreateContentPlan, CreateRubric, GeneratePosts, Id, ListPlans, ListPosts, SetRubricActive,
        UpdateKnowledge, UpdatePost,
    },
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

async fn create_generated_plan(planner: &Planner, owner: &OwnerId) -> u64 {
    let rubric = planner
        .create_rubric(
            owner,
            &CreateRubric {
                name: "Новости".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create rubric");

    let plan = planner
        .create_content_plan(
            owner,
            &CreateContentPlan {
                start_date: "2024-03-01".to_string(),
                duration: Some("two_weeks".to_string()),
                posts_per_week: 1,
                publish_days: vec![5],
                social_network_ids: vec![1],
                rubric_ids: vec![rubric.id],
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    planner
        .generate_posts(owner, &GeneratePosts { id: plan.id, replace: false })
        .await
        .expect("Failed to generate posts");
    plan.id
}

#[tokio::test]
async fn test_builder_creates_missing_directories() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("cadence.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");

    assert!(db_path.exists());
    assert_eq!(planner.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_post_calendar_uses_network_names() {
    let (_temp_dir, planner) = create_test_planner().await;
    let owner = OwnerId::new("alice").unwrap();
    let plan_id = create_generated_plan(&planner, &owner).await;

    let calendar = planner
        .post_calendar(&owner, &ListPosts { plan_id, ..Default::default() })
        .await
        .unwrap();

    // Fridays 1, 8 and 15 March fall inside the two-week window
    assert_eq!(calendar.len(), 3);
    let output = format!("{calendar}");
    assert!(output.contains("## 2024-03-08 (Friday)"));
    assert!(output.contains("[Telegram]"));
}

#[tokio::test]
async fn test_generate_result_message() {
    let (_temp_dir, planner) = create_test_planner().await;
    let owner = OwnerId::new("alice").unwrap();
    let plan_id = create_generated_plan(&planner, &owner).await;

    let status = planner
        .generate_posts_result(&owner, &GeneratePosts { id: plan_id, replace: true })
        .await
        .unwrap();
    assert_eq!(
        format!("{status}"),
        format!("Success: Generated 3 posts for content plan {plan_id}\n")
    );
}

#[tokio::test]
async fn test_update_post_result_tracks_changes() {
    let (_temp_dir, planner) = create_test_planner().await;
    let owner = OwnerId::new("alice").unwrap();
    let plan_id = create_generated_plan(&planner, &owner).await;
    let posts = planner
        .list_posts(&owner, &ListPosts { plan_id, ..Default::default() })
        .await
        .unwrap();

    let result = planner
        .update_post_result(
            &owner,
            &UpdatePost {
                id: posts[0].id,
                hashtags: Some("#весна".to_string()),
                publish_time: Some("18:30".to_string()),
                status: Some("published".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        result.changes,
        vec![
            "Updated hashtags".to_string(),
            "Set publish time to 18:30".to_string(),
            "Changed status to published".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_show_missing_plan_is_not_found() {
    let (_temp_dir, planner) = create_test_planner().await;
    let owner = OwnerId::new("alice").unwrap();

    let result = planner.show_content_plan(&owner, &Id { id: 42 }).await;
    assert!(matches!(result, Err(CadenceError::PlanNotFound { id: 42 })));

    let summaries = planner
        .list_plans_summary(&owner, &ListPlans::default())
        .await
        .unwrap();
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_rubric_and_knowledge_results() {
    let (_temp_dir, planner) = create_test_planner().await;
    let owner = OwnerId::new("alice").unwrap();

    let created = planner
        .create_rubric_result(
            &owner,
            &CreateRubric {
                name: "  Кейсы  ".to_string(),
                description: Some("   ".to_string()),
                posts_per_month: Some(2),
            },
        )
        .await
        .unwrap();
    assert_eq!(created.resource.name, "Кейсы");
    assert!(created.resource.description.is_none());

    let result = planner
        .set_rubric_active_result(
            &owner,
            &SetRubricActive {
                id: created.resource.id,
                active: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(result.changes, vec!["Deactivated rubric".to_string()]);

    let result = planner
        .update_brief_result(&owner, &UpdateKnowledge { text: Some(" ".to_string()) })
        .await
        .unwrap();
    assert_eq!(result.changes, vec!["Cleared brief".to_string()]);

    let blank = planner
        .create_rubric(&owner, &CreateRubric { name: " ".to_string(), ..Default::default() })
        .await;
    assert!(matches!(blank, Err(CadenceError::InvalidInput { field, .. }) if field == "name"));
}
