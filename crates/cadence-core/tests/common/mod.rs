#![allow(dead_code)]

use cadence_core::{
    models::OwnerId,
    params::{CreateContentPlan, CreateRubric},
    Planner, PlannerBuilder,
};
use tempfile::TempDir;

/// Seeded network ids
pub const TELEGRAM: u64 = 1;
pub const INSTAGRAM: u64 = 2;
pub const VK: u64 = 3;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

pub fn owner(name: &str) -> OwnerId {
    OwnerId::new(name).expect("valid owner id")
}

/// Creates rubrics with the given names and returns their ids in order.
pub async fn create_rubrics(planner: &Planner, owner: &OwnerId, names: &[&str]) -> Vec<u64> {
    let mut ids = Vec::new();
    for name in names {
        let rubric = planner
            .create_rubric(
                owner,
                &CreateRubric {
                    name: name.to_string(),
                    ..Default::default()
                },
            )
            .await
            .expect("Failed to create rubric");
        ids.push(rubric.id);
    }
    ids
}

/// One month from Friday 2024-03-01, publishing on Mondays and Fridays.
pub fn march_plan(social_network_ids: Vec<u64>, rubric_ids: Vec<u64>) -> CreateContentPlan {
    CreateContentPlan {
        start_date: "2024-03-01".to_string(),
        posts_per_week: 2,
        publish_days: vec![1, 5],
        social_network_ids,
        rubric_ids,
        ..Default::default()
    }
}
