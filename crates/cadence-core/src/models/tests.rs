#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::{
        error::CadenceError,
        models::{
            find_ai_model, AiProvider, ContentPlan, ContentPlanStatus, ContentPlanSummary,
            OwnerId, PlanDuration, PostStatus, PublishDays, Rubric, SocialNetwork, AI_MODELS,
            DEFAULT_AI_MODEL,
        },
    };

    fn create_test_network(id: u64, slug: &str, name: &str) -> SocialNetwork {
        SocialNetwork {
            id,
            slug: slug.to_string(),
            name: name.to_string(),
            color: "#000000".to_string(),
        }
    }

    fn create_test_rubric(id: u64, name: &str) -> Rubric {
        Rubric {
            id,
            owner_id: OwnerId::new("owner").unwrap(),
            name: name.to_string(),
            description: None,
            posts_per_month: 4,
            sort_order: 0,
            is_active: true,
            created_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    fn create_test_plan() -> ContentPlan {
        ContentPlan {
            id: 42,
            owner_id: OwnerId::new("owner").unwrap(),
            start_date: date(2024, 3, 1),
            duration: PlanDuration::OneMonth,
            posts_per_week: 2,
            publish_days: PublishDays::from_indices([1, 5]).unwrap(),
            wishes: Some("  весенние скидки  ".to_string()),
            ai_provider: AiProvider::OpenAi,
            ai_model: DEFAULT_AI_MODEL.to_string(),
            status: ContentPlanStatus::Draft,
            social_networks: vec![
                create_test_network(1, "telegram", "Telegram"),
                create_test_network(3, "vk", "VK"),
            ],
            rubrics: vec![create_test_rubric(7, "Новости")],
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1641081600).unwrap(),
        }
    }

    #[test]
    fn test_owner_id_rejects_blank() {
        assert!(matches!(OwnerId::new("   "), Err(CadenceError::Unauthorized)));
        assert!(matches!(
            OwnerId::from_optional(None),
            Err(CadenceError::Unauthorized)
        ));
        assert_eq!(OwnerId::new(" user-1 ").unwrap().as_str(), "user-1");
    }

    #[test]
    fn test_wishes_text_keeps_spacing_and_drops_blank() {
        let mut plan = create_test_plan();
        assert_eq!(plan.wishes_text(), Some("  весенние скидки  "));

        plan.wishes = Some("   ".to_string());
        assert_eq!(plan.wishes_text(), None);

        plan.wishes = None;
        assert_eq!(plan.wishes_text(), None);
    }

    #[test]
    fn test_plan_status_round_trip_and_generation_rules() {
        for status in [
            ContentPlanStatus::Draft,
            ContentPlanStatus::Generating,
            ContentPlanStatus::Completed,
            ContentPlanStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<ContentPlanStatus>().unwrap(), status);
        }

        assert!(ContentPlanStatus::Draft.accepts_generation(false));
        assert!(ContentPlanStatus::Failed.accepts_generation(false));
        assert!(!ContentPlanStatus::Completed.accepts_generation(false));
        assert!(ContentPlanStatus::Completed.accepts_generation(true));
        assert!(!ContentPlanStatus::Generating.accepts_generation(true));
    }

    #[test]
    fn test_post_status_parse() {
        assert_eq!("Review".parse::<PostStatus>().unwrap(), PostStatus::Review);
        assert!("archived".parse::<PostStatus>().is_err());
    }

    #[test]
    fn test_ai_model_catalog() {
        assert!(find_ai_model(AiProvider::OpenAi, DEFAULT_AI_MODEL).is_some());
        assert!(find_ai_model(AiProvider::Anthropic, "claude-sonnet-4").is_some());
        // Model ids are scoped to their provider
        assert!(find_ai_model(AiProvider::Anthropic, "gpt-4o").is_none());
        assert_eq!(
            AI_MODELS
                .iter()
                .filter(|model| model.provider == AiProvider::Anthropic)
                .count(),
            4
        );
    }

    #[test]
    fn test_summary_from_plan() {
        let plan = create_test_plan();
        let summary = ContentPlanSummary::from_plan(&plan, 20);

        assert_eq!(summary.id, 42);
        assert_eq!(summary.end_date, date(2024, 4, 1));
        assert_eq!(summary.networks, vec!["Telegram", "VK"]);
        assert_eq!(summary.rubrics_count, 1);
        assert_eq!(summary.posts_count, 20);
    }

    #[test]
    fn test_plan_serializes_publish_days_as_indices() {
        let plan = create_test_plan();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["publish_days"], serde_json::json!([1, 5]));
        assert_eq!(json["status"], "draft");
        assert_eq!(json["duration"], "one_month");
        assert_eq!(json["start_date"], "2024-03-01");
    }
}
