//! Post distribution engine.
//!
//! Turns a content plan into an ordered list of [`PostPlacement`]s: one per
//! publish date and attached network, each with a rubric chosen round-robin.
//!
//! # Algorithm
//!
//! 1. The window runs from the plan's start date to
//!    [`ContentPlan::window_end`], inclusive.
//! 2. [`PublishCalendar`] yields the days of the window whose weekday is in
//!    the plan's publish days, ascending.
//! 3. For every date (outer loop) and every network in attachment order
//!    (inner loop) one placement is emitted. All placements of a date share
//!    the rubric `rubrics[date_index % rubrics.len()]`; the rubric advances
//!    once per date. Without rubrics the placement has no rubric.
//! 4. `sort_order` is the emission position, starting at 0.
//!
//! The engine is a pure function and never fails: empty networks, rubrics or
//! publish days simply produce fewer (or no) placements.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::distribution::distribute;
//! # use cadence_core::models::*;
//! # use jiff::{civil::date, Timestamp};
//! # let network = |id: u64, name: &str| SocialNetwork {
//! #     id, slug: name.to_lowercase(), name: name.to_string(), color: String::new(),
//! # };
//! # let plan = ContentPlan {
//! #     id: 1,
//! #     owner_id: OwnerId::new("user").unwrap(),
//! #     start_date: date(2024, 3, 1),
//! #     duration: PlanDuration::OneMonth,
//! #     posts_per_week: 2,
//! #     publish_days: PublishDays::from_indices([1, 5]).unwrap(),
//! #     wishes: None,
//! #     ai_provider: AiProvider::OpenAi,
//! #     ai_model: "gpt-5.2".to_string(),
//! #     status: ContentPlanStatus::Draft,
//! #     social_networks: vec![network(1, "Telegram"), network(2, "VK")],
//! #     rubrics: vec![],
//! #     created_at: Timestamp::now(),
//! #     updated_at: Timestamp::now(),
//! # };
//! // Mondays and Fridays from 2024-03-01 through 2024-04-01, two networks
//! let placements = distribute(&plan);
//! assert_eq!(placements.len(), 20);
//! assert_eq!(placements[0].title, "Пост для Telegram");
//! ```

pub mod calendar;
pub mod templates;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

pub use calendar::PublishCalendar;

use crate::models::{ContentPlan, Rubric, SocialNetwork};

/// One computed (date, network, rubric) assignment prior to persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPlacement {
    pub publish_date: Date,
    pub social_network_id: u64,
    pub rubric_id: Option<u64>,
    pub title: String,
    pub content: String,
    pub hashtags: String,
    pub sort_order: u32,
}

/// Publish dates of the plan's window.
pub fn publish_dates(plan: &ContentPlan) -> PublishCalendar {
    PublishCalendar::new(plan.start_date, plan.window_end(), plan.publish_days)
}

/// Distributes posts over the plan's publish dates for the given networks and
/// rubrics, in the order they are given.
pub fn generate(
    plan: &ContentPlan,
    networks: &[SocialNetwork],
    rubrics: &[Rubric],
) -> Vec<PostPlacement> {
    let wishes = plan.wishes_text();
    let mut placements = Vec::new();

    for (date_index, publish_date) in publish_dates(plan).enumerate() {
        let rubric = if rubrics.is_empty() {
            None
        } else {
            Some(&rubrics[date_index % rubrics.len()])
        };

        for network in networks {
            placements.push(PostPlacement {
                publish_date,
                social_network_id: network.id,
                rubric_id: rubric.map(|rubric| rubric.id),
                title: templates::title(network, rubric),
                content: templates::content(network, rubric, wishes),
                hashtags: templates::hashtags(network),
                sort_order: placements.len() as u32,
            });
        }
    }

    placements
}

/// Distributes posts using the networks and rubrics attached to the plan.
pub fn distribute(plan: &ContentPlan) -> Vec<PostPlacement> {
    generate(plan, &plan.social_networks, &plan.rubrics)
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::{
        AiProvider, ContentPlanStatus, OwnerId, PlanDuration, PublishDays,
    };

    fn network(id: u64, slug: &str, name: &str) -> SocialNetwork {
        SocialNetwork {
            id,
            slug: slug.to_string(),
            name: name.to_string(),
            color: "#000000".to_string(),
        }
    }

    fn rubric(id: u64, name: &str) -> Rubric {
        Rubric {
            id,
            owner_id: OwnerId::new("owner").unwrap(),
            name: name.to_string(),
            description: None,
            posts_per_month: 4,
            sort_order: id as u32,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn plan(start: Date, days: &[u8]) -> ContentPlan {
        ContentPlan {
            id: 1,
            owner_id: OwnerId::new("owner").unwrap(),
            start_date: start,
            duration: PlanDuration::OneMonth,
            posts_per_week: days.len() as u8,
            publish_days: PublishDays::from_indices(days.iter().copied()).unwrap(),
            wishes: None,
            ai_provider: AiProvider::OpenAi,
            ai_model: "gpt-5.2".to_string(),
            status: ContentPlanStatus::Draft,
            social_networks: Vec::new(),
            rubrics: Vec::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn networks() -> Vec<SocialNetwork> {
        vec![
            network(1, "telegram", "Telegram"),
            network(2, "instagram", "Instagram"),
        ]
    }

    fn rubrics() -> Vec<Rubric> {
        vec![rubric(10, "Новости"), rubric(11, "Кейсы"), rubric(12, "Советы")]
    }

    #[test]
    fn test_march_2024_mondays_and_fridays() {
        let plan = plan(date(2024, 3, 1), &[1, 5]);
        let placements = generate(&plan, &networks(), &rubrics());

        let expected_dates = [
            date(2024, 3, 1),
            date(2024, 3, 4),
            date(2024, 3, 8),
            date(2024, 3, 11),
            date(2024, 3, 15),
            date(2024, 3, 18),
            date(2024, 3, 22),
            date(2024, 3, 25),
            date(2024, 3, 29),
            date(2024, 4, 1),
        ];
        assert_eq!(placements.len(), 2 * expected_dates.len());

        for (date_index, expected_date) in expected_dates.iter().enumerate() {
            let pair = &placements[date_index * 2..date_index * 2 + 2];
            let expected_rubric = [10, 11, 12][date_index % 3];

            assert_eq!(pair[0].publish_date, *expected_date);
            assert_eq!(pair[1].publish_date, *expected_date);
            assert_eq!(pair[0].social_network_id, 1);
            assert_eq!(pair[1].social_network_id, 2);
            assert_eq!(pair[0].rubric_id, Some(expected_rubric));
            assert_eq!(pair[1].rubric_id, Some(expected_rubric));
        }
    }

    #[test]
    fn test_sort_order_is_dense_and_date_major() {
        let plan = plan(date(2024, 6, 3), &[0, 2, 4, 6]);
        let placements = generate(&plan, &networks(), &rubrics());

        let orders: Vec<u32> = placements.iter().map(|p| p.sort_order).collect();
        let expected: Vec<u32> = (0..placements.len() as u32).collect();
        assert_eq!(orders, expected);

        assert!(placements
            .windows(2)
            .all(|pair| pair[0].publish_date <= pair[1].publish_date));
    }

    #[test]
    fn test_count_is_dates_times_networks() {
        let plan = plan(date(2024, 2, 10), &[1, 2, 3]);
        let dates = publish_dates(&plan).count();
        let placements = generate(&plan, &networks(), &[]);
        assert_eq!(placements.len(), dates * 2);
    }

    #[test]
    fn test_rubric_advances_once_per_date() {
        let plan = plan(date(2024, 3, 1), &[1, 3, 5]);
        let rubrics = rubrics();
        let placements = generate(&plan, &networks(), &rubrics);

        let mut per_date: Vec<(Date, Option<u64>)> = placements
            .iter()
            .map(|p| (p.publish_date, p.rubric_id))
            .collect();
        per_date.dedup();

        for (index, (_, rubric_id)) in per_date.iter().enumerate() {
            assert_eq!(*rubric_id, Some(rubrics[index % rubrics.len()].id));
        }
    }

    #[test]
    fn test_no_rubrics_yields_null_rubric() {
        let plan = plan(date(2024, 3, 1), &[1, 5]);
        let placements = generate(&plan, &networks(), &[]);

        assert!(!placements.is_empty());
        assert!(placements.iter().all(|p| p.rubric_id.is_none()));
        assert_eq!(placements[0].title, "Пост для Telegram");
        assert!(placements[0].content.contains("\"Общее\""));
    }

    #[test]
    fn test_empty_inputs_yield_nothing() {
        let with_days = plan(date(2024, 3, 1), &[1]);
        assert!(generate(&with_days, &[], &rubrics()).is_empty());

        let without_days = plan(date(2024, 3, 1), &[]);
        assert!(generate(&without_days, &networks(), &rubrics()).is_empty());
    }

    #[test]
    fn test_wishes_are_used_in_content() {
        let mut plan = plan(date(2024, 3, 1), &[5]);
        plan.wishes = Some("летняя коллекция".to_string());
        let placements = generate(&plan, &networks(), &rubrics());

        assert_eq!(
            placements[0].content,
            "Пост для Telegram в рубрике \"Новости\".\n\nТема: летняя коллекция"
        );
        assert_eq!(placements[1].hashtags, "#instagram #контентплан #smm");
    }

    #[test]
    fn test_wishes_keep_surrounding_spaces_in_content() {
        let mut plan = plan(date(2024, 3, 1), &[5]);
        plan.wishes = Some("  лето  ".to_string());
        let placements = generate(&plan, &networks(), &rubrics());

        assert!(placements[0].content.ends_with("\n\nТема:   лето  "));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let plan = plan(date(2024, 1, 31), &[0, 3]);
        let first = generate(&plan, &networks(), &rubrics());
        let second = generate(&plan, &networks(), &rubrics());
        assert_eq!(first, second);
        // Window ends on the clamped 2024-02-29
        assert!(first.iter().all(|p| p.publish_date <= date(2024, 2, 29)));
    }

    #[test]
    fn test_distribute_uses_attached_order() {
        let mut plan = plan(date(2024, 3, 4), &[1]);
        plan.social_networks = vec![
            network(4, "threads", "Threads"),
            network(1, "telegram", "Telegram"),
        ];
        plan.rubrics = vec![rubric(12, "Советы"), rubric(10, "Новости")];

        let placements = distribute(&plan);
        assert_eq!(placements[0].social_network_id, 4);
        assert_eq!(placements[1].social_network_id, 1);
        assert_eq!(placements[0].rubric_id, Some(12));
        assert_eq!(placements[2].rubric_id, Some(10));
    }
}
