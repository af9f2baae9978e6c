//! Placeholder text for generated posts.
//!
//! These texts are stand-ins that a text-generation provider later replaces.
//! They are fully determined by the network, the rubric and the plan wishes.

use crate::models::{Rubric, SocialNetwork};

const FALLBACK_TITLE: &str = "Пост";
const FALLBACK_RUBRIC: &str = "Общее";
const FALLBACK_BODY: &str = "Контент будет сгенерирован AI.";

/// `"{rubric} для {network}"`, with `Пост` when there is no rubric.
pub fn title(network: &SocialNetwork, rubric: Option<&Rubric>) -> String {
    let rubric_name = rubric.map_or(FALLBACK_TITLE, |rubric| rubric.name.as_str());
    format!("{rubric_name} для {}", network.name)
}

/// Body naming the network and rubric followed by the plan topic.
pub fn content(network: &SocialNetwork, rubric: Option<&Rubric>, wishes: Option<&str>) -> String {
    let rubric_name = rubric.map_or(FALLBACK_RUBRIC, |rubric| rubric.name.as_str());
    let topic = match wishes {
        Some(wishes) => format!("Тема: {wishes}"),
        None => FALLBACK_BODY.to_string(),
    };
    format!(
        "Пост для {} в рубрике \"{rubric_name}\".\n\n{topic}",
        network.name
    )
}

/// Network hashtag followed by the fixed campaign tags.
pub fn hashtags(network: &SocialNetwork) -> String {
    format!("#{} #контентплан #smm", network.slug)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::OwnerId;

    fn network() -> SocialNetwork {
        SocialNetwork {
            id: 1,
            slug: "telegram".to_string(),
            name: "Telegram".to_string(),
            color: "#26A5E4".to_string(),
        }
    }

    fn rubric() -> Rubric {
        Rubric {
            id: 3,
            owner_id: OwnerId::new("owner").unwrap(),
            name: "Кейсы".to_string(),
            description: None,
            posts_per_month: 4,
            sort_order: 0,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_title_with_and_without_rubric() {
        assert_eq!(title(&network(), Some(&rubric())), "Кейсы для Telegram");
        assert_eq!(title(&network(), None), "Пост для Telegram");
    }

    #[test]
    fn test_content_with_wishes() {
        assert_eq!(
            content(&network(), Some(&rubric()), Some("запуск продукта")),
            "Пост для Telegram в рубрике \"Кейсы\".\n\nТема: запуск продукта"
        );
    }

    #[test]
    fn test_content_fallbacks() {
        assert_eq!(
            content(&network(), None, None),
            "Пост для Telegram в рубрике \"Общее\".\n\nКонтент будет сгенерирован AI."
        );
    }

    #[test]
    fn test_hashtags_use_slug() {
        assert_eq!(hashtags(&network()), "#telegram #контентплан #smm");
    }
}
