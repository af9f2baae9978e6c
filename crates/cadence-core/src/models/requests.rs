//! Validated request types built from interface parameters.

use std::{collections::HashSet, str::FromStr};

use jiff::civil::{Date, Time};

use super::{default_ai_model, find_ai_model, AiProvider, PlanDuration, PostStatus, PublishDays};
use crate::{
    error::{CadenceError, Result},
    params,
};

/// A content plan that passed input validation and is ready to be stored.
///
/// Existence of the referenced networks and rubrics is checked by the store
/// inside the creating transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContentPlan {
    pub start_date: Date,
    pub duration: PlanDuration,
    pub posts_per_week: u8,
    pub publish_days: PublishDays,
    pub wishes: Option<String>,
    pub ai_provider: AiProvider,
    pub ai_model: String,
    pub social_network_ids: Vec<u64>,
    pub rubric_ids: Vec<u64>,
}

impl TryFrom<params::CreateContentPlan> for NewContentPlan {
    type Error = CadenceError;

    /// Validates the creation parameters.
    ///
    /// # Errors
    ///
    /// [`CadenceError::InvalidInput`] naming the first offending field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::{models::NewContentPlan, params::CreateContentPlan};
    ///
    /// let params = CreateContentPlan {
    ///     start_date: "2024-03-01".to_string(),
    ///     posts_per_week: 2,
    ///     publish_days: vec![1, 5],
    ///     social_network_ids: vec![1],
    ///     rubric_ids: vec![3],
    ///     ..Default::default()
    /// };
    /// let plan = NewContentPlan::try_from(params).unwrap();
    /// assert_eq!(plan.ai_model, "gpt-5.2");
    ///
    /// let params = CreateContentPlan {
    ///     start_date: "2024-03-01".to_string(),
    ///     posts_per_week: 3,
    ///     publish_days: vec![1, 5],
    ///     social_network_ids: vec![1],
    ///     rubric_ids: vec![3],
    ///     ..Default::default()
    /// };
    /// assert!(NewContentPlan::try_from(params).is_err());
    /// ```
    fn try_from(params: params::CreateContentPlan) -> Result<Self> {
        let start_date = parse_field::<Date>("start_date", &params.start_date)?;

        let duration = match params.duration.as_deref() {
            Some(raw) => parse_field::<PlanDuration>("duration", raw)?,
            None => PlanDuration::default(),
        };

        if !(1..=7).contains(&params.posts_per_week) {
            return Err(CadenceError::invalid_input("posts_per_week")
                .with_reason(format!("{} is outside 1..=7", params.posts_per_week)));
        }

        let publish_days = PublishDays::from_indices(params.publish_days.iter().copied())?;
        if publish_days.len() != params.posts_per_week as usize {
            return Err(CadenceError::invalid_input("publish_days").with_reason(format!(
                "{} publish days given for {} posts per week",
                publish_days.len(),
                params.posts_per_week
            )));
        }

        let social_network_ids = unique_ids("social_network_ids", params.social_network_ids)?;
        let rubric_ids = unique_ids("rubric_ids", params.rubric_ids)?;

        let ai_provider = match params.ai_provider.as_deref() {
            Some(raw) => parse_field::<AiProvider>("ai_provider", raw)?,
            None => AiProvider::default(),
        };
        let ai_model = params
            .ai_model
            .unwrap_or_else(|| default_ai_model(ai_provider).to_string());
        if find_ai_model(ai_provider, &ai_model).is_none() {
            return Err(CadenceError::invalid_input("ai_model").with_reason(format!(
                "'{ai_model}' is not a known {} model",
                ai_provider.as_str()
            )));
        }

        // Non-blank wishes are stored as entered, surrounding spaces included
        let wishes = params.wishes.filter(|wishes| !wishes.trim().is_empty());

        Ok(Self {
            start_date,
            duration,
            posts_per_week: params.posts_per_week,
            publish_days,
            wishes,
            ai_provider,
            ai_model,
            social_network_ids,
            rubric_ids,
        })
    }
}

/// Partial update of a generated post.
///
/// `publish_time` is doubly optional: `Some(None)` clears the time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtags: Option<String>,
    pub publish_time: Option<Option<Time>>,
    pub status: Option<PostStatus>,
}

impl UpdatePostRequest {
    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.hashtags.is_none()
            && self.publish_time.is_none()
            && self.status.is_none()
    }
}

impl TryFrom<params::UpdatePost> for UpdatePostRequest {
    type Error = CadenceError;

    fn try_from(params: params::UpdatePost) -> Result<Self> {
        if let Some(title) = &params.title {
            if title.trim().is_empty() {
                return Err(CadenceError::invalid_input("title").with_reason("must not be blank"));
            }
        }

        let publish_time = params
            .publish_time
            .as_deref()
            .map(|raw| match raw.trim() {
                "" => Ok(None),
                raw => parse_field::<Time>("publish_time", raw).map(Some),
            })
            .transpose()?;

        let status = params
            .status
            .as_deref()
            .map(|raw| parse_field::<PostStatus>("status", raw))
            .transpose()?;

        Ok(Self {
            title: params.title,
            content: params.content,
            hashtags: params.hashtags,
            publish_time,
            status,
        })
    }
}

/// Parses a textual field, reporting failures as invalid input on `field`.
pub(crate) fn parse_field<T>(field: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| {
        CadenceError::invalid_input(field).with_reason(format!("'{raw}' is not valid: {e}"))
    })
}

fn unique_ids(field: &str, ids: Vec<u64>) -> Result<Vec<u64>> {
    if ids.is_empty() {
        return Err(CadenceError::invalid_input(field).with_reason("at least one id is required"));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(CadenceError::invalid_input(field)
            .with_reason(format!("id {duplicate} is listed twice")));
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_AI_MODEL;

    fn valid_params() -> params::CreateContentPlan {
        params::CreateContentPlan {
            start_date: "2024-03-01".to_string(),
            duration: None,
            posts_per_week: 2,
            publish_days: vec![5, 1],
            wishes: Some("  ".to_string()),
            ai_provider: None,
            ai_model: None,
            social_network_ids: vec![1, 3],
            rubric_ids: vec![10],
        }
    }

    fn invalid_field(result: Result<NewContentPlan>) -> String {
        match result {
            Err(CadenceError::InvalidInput { field, .. }) => field,
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_plan_applies_defaults() {
        let plan = NewContentPlan::try_from(valid_params()).unwrap();

        assert_eq!(plan.start_date, jiff::civil::date(2024, 3, 1));
        assert_eq!(plan.duration, PlanDuration::OneMonth);
        assert_eq!(plan.publish_days.indices(), vec![1, 5]);
        assert_eq!(plan.ai_provider, AiProvider::OpenAi);
        assert_eq!(plan.ai_model, DEFAULT_AI_MODEL);
        assert_eq!(plan.wishes, None);
        assert_eq!(plan.social_network_ids, vec![1, 3]);
    }

    #[test]
    fn test_non_blank_wishes_are_kept_as_entered() {
        let mut params = valid_params();
        params.wishes = Some("  лето  ".to_string());
        let plan = NewContentPlan::try_from(params).unwrap();
        assert_eq!(plan.wishes.as_deref(), Some("  лето  "));
    }

    #[test]
    fn test_requires_networks_and_rubrics() {
        let mut params = valid_params();
        params.social_network_ids.clear();
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "social_network_ids");

        let mut params = valid_params();
        params.rubric_ids.clear();
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "rubric_ids");
    }

    #[test]
    fn test_rejects_duplicate_network() {
        let mut params = valid_params();
        params.social_network_ids = vec![2, 2];
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "social_network_ids");
    }

    #[test]
    fn test_posts_per_week_bounds() {
        let mut params = valid_params();
        params.posts_per_week = 0;
        params.publish_days.clear();
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "posts_per_week");

        let mut params = valid_params();
        params.posts_per_week = 8;
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "posts_per_week");
    }

    #[test]
    fn test_publish_days_must_match_cadence() {
        let mut params = valid_params();
        params.publish_days = vec![1, 3, 5];
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "publish_days");

        let mut params = valid_params();
        params.publish_days = vec![1, 7];
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "publish_days");
    }

    #[test]
    fn test_model_must_belong_to_provider() {
        let mut params = valid_params();
        params.ai_provider = Some("anthropic".to_string());
        params.ai_model = Some("gpt-4o".to_string());
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "ai_model");

        let mut params = valid_params();
        params.ai_provider = Some("anthropic".to_string());
        params.ai_model = Some("claude-sonnet-4".to_string());
        assert!(NewContentPlan::try_from(params).is_ok());

        let mut params = valid_params();
        params.ai_provider = Some("anthropic".to_string());
        let plan = NewContentPlan::try_from(params).unwrap();
        assert_eq!(plan.ai_model, "claude-sonnet-4-5");
    }

    #[test]
    fn test_rejects_malformed_start_date() {
        let mut params = valid_params();
        params.start_date = "01.03.2024".to_string();
        assert_eq!(invalid_field(NewContentPlan::try_from(params)), "start_date");
    }

    #[test]
    fn test_update_post_parses_time_and_status() {
        let request = UpdatePostRequest::try_from(params::UpdatePost {
            id: 1,
            publish_time: Some("09:30".to_string()),
            status: Some("approved".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(request.publish_time, Some(Some(jiff::civil::time(9, 30, 0, 0))));
        assert_eq!(request.status, Some(PostStatus::Approved));
        assert!(!request.is_empty());
    }

    #[test]
    fn test_update_post_blank_time_clears() {
        let request = UpdatePostRequest::try_from(params::UpdatePost {
            id: 1,
            publish_time: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(request.publish_time, Some(None));
    }

    #[test]
    fn test_update_post_rejects_bad_values() {
        let result = UpdatePostRequest::try_from(params::UpdatePost {
            id: 1,
            status: Some("archived".to_string()),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(CadenceError::InvalidInput { field, .. }) if field == "status"
        ));

        let result = UpdatePostRequest::try_from(params::UpdatePost {
            id: 1,
            title: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
