//! Catalog of text-generation models a plan can be configured with.

use serde::Serialize;

use super::AiProvider;

/// A selectable text-generation model.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AiModel {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: AiProvider,
    pub description: &'static str,
}

/// Default model for new plans.
pub const DEFAULT_AI_MODEL: &str = "gpt-5.2";

/// Default model of the Anthropic provider.
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5";

/// All models that can be attached to a content plan.
pub const AI_MODELS: &[AiModel] = &[
    AiModel {
        id: "gpt-5.2",
        name: "GPT-5.2",
        provider: AiProvider::OpenAi,
        description: "Лучший для контента",
    },
    AiModel {
        id: "gpt-5.1",
        name: "GPT-5.1",
        provider: AiProvider::OpenAi,
        description: "Стабильный и быстрый",
    },
    AiModel {
        id: "gpt-4o",
        name: "GPT-4o",
        provider: AiProvider::OpenAi,
        description: "Мультимодальный",
    },
    AiModel {
        id: "o3",
        name: "o3",
        provider: AiProvider::OpenAi,
        description: "Глубокое рассуждение",
    },
    AiModel {
        id: "o4-mini",
        name: "o4-mini",
        provider: AiProvider::OpenAi,
        description: "Бюджетный с рассуждением",
    },
    AiModel {
        id: "claude-opus-4-6",
        name: "Claude Opus 4.6",
        provider: AiProvider::Anthropic,
        description: "Наилучшее качество",
    },
    AiModel {
        id: "claude-sonnet-4-5",
        name: "Claude Sonnet 4.5",
        provider: AiProvider::Anthropic,
        description: "Кодинг + контент",
    },
    AiModel {
        id: "claude-opus-4-5",
        name: "Claude Opus 4.5",
        provider: AiProvider::Anthropic,
        description: "Универсальный",
    },
    AiModel {
        id: "claude-sonnet-4",
        name: "Claude Sonnet 4",
        provider: AiProvider::Anthropic,
        description: "Базовый",
    },
];

/// Looks up a model by provider and id.
pub fn find_ai_model(provider: AiProvider, id: &str) -> Option<&'static AiModel> {
    AI_MODELS
        .iter()
        .find(|model| model.provider == provider && model.id == id)
}

/// Model used when a plan names a provider but no model.
pub fn default_ai_model(provider: AiProvider) -> &'static str {
    match provider {
        AiProvider::OpenAi => DEFAULT_AI_MODEL,
        AiProvider::Anthropic => DEFAULT_ANTHROPIC_MODEL,
    }
}
