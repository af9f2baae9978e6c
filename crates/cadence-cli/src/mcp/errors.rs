//! Mapping of planner errors onto MCP error codes.

use cadence_core::CadenceError;
use rmcp::ErrorData;

/// Converts a planner error into an MCP error, prefixed with `message`.
///
/// Caller mistakes become `invalid_params`, missing resources become
/// `resource_not_found` and everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &CadenceError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        CadenceError::InvalidInput { .. }
        | CadenceError::Unauthorized
        | CadenceError::GenerationConflict { .. } => ErrorData::invalid_params(text, None),
        e if e.is_not_found() => ErrorData::resource_not_found(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use cadence_core::ContentPlanStatus;
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_conflict_is_invalid_params() {
        let error = CadenceError::GenerationConflict {
            id: 3,
            status: ContentPlanStatus::Completed,
        };
        let mapped = to_mcp_error("Failed to generate posts", &error);
        assert_eq!(mapped.code, ErrorCode::INVALID_PARAMS);
        assert!(mapped.message.contains("cannot be generated while completed"));
    }

    #[test]
    fn test_not_found_maps_to_resource_not_found() {
        let mapped = to_mcp_error("Failed", &CadenceError::PostNotFound { id: 9 });
        assert_eq!(mapped.code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[test]
    fn test_generation_failure_is_internal() {
        let error = CadenceError::generation_failure(
            1,
            CadenceError::Configuration {
                message: "disk full".to_string(),
            },
        );
        let mapped = to_mcp_error("Failed", &error);
        assert_eq!(mapped.code, ErrorCode::INTERNAL_ERROR);
    }
}
