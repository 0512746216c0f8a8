//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when the http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use super::definitions::SubmitExpenseTool;

#[cfg(feature = "http")]
use super::error::ToolError;

/// Tool registry - manages all available tools.
///
/// Constructed explicitly and handed to whichever transport needs it; there
/// is no process-wide singleton. Name matching is exact and case-sensitive.
#[derive(Clone, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![SubmitExpenseTool::NAME]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// Unknown names fail with [`ToolError::NotFound`], which the HTTP layer
    /// maps to 404; anything else a handler returns is downgraded to an
    /// in-band error payload.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            SubmitExpenseTool::NAME => SubmitExpenseTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        assert_eq!(names, vec!["expense-policy_submitExpense"]);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_submit_expense() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool(
            "expense-policy_submitExpense",
            serde_json::json!({
                "amount": 12.0,
                "category": "travel",
                "date": "2024-01-02",
                "description": "Taxi"
            }),
        );
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new();
        let err = registry
            .call_tool("bogus", serde_json::json!({}))
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert_eq!(err.to_string(), "Unknown tool: bogus");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_name_match_is_case_sensitive() {
        let registry = ToolRegistry::new();
        let err = registry
            .call_tool("Expense-Policy_submitExpense", serde_json::json!({}))
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_unknown_tool_distinct_from_validation_error() {
        let registry = ToolRegistry::new();

        let not_found = registry.call_tool("bogus", serde_json::json!({})).unwrap_err();
        let invalid = registry
            .call_tool("expense-policy_submitExpense", serde_json::json!({}))
            .unwrap_err();

        assert!(matches!(not_found, ToolError::NotFound(_)));
        assert!(matches!(invalid, ToolError::InvalidArguments(_)));
    }
}
