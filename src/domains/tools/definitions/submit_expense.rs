//! Expense submission tool definition.
//!
//! Simulates submitting an expense to a reimbursement system: the handler
//! fabricates an identifier and a timestamp and acknowledges the submission.
//! Nothing is persisted; every submission is ephemeral.
//!
//! The advertised description claims policy validation and PII redaction,
//! but no such logic exists in the handler. The description text is kept
//! as-is because it is what agents discover and act on today.

use chrono::Utc;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

#[cfg(feature = "http")]
use super::super::error::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the expense submission tool.
///
/// All four fields are required; arguments are parsed into this struct
/// before the handler runs, so absent or wrong-typed fields fail validation
/// instead of flowing through as garbage.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmitExpenseParams {
    /// Expense amount in dollars.
    pub amount: f64,

    /// Category of the expense.
    pub category: ExpenseCategory,

    /// Date of expense in YYYY-MM-DD format.
    pub date: String,

    /// Description of the expense (with sensitive information redacted).
    pub description: String,
}

/// Expense categories accepted by the reimbursement system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Meals,
    Travel,
    OfficeSupplies,
    Other,
}

/// Processing status of a submitted expense.
///
/// Only `Submitted` is produced today. `PendingReview` and `Rejected` model
/// states a future policy pipeline could assign; they are kept so the wire
/// contract does not change when that pipeline lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    Submitted,
    PendingReview,
    Rejected,
}

/// Result of a successful expense submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitExpenseResult {
    /// Generated identifier, unique with high probability only.
    pub expense_id: String,

    /// Processing status. Always `submitted` in current behavior.
    pub status: ExpenseStatus,

    /// Human-readable confirmation interpolating the expense id.
    pub message: String,

    /// ISO-8601 submission timestamp.
    pub submitted_at: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Expense submission tool - files an expense and returns an acknowledgment.
pub struct SubmitExpenseTool;

impl SubmitExpenseTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "expense-policy_submitExpense";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Submits an expense for reimbursement after policy validation and PII redaction";

    /// Execute the tool logic.
    ///
    /// Infallible: any well-typed request is accepted as-is. Out-of-range
    /// amounts, malformed dates, and empty descriptions all pass silently.
    #[instrument(skip_all, fields(category = ?params.category, amount = params.amount))]
    pub fn execute(params: &SubmitExpenseParams) -> SubmitExpenseResult {
        info!(
            "Submitting expense: ${} ({:?}) on {} - {}",
            params.amount, params.category, params.date, params.description
        );

        let expense_id = generate_expense_id();

        let message = format!(
            "Expense successfully submitted! Your expense ID is {}. \
             You will receive reimbursement within 5-7 business days.",
            expense_id
        );

        // submitted_at is captured independently of the clock read inside the
        // id, so the two may disagree by a few milliseconds.
        let result = SubmitExpenseResult {
            expense_id,
            status: ExpenseStatus::Submitted,
            message,
            submitted_at: Utc::now().to_rfc3339(),
        };

        info!("Expense {} submitted successfully", result.expense_id);

        result
    }

    /// HTTP handler for this tool (for HTTP transport).
    ///
    /// Parses the raw arguments object into typed params, then executes.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: SubmitExpenseParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&params);

        serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SubmitExpenseParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    ///
    /// The successful result is serialized as pretty-printed JSON text
    /// content. Handler failures would be downgraded to an in-band error
    /// result, but the handler has no failure path today.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: SubmitExpenseParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let result = Self::execute(&params);
                let text = serde_json::to_string_pretty(&result)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Generate an expense identifier of the form `EXP-<millis>-<SUFFIX>`.
///
/// The suffix is a short random alphanumeric string, uppercased. Uniqueness
/// is probabilistic only; there is no collision detection.
fn generate_expense_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
    format!("EXP-{}-{}", millis, suffix)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> SubmitExpenseParams {
        SubmitExpenseParams {
            amount: 42.50,
            category: ExpenseCategory::Meals,
            date: "2024-03-15".to_string(),
            description: "Lunch with client".to_string(),
        }
    }

    fn assert_id_shape(id: &str) {
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3, "expected EXP-<millis>-<suffix>, got {}", id);
        assert_eq!(parts[0], "EXP");
        assert!(!parts[1].is_empty());
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert!(!parts[2].is_empty());
        assert!(
            parts[2]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_execute_submits() {
        let result = SubmitExpenseTool::execute(&sample_params());

        assert_eq!(result.status, ExpenseStatus::Submitted);
        assert_id_shape(&result.expense_id);
        assert!(result.message.contains(&result.expense_id));
    }

    #[test]
    fn test_submitted_at_is_iso8601() {
        let result = SubmitExpenseTool::execute(&sample_params());
        assert!(chrono::DateTime::parse_from_rfc3339(&result.submitted_at).is_ok());
    }

    #[test]
    fn test_ids_are_not_idempotent() {
        let first = SubmitExpenseTool::execute(&sample_params());
        let second = SubmitExpenseTool::execute(&sample_params());
        assert_ne!(first.expense_id, second.expense_id);
    }

    #[test]
    fn test_invalid_input_accepted_silently() {
        // No range or format validation: negative amounts, malformed dates
        // and empty descriptions all go through.
        let params = SubmitExpenseParams {
            amount: -10.0,
            category: ExpenseCategory::Other,
            date: "not-a-date".to_string(),
            description: String::new(),
        };

        let result = SubmitExpenseTool::execute(&params);
        assert_eq!(result.status, ExpenseStatus::Submitted);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_value(ExpenseStatus::PendingReview).unwrap();
        assert_eq!(json, serde_json::json!("pending_review"));
    }

    #[test]
    fn test_category_parses_snake_case() {
        let category: ExpenseCategory = serde_json::from_value(serde_json::json!("office_supplies")).unwrap();
        assert_eq!(category, ExpenseCategory::OfficeSupplies);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_success() {
        let args = serde_json::json!({
            "amount": 42.50,
            "category": "meals",
            "date": "2024-03-15",
            "description": "Lunch with client"
        });

        let result = SubmitExpenseTool::http_handler(args).unwrap();

        assert_eq!(result["status"], "submitted");
        let id = result["expense_id"].as_str().unwrap();
        assert_id_shape(id);
        assert!(result["message"].as_str().unwrap().contains(id));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_field() {
        let args = serde_json::json!({
            "amount": 10.0,
            "category": "travel",
            "date": "2024-03-15"
        });

        let err = SubmitExpenseTool::http_handler(args).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_wrong_type() {
        let args = serde_json::json!({
            "amount": "forty-two",
            "category": "meals",
            "date": "2024-03-15",
            "description": "Lunch"
        });

        let err = SubmitExpenseTool::http_handler(args).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_unknown_category() {
        let args = serde_json::json!({
            "amount": 10.0,
            "category": "entertainment",
            "date": "2024-03-15",
            "description": "Tickets"
        });

        assert!(SubmitExpenseTool::http_handler(args).is_err());
    }
}
