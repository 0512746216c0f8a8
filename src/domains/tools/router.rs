//! Tool Router - builds the rmcp ToolRouter from the registered tools.
//!
//! The router backs the stdio transport; each tool knows how to create its
//! own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::SubmitExpenseTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(SubmitExpenseTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "expense-policy_submitExpense");
    }

    #[test]
    fn test_descriptor_required_fields() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();

        let required = tools[0]
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .expect("schema should list required fields");

        let mut names: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["amount", "category", "date", "description"]);
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router advertise the same tools
        let registry = ToolRegistry::new();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
