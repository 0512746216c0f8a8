//! HTTP transport implementation.
//!
//! REST-style endpoints over HTTP, mirroring the stdio tool surface. This
//! allows standard HTTP clients (curl, browsers, etc.) to discover and call
//! tools without speaking MCP.
//!
//! Routes:
//! - `GET /health` - health check with server identity
//! - `GET /tools` - list available tool descriptors
//! - `POST /tool/call` - invoke a tool by name with an arguments object

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::tools::ToolError;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let mut app = build_router(server);

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on http://{}", addr);
        info!("  → Health check: GET /health");
        info!("  → List tools:   GET /tools");
        info!("  → Call tool:    POST /tool/call");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the HTTP router for the given server.
///
/// Exposed separately from [`HttpTransport::run`] so tests can drive the
/// router without binding a socket.
pub fn build_router(server: McpServer) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/tools", get(list_tools))
        .route("/tool/call", post(call_tool))
        .with_state(AppState { server })
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "server": state.server.name(),
        "version": state.server.version(),
        "transport": "http"
    }))
}

/// List available tools endpoint.
async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "tools": state.server.list_tools()
    }))
}

/// Call tool endpoint.
///
/// Expects a body of the form `{"name": "...", "arguments": {...}}`. Unknown
/// tool names map to 404; validation and handler failures map to 400 with an
/// in-band error payload.
#[instrument(skip_all)]
async fn call_tool(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let name = body.get("name").and_then(|v| v.as_str());
    let arguments = body.get("arguments");

    let (Some(name), Some(arguments)) = (name, arguments) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Missing required fields: name and arguments"
            })),
        );
    };

    info!("Tool call requested: {}", name);

    match state.server.call_tool(name, arguments.clone()) {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({ "success": true, "result": result })),
        ),
        Err(ToolError::NotFound(_)) => {
            warn!("Unknown tool requested: {}", name);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Unknown tool: {}", name) })),
            )
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": e.to_string() })),
        ),
    }
}
