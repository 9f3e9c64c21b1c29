//! Advisor MCP Server Implementation
//!
//! Exposes the fact lookups as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tracing::info;

use crate::data::FactProvider;
use crate::tools::status::StatusTracker;
use crate::tools::{to_tool_output, FactLookup};

/// Advisor MCP Service
#[derive(Clone)]
pub struct AdvisorService {
    status_tracker: Arc<StatusTracker>,
    lookup: FactLookup,
    tool_router: ToolRouter<AdvisorService>,
}

impl AdvisorService {
    pub fn new(provider: Arc<dyn FactProvider>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(provider.clone())),
            lookup: FactLookup::new(provider),
            tool_router: Self::tool_router(),
        }
    }

    fn nutrition_json(&self, food_item: &str) -> Result<String, McpError> {
        let result = self.lookup.lookup_nutrition(food_item);
        let output = to_tool_output(&result)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        serde_json::to_string_pretty(&output)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))
    }

    fn exercise_json(&self, exercise_name: &str) -> Result<String, McpError> {
        let result = self.lookup.lookup_exercise(exercise_name);
        let output = to_tool_output(&result)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        serde_json::to_string_pretty(&output)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))
    }

    fn status_json(&self) -> Result<String, McpError> {
        let status = self.status_tracker.get_status();
        serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetNutritionalInfoParams {
    /// Name of the food item (e.g., "apple", "banana")
    pub food_item: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetExerciseDataParams {
    /// Name of the exercise (e.g., "push-ups", "jumping jacks")
    pub exercise_name: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl AdvisorService {
    #[tool(description = "Get the current status of the advisor service including build info, reference data source, and process information")]
    fn advisor_status(&self) -> Result<CallToolResult, McpError> {
        let json = self.status_json()?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for answering fitness and diet questions with the lookup tools. Call this when starting a session or when unsure how to read tool results.")]
    fn advisor_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ADVISOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ADVISOR_INSTRUCTIONS)]))
    }

    #[tool(description = "Get nutritional information (calories, protein, carbs, fat) for a food item. Matching is exact and case-insensitive. Returns an object with an 'error' key if the food is unknown.")]
    fn get_nutritional_info(&self, Parameters(p): Parameters<GetNutritionalInfoParams>) -> Result<CallToolResult, McpError> {
        info!(food_item = %p.food_item, "get_nutritional_info");
        let json = self.nutrition_json(&p.food_item)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get details for an exercise (category, calories burned in 30 minutes for an average person, instructions). Matching is exact and case-insensitive. Returns an object with an 'error' key if the exercise is unknown.")]
    fn get_exercise_data(&self, Parameters(p): Parameters<GetExerciseDataParams>) -> Result<CallToolResult, McpError> {
        info!(exercise_name = %p.exercise_name, "get_exercise_data");
        let json = self.exercise_json(&p.exercise_name)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for AdvisorService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: crate::build_info::NAME.into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Fitness Diet Advisor".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Fitness Diet Advisor - nutrition and exercise facts. \
                 Call advisor_instructions for usage. \
                 Nutrition: get_nutritional_info(food_item). \
                 Exercise: get_exercise_data(exercise_name). \
                 A result with an 'error' key means the item is not in the reference data. \
                 Status: advisor_status."
                    .into(),
            ),
        }
    }
}
