//! Fitness Diet Advisor
//!
//! An MCP server answering nutrition and exercise fact lookups.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fitness_advisor::build_info;
use fitness_advisor::data;
use fitness_advisor::mcp::AdvisorService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr to not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitness_advisor=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let data_path = data::get_data_path();
    match &data_path {
        Some(path) => eprintln!("Reference data: {}", path.display()),
        None => eprintln!("Reference data: built-in"),
    }

    let provider = data::load_provider(data_path.as_deref())?;
    eprintln!(
        "Loaded {} foods, {} exercises",
        provider.food_count(),
        provider.exercise_count()
    );

    let service = AdvisorService::new(provider);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
