//! Utility to run a single fact lookup from the command line
//!
//! Usage: lookup <nutrition|exercise> <name...>

use fitness_advisor::data;
use fitness_advisor::tools::{to_tool_output, FactLookup};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let category = args.next().ok_or("usage: lookup <nutrition|exercise> <name...>")?;
    // Multi-word names arrive as separate args
    let name = args.collect::<Vec<_>>().join(" ");

    let data_path = data::get_data_path();
    let lookup = FactLookup::new(data::load_provider(data_path.as_deref())?);

    let output = match category.as_str() {
        "nutrition" | "food" => to_tool_output(&lookup.lookup_nutrition(&name))?,
        "exercise" => to_tool_output(&lookup.lookup_exercise(&name))?,
        other => return Err(format!("unknown category: {}", other).into()),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
