//! Advisor Status Tool
//!
//! Provides runtime status information about the advisor service.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::data::FactProvider;

/// Usage guide for assistants calling the lookup tools
pub const ADVISOR_INSTRUCTIONS: &str = r#"
# Fitness Diet Advisor Instructions

You are answering questions about nutrition and exercise. Use the lookup
tools for facts; do not invent values.

## Tools

| Tool | Use when | Parameter |
|------|----------|-----------|
| `get_nutritional_info` | The user asks about calories or macros of a food | `food_item` |
| `get_exercise_data` | The user asks how to do an exercise or what it burns | `exercise_name` |

## Reading results

- A found food returns `food`, `calories`, `protein`, `carbs`, `fat`.
  Macronutrients are strings with units (e.g. `"0.5g"`).
- A found exercise returns `exercise`, `category` (`strength` or `cardio`),
  `calories_burned_30min_avg_person` and `instructions`.
- A result containing an `error` key means the item is not in the reference
  data. Tell the user plainly that you have no data for it.

## Matching

Names match exactly, ignoring letter case. Pass the name without extra
words or surrounding spaces: `"banana"`, not `"a banana please"`.

Be friendly and give clear, concise answers based on the tool outputs.
"#;

/// Status information
#[derive(Debug, Serialize)]
pub struct AdvisorStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub reference_source: String,
    pub food_count: usize,
    pub exercise_count: usize,
}

/// Status tracker
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    provider: Arc<dyn FactProvider>,
}

impl StatusTracker {
    pub fn new(provider: Arc<dyn FactProvider>) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            provider,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> AdvisorStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        AdvisorStatus {
            name: build_info.name,
            version: build_info.version,
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            reference_source: self.provider.source(),
            food_count: self.provider.food_count(),
            exercise_count: self.provider.exercise_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceTables;

    #[test]
    fn test_status_reports_reference_tables() {
        let tracker = StatusTracker::new(Arc::new(ReferenceTables));
        let status = tracker.get_status();

        assert_eq!(status.reference_source, "built-in");
        assert_eq!(status.food_count, 2);
        assert_eq!(status.exercise_count, 2);
        assert_eq!(status.process_id, std::process::id());
        assert!(DateTime::parse_from_rfc3339(&status.started_at).is_ok());
    }

    #[test]
    fn test_instructions_name_both_tools() {
        assert!(ADVISOR_INSTRUCTIONS.contains("get_nutritional_info"));
        assert!(ADVISOR_INSTRUCTIONS.contains("get_exercise_data"));
    }
}
