//! Fitness Diet Advisor Library
//!
//! Nutrition and exercise fact lookups, exposed as MCP tools.

pub mod build_info;
pub mod data;
pub mod mcp;
pub mod models;
pub mod tools;
