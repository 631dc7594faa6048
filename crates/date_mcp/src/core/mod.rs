//! # Date MCP Server Core
//!
//! This module provides the date, time and location lookups behind the MCP server.
//!
//! ## Features
//! - Current weekday, date and time on the host clock
//! - Current time at named locations
//! - Built-in location table with configurable overrides
//! - Actionable errors for unknown locations
//!
//! ## Modules
//! - `dispatcher`: Routes tool calls to their handlers
//! - `error`: Custom error types and error handling
//! - `locations`: Location name to timezone table
//! - `models`: Data structures for requests and table entries
//! - `prompts`: The prompt catalog
//! - `provider`: Clock-driven date and time operations
//! - `resolver`: Location to timezone resolution
//! - `tools`: Tool catalog and typed tool calls
//! - `utils`: Format constants and timezone detection

pub mod dispatcher;
pub mod error;
pub mod locations;
pub mod models;
pub mod prompts;
pub mod provider;
pub mod resolver;
pub mod tools;
pub mod utils;
