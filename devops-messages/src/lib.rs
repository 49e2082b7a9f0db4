//! devops-messages
//!
//! Centralized messaging system for the snow-devops CLI.
//! Provides standardized templates and a message builder for user-facing
//! output.

pub mod builder;
pub mod macros;
pub mod messages;
