//! Infrastructure adapters. Implement ports.
//!
//! Filesystem, CLI, and the stdio tool server. Map errors to DomainError.

pub mod cli;
pub mod fs;
pub mod mcp;
