//! Up Robot: robot token listing for organization accounts
//!
//! Resolves a robot by name within an organization, fetches its tokens from the
//! directory services, and renders them with relative creation ages.

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod robot;
