//! Configuration for the autoplan agent.
//!
//! Settings come from a JSON config file (home directory, falling back
//! to the working directory), then environment variable overrides, then
//! validation of the required fields. A missing config file is a fatal
//! startup error.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{Config, LlmSettings, ModelSettings};
