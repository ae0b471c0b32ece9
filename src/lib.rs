/// Handles argument parsing and the CLI workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Generation configuration and the component set.
pub mod config;

/// Writes selected component templates to the destination directory.
pub mod generator;

/// Runtime dependency installation through the host package manager.
pub mod install;

/// User input and interaction handling.
pub mod prompt;

/// Static component templates.
pub mod templates;

/// Constants used throughout the application.
pub mod constants;
