//! # charmil-init
//!
//! Bootstraps a new command-line project from the charmil starter template.
//!
//! ## Overview
//!
//! `charmil init` clones the starter repository into the current directory,
//! renames its placeholder entry point `cmd/cli` after the new tool, and
//! rewrites every remaining file, substituting `{{.Owner}}`, `{{.Repo}}` and
//! `{{.CliName}}`.
//!
//! Version-control and CI files (`.git`, `.github`, `bin`, ...) are never
//! rendered: a directory whose name is excluded is skipped with everything
//! below it.
//!
//! ## Usage
//!
//! ```bash
//! # Prompt for every value
//! charmil init
//!
//! # Non-interactive
//! charmil init --owner aerogear --repo rhoas-cli --cli-name rhoas
//!
//! # Use a fork of the starter
//! charmil init --template https://github.com/me/starter --branch main
//! ```
//!
//! ## Configuration
//!
//! Configuration can be specified in `.config/charmil.toml` in the working
//! directory or `~/.config/charmil.toml` for user-wide settings.

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration file handling and default settings management
pub mod config;

/// Validated values substituted into templates
pub mod context;

/// Renaming of the starter's placeholder directory
pub mod director;

/// Error types and error handling utilities
pub mod error;

/// Cloning of the template repository
pub mod materializer;

/// Interactive collection of template values
pub mod prompt;

/// Parsing and rendering of `{{.Field}}` templates
pub mod renderer;

/// End-to-end scaffolding workflow
pub mod scaffold;

/// Recursive rendering of a cloned tree with exclusions
pub mod walker;
