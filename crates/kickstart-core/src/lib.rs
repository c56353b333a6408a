//! Kickstart Core - Library for scaffolding Django projects
//!
//! This library implements the full generation pipeline behind the
//! `django-kickstart` CLI: option resolution, validation, template
//! selection, secret key generation, file writing, optional virtualenv
//! bootstrap, and next-step reporting.
//!
//! # Architecture
//!
//! The pipeline is a linear sequence of small modules:
//!
//! - **validate** - project name pattern and target directory checks
//! - **templates** - static catalog keyed by the configuration, plus
//!   placeholder rendering
//! - **secret** - fresh 50-character secret key per invocation
//! - **writer** - renders and writes the tree, enforcing that every path
//!   stays inside the project root
//! - **bootstrap** - optional venv + pip install subprocess step
//! - **report** - next-step instructions for the chosen configuration
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive flow

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod report;
pub mod secret;
pub mod templates;
pub mod validate;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Database, ProjectConfig, ProjectType, ViewStyle, APP_NAME};
pub use error::KickstartError;
pub use templates::{context, plan, render, FileSpec, RenderContext};
pub use writer::write_project;

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};
