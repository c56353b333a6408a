//! Embedded template catalog and rendering
//!
//! This module provides:
//! - The static catalog mapping a `ProjectConfig` to the ordered file plan
//! - Placeholder substitution for template paths and bodies
//!
//! Template bodies live as text files under `templates/` in this crate and
//! are embedded at compile time, so the binary carries everything it needs.

pub mod catalog;
pub mod render;

pub use catalog::{context, plan};
pub use render::{render, RenderContext};

/// A single file in the generated project
///
/// Both `path` and `body` may contain `{{ placeholder }}` tokens that the
/// renderer fills in from the invocation's [`RenderContext`].
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    /// Output path relative to the project root
    pub path: &'static str,
    /// Template body
    pub body: &'static str,
}
