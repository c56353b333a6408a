//! Project configuration resolved from CLI flags and interactive prompts

use clap::ValueEnum;
use std::fmt;

/// Django app name used in every generated project
pub const APP_NAME: &str = "core";

/// Project flavor: server-rendered templates or a DRF API
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectType {
    Mvp,
    Api,
}

impl ProjectType {
    /// Description shown in prompts and the configuration summary
    pub fn description(&self) -> &'static str {
        match self {
            ProjectType::Mvp => "MVP - Traditional Django with HTML templates",
            ProjectType::Api => "API - Django REST Framework",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::Mvp => write!(f, "mvp"),
            ProjectType::Api => write!(f, "api"),
        }
    }
}

/// Function-based or class-based request handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewStyle {
    Fbv,
    Cbv,
}

impl ViewStyle {
    pub fn description(&self) -> &'static str {
        match self {
            ViewStyle::Fbv => "Function-Based Views (FBV)",
            ViewStyle::Cbv => "Class-Based Views (CBV)",
        }
    }
}

impl fmt::Display for ViewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewStyle::Fbv => write!(f, "fbv"),
            ViewStyle::Cbv => write!(f, "cbv"),
        }
    }
}

/// Database backend wired into the generated settings module
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Database {
    Sqlite,
    Postgresql,
}

impl Database {
    pub fn description(&self) -> &'static str {
        match self {
            Database::Sqlite => "SQLite (great for development)",
            Database::Postgresql => "PostgreSQL (recommended for production)",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Database::Sqlite => write!(f, "sqlite"),
            Database::Postgresql => write!(f, "postgresql"),
        }
    }
}

/// Fully resolved configuration for one invocation
///
/// Built once by the option resolver and never mutated afterwards. Every
/// downstream stage (catalog, writer, bootstrapper, reporter) reads from it.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Project name; validated against the identifier pattern before use
    pub name: String,
    pub project_type: ProjectType,
    pub views: ViewStyle,
    pub database: Database,
    /// Generate Dockerfile / compose / dockerignore files
    pub docker: bool,
    /// Create a virtualenv and install dependencies after generation
    pub venv: bool,
}

impl ProjectConfig {
    /// Name of the generated Django app (fixed, not user-selectable)
    pub fn app_name(&self) -> &'static str {
        APP_NAME
    }
}
