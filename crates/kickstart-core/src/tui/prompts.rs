//! Interactive option resolution and pipeline orchestration

use crate::config::{Database, ProjectConfig, ProjectType, ViewStyle};
use crate::{bootstrap, report, secret, templates, validate, writer};
use anyhow::Result;

/// CLI arguments for the create command
///
/// Enum fields left as `None` are resolved through interactive prompts;
/// booleans never prompt and fall back to their documented defaults
/// (venv on, docker off).
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Name of the project to create
    pub name: String,

    /// Project type: mvp or api
    pub project_type: Option<ProjectType>,

    /// View style: fbv or cbv
    pub views: Option<ViewStyle>,

    /// Database backend: sqlite or postgresql
    pub database: Option<Database>,

    /// Generate Docker configuration
    pub docker: bool,

    /// Skip virtualenv creation and dependency install
    pub no_venv: bool,
}

/// Run the full generation pipeline
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("Django Kickstart")?;

    // Step 1: Validate before prompting; a bad name or occupied target
    // should fail fast
    validate::validate_project_name(&args.name)?;
    let target = std::env::current_dir()?.join(&args.name);
    validate::validate_target(&target)?;

    // Step 2: Resolve the remaining options
    let config = resolve_options(args)?;

    cliclack::log::info(format!(
        "Creating project '{}'\n  Type:     {}\n  Views:    {}\n  Database: {}",
        config.name,
        config.project_type.description(),
        config.views.description(),
        config.database.description(),
    ))?;

    // Step 3: Select templates and build the substitution context
    let plan = templates::plan(&config);
    let secret_key = secret::generate_secret_key();
    let ctx = templates::context(&config, &secret_key);

    // Step 4: Write the tree
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    match writer::write_project(&target, &plan, &ctx).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                target.display()
            ));
        }
        Err(err) => {
            spinner.stop("Generation failed");
            return Err(err.into());
        }
    }

    // Step 5: Optional environment bootstrap; failure is a warning, the
    // project tree is already complete
    let mut bootstrap_ok = false;
    if config.venv {
        cliclack::log::step("Setting up virtual environment...")?;
        match bootstrap::bootstrap(&target).await {
            Ok(()) => {
                bootstrap_ok = true;
                cliclack::log::success("Virtual environment ready, dependencies installed")?;
            }
            Err(err) => {
                cliclack::log::warning(format!(
                    "{err}\nYour project files are fine. Finish setup manually:\n  {} -m venv venv\n  {}\n  pip install -r requirements.txt",
                    if cfg!(windows) { "python" } else { "python3" },
                    bootstrap::activate_hint(),
                ))?;
            }
        }
    }

    // Step 6: Show next steps
    print_next_steps(&config, bootstrap_ok)?;

    Ok(())
}

/// Merge CLI flags and prompt answers into a complete `ProjectConfig`
fn resolve_options(args: CreateArgs) -> Result<ProjectConfig> {
    let interactive = console::user_attended();
    if !interactive {
        let mut missing = Vec::new();
        if args.project_type.is_none() {
            missing.push("--type");
        }
        if args.views.is_none() {
            missing.push("--views");
        }
        if args.database.is_none() {
            missing.push("--db");
        }
        if !missing.is_empty() {
            anyhow::bail!(
                "not running interactively; pass the missing flags: {}",
                missing.join(", ")
            );
        }
    }

    let project_type = match args.project_type {
        Some(value) => value,
        None => cliclack::select("Select project type")
            .item(ProjectType::Mvp, ProjectType::Mvp.description(), "")
            .item(ProjectType::Api, ProjectType::Api.description(), "")
            .initial_value(ProjectType::Mvp)
            .interact()?,
    };

    let views = match args.views {
        Some(value) => value,
        None => cliclack::select("Select view style")
            .item(ViewStyle::Fbv, ViewStyle::Fbv.description(), "")
            .item(ViewStyle::Cbv, ViewStyle::Cbv.description(), "")
            .initial_value(ViewStyle::Fbv)
            .interact()?,
    };

    let database = match args.database {
        Some(value) => value,
        None => cliclack::select("Select database")
            .item(Database::Sqlite, Database::Sqlite.description(), "")
            .item(Database::Postgresql, Database::Postgresql.description(), "")
            .initial_value(Database::Sqlite)
            .interact()?,
    };

    Ok(ProjectConfig {
        name: args.name,
        project_type,
        views,
        database,
        docker: args.docker,
        venv: !args.no_venv,
    })
}

fn print_next_steps(config: &ProjectConfig, bootstrap_ok: bool) -> Result<()> {
    let steps = report::next_steps(config, bootstrap_ok);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  Visit");
    for url in report::endpoints(config) {
        println!("    {url}");
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
