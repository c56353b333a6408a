//! Django Kickstart CLI - Scaffold production-ready Django projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use kickstart_core::tui::CreateArgs;
use kickstart_core::{Database, ProjectType, ViewStyle};

#[derive(Parser, Debug)]
#[command(name = "django-kickstart")]
#[command(about = "Scaffold production-ready Django projects in seconds")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Django project scaffold
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the project to create
    pub name: String,

    /// Project type: mvp (templates) or api (DRF)
    #[arg(long = "type", value_enum)]
    pub project_type: Option<ProjectType>,

    /// View style: fbv (function-based) or cbv (class-based)
    #[arg(long = "views", value_enum)]
    pub views: Option<ViewStyle>,

    /// Database: sqlite or postgresql
    #[arg(long = "db", value_enum)]
    pub database: Option<Database>,

    /// Generate Dockerfile, docker-compose.yml and .dockerignore
    #[arg(long)]
    pub docker: bool,

    /// Skip virtual environment creation and dependency install
    #[arg(long = "no-venv")]
    pub no_venv: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            project_type: args.project_type,
            views: args.views,
            database: args.database,
            docker: args.docker,
            no_venv: args.no_venv,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Command::Create(create_args) => {
            let result = kickstart_core::run(create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
