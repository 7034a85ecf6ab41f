// Rust guideline compliant 2026-10-19

//! Roster CLI Application
//!
//! Command-line interface for the Roster student records tool.

use clap::Parser;
use roster_app::{AppError, ErrorEnvelope, Workspace};
use roster_cli::commands::{self, FileFormat};
use roster_cli::logging::{self, DEFAULT_LOG_LEVEL};
use roster_cli::output_mode::{is_json_output, set_color_output, set_json_output};
use roster_cli::terminal::print_error;
use roster_cli::{create_formatter, should_use_color, OutputFormatter};
use roster_core::ReferenceKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Roster: student records administration",
    long_about = "Roster keeps student records, their faculties, programs and statuses in a local .roster directory, validates them against configurable rules and issues status certificates.",
    after_help = "Examples:\n  roster init\n  roster add SV001 --name Alice --dob 01/01/2000 --gender Female --faculty FL --course 2020 --program \"Advanced Program\" --email alice@student.university.edu.vn --phone +84123456789\n  roster search Ali --faculty FL\n  roster update SV001 --status Graduated\n  roster rules set Absent Active,Leave\n  roster config set deleteTimeLimit 30\n  roster certificate SV001 --purpose \"Scholarship application\" --valid-until 31/12/2026\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Data directory (defaults to ./.roster)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Operation log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Roster workspace
    Init,

    /// Add a student
    Add(commands::add::AddArgs),

    /// Show one student
    Show {
        /// Student ID
        id: String,
    },

    /// List students
    List {
        /// Only students of this faculty
        #[arg(long)]
        faculty: Option<String>,

        /// Only students of this program
        #[arg(long)]
        program: Option<String>,

        /// Only students with this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Search students by name
    Search {
        /// Part of the name (empty matches everyone)
        #[arg(default_value = "")]
        name: String,

        /// Only students of this faculty
        #[arg(long)]
        faculty: Option<String>,
    },

    /// Update a student
    Update(commands::update::UpdateArgs),

    /// Remove a recently added student
    Remove {
        /// Student ID
        id: String,
    },

    /// Import students from CSV or JSON
    Import {
        /// Input file
        path: PathBuf,

        /// File format (defaults to the file extension)
        #[arg(long = "file-format", value_enum)]
        file_format: Option<FileFormat>,
    },

    /// Export students to CSV or JSON
    Export {
        /// Output file
        path: PathBuf,

        /// File format (defaults to the file extension)
        #[arg(long = "file-format", value_enum)]
        file_format: Option<FileFormat>,
    },

    /// Manage faculties
    Faculty {
        #[command(subcommand)]
        action: commands::reference::ReferenceAction,
    },

    /// Manage programs
    Program {
        #[command(subcommand)]
        action: commands::reference::ReferenceAction,
    },

    /// Manage statuses
    Status {
        #[command(subcommand)]
        action: commands::reference::ReferenceAction,
    },

    /// Manage status transition rules
    Rules {
        #[command(subcommand)]
        action: commands::rules::RulesAction,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },

    /// Issue a student status certificate
    Certificate(commands::certificate::CertificateArgs),

    /// Run integrity checks
    Doctor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let json = cli.json || matches!(cli.format, Some(OutputFormat::Json));
    set_json_output(json);
    set_color_output(!cli.no_color && should_use_color());
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if json => "json",
        None => "table",
    };
    let formatter = create_formatter(format);

    match run(cli, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, formatter.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.as_deref();
    let _guard = start_logging(data_dir, &cli.log_level)?;

    match cli.command {
        Some(Commands::Init) => {
            commands::init::execute(data_dir)?;
        }
        Some(Commands::Add(args)) => {
            commands::add::execute(args, data_dir, formatter)?;
        }
        Some(Commands::Show { id }) => {
            commands::show::execute(&id, data_dir, formatter)?;
        }
        Some(Commands::List {
            faculty,
            program,
            status,
        }) => {
            let filter = commands::list::ListFilter {
                faculty,
                program,
                status,
            };
            commands::list::execute(&filter, data_dir, formatter)?;
        }
        Some(Commands::Search { name, faculty }) => {
            commands::search::execute(&name, faculty.as_deref(), data_dir, formatter)?;
        }
        Some(Commands::Update(args)) => {
            commands::update::execute(args, data_dir, formatter)?;
        }
        Some(Commands::Remove { id }) => {
            commands::remove::execute(&id, data_dir)?;
        }
        Some(Commands::Import { path, file_format }) => {
            commands::import::execute(&path, file_format, data_dir)?;
        }
        Some(Commands::Export { path, file_format }) => {
            commands::export::execute(&path, file_format, data_dir)?;
        }
        Some(Commands::Faculty { action }) => {
            commands::reference::execute(ReferenceKind::Faculty, action, data_dir, formatter)?;
        }
        Some(Commands::Program { action }) => {
            commands::reference::execute(ReferenceKind::Program, action, data_dir, formatter)?;
        }
        Some(Commands::Status { action }) => {
            commands::reference::execute(ReferenceKind::Status, action, data_dir, formatter)?;
        }
        Some(Commands::Rules { action }) => {
            commands::rules::execute(action, data_dir)?;
        }
        Some(Commands::Config { action }) => {
            commands::config::execute(action, data_dir)?;
        }
        Some(Commands::Certificate(args)) => {
            commands::certificate::execute(args, data_dir)?;
        }
        Some(Commands::Doctor) => {
            commands::doctor::execute(data_dir)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Logs to the workspace's `roster.log` once the workspace exists.
fn start_logging(data_dir: Option<&Path>, level: &str) -> anyhow::Result<Option<WorkerGuard>> {
    logging::parse_log_level(level)?;
    let Ok(workspace) = Workspace::at(commands::data_dir_path(data_dir)?) else {
        return Ok(None);
    };
    Ok(Some(logging::init_tracing(&workspace.log_path(), level)?))
}

fn report_error(err: &anyhow::Error, formatter: &dyn OutputFormatter) {
    if !is_json_output() {
        print_error(&format!("{err:#}"));
        return;
    }

    let rendered = err
        .downcast_ref::<AppError>()
        .and_then(|app| serde_json::to_string_pretty(&ErrorEnvelope::from_error(app)).ok())
        .unwrap_or_else(|| formatter.format_error(&format!("{err:#}")));
    eprintln!("{rendered}");
}
