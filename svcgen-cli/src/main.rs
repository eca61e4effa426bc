use std::path::PathBuf;

use clap::{Parser, Subcommand};
use svcgen_cli::commands::{self, generate::GenerateArgs};
use svcgen_cli::logging;

#[derive(Parser)]
#[command(name = "svcgen", version, about = "svcgen: generate CRUD services from entity manifests")]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one service file per entity
    Generate {
        /// Path to the entity manifest (YAML)
        manifest: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = "src/services")]
        out: PathBuf,
        /// Configuration profile (overridden by SVCGEN_PROFILE)
        #[arg(short, long)]
        profile: Option<String>,
        /// Print the rendered code instead of writing files
        #[arg(long)]
        dry_run: bool,
        /// Overwrite existing service files
        #[arg(long)]
        force: bool,
    },
    /// List the methods each entity's service would get
    Inspect {
        /// Path to the entity manifest (YAML)
        manifest: PathBuf,
        /// Configuration profile (overridden by SVCGEN_PROFILE)
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Show configuration properties
    Config {
        /// Configuration profile (overridden by SVCGEN_PROFILE)
        #[arg(short, long)]
        profile: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            manifest,
            out,
            profile,
            dry_run,
            force,
        } => commands::generate::run(&GenerateArgs {
            manifest,
            out,
            profile,
            dry_run,
            force,
        }),
        Commands::Inspect { manifest, profile } => {
            commands::inspect::run(&manifest, profile.as_deref())
        }
        Commands::Config { profile } => commands::config::run(profile.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
