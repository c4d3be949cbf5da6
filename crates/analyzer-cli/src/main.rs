//! farm-analyzer CLI - install-time tooling for the analyzer plugin
//!
//! Commands:
//! - `farm-analyzer postinstall` - Verify the installed platform artifact
//! - `farm-analyzer resolve` - Print the resolved library path or descriptor

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod postinstall;
mod resolve;

#[derive(Parser)]
#[command(name = "farm-analyzer")]
#[command(author, version, about = "Install-time tooling for the Farm bundle size analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the installed package for the current platform's library
    Postinstall {
        /// Installation directory (default: the executable's directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Print the resolved native library path
    Resolve {
        /// Installation directory (default: the executable's directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Print the full plugin descriptor as JSON
        #[arg(long)]
        json: bool,

        /// Option overrides as a JSON object (implies --json)
        #[arg(long)]
        options: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Postinstall { dir } => {
            // Diagnostic only: the check must never fail the install.
            let _ = postinstall::run(
                &install_dir(dir),
                &farm_analyzer_dist::HostPlatform::current(),
                &mut std::io::stdout(),
            );
        }
        Commands::Resolve { dir, json, options } => {
            resolve::run(
                &install_dir(dir),
                json,
                options.as_deref(),
                &mut std::io::stdout(),
            )?;
        }
    }

    Ok(())
}

/// Installation directory for a command: the explicit `--dir` if given,
/// otherwise the directory the executable itself was installed into.
fn install_dir(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
    })
    .unwrap_or_else(|| PathBuf::from("."))
}
