//! qpos - Quantum Portfolio OS terminal
//!
//! Usage:
//!   qpos                        # Boot, then restore the last session
//!   qpos --no-boot              # Straight to the HUD
//!   qpos --reset                # Start with an empty session
//!   qpos --config qpos.toml     # Use a specific config file
//!
//! Logs go to a file because the terminal belongs to the UI. Set RUST_LOG
//! to change the level (default `qpos=info`).

use clap::Parser as ClapParser;
use qpos_core::ShellConfig;
use qpos_core::config::{APP_DIR, default_data_dir};
use qpos_tui::RunOptions;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(ClapParser)]
#[command(name = "qpos")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Quantum Portfolio OS - a portfolio shell for the terminal", long_about = None)]
struct Args {
    /// Config file (default: <config dir>/qpos/config.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Session snapshot file (overrides the config)
    #[arg(long, value_name = "PATH")]
    session: Option<PathBuf>,

    /// Skip the boot sequence
    #[arg(long)]
    no_boot: bool,

    /// Discard the stored session and start empty
    #[arg(long)]
    reset: bool,

    /// Log file (default: <data dir>/qpos/qpos.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn default_log_path() -> Option<PathBuf> {
    default_data_dir().map(|dir| dir.join("qpos.log"))
}

/// Install the file logger. Returns false when the file cannot be opened.
fn init_logging(path: &Path) -> bool {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && fs::create_dir_all(parent).is_err()
    {
        return false;
    }
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    // "qpos" prefixes qpos_core and qpos_tui targets too
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("qpos=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    true
}

fn main() {
    let args = Args::parse();

    let log_path = args.log_file.clone().or_else(default_log_path);
    let logging = log_path.as_deref().is_some_and(init_logging);
    if logging {
        tracing::info!(app = APP_DIR, version = env!("CARGO_PKG_VERSION"), "starting");
    }

    let mut config = match ShellConfig::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(session) = args.session {
        config.session_file = Some(session);
    }

    let options = RunOptions {
        config,
        skip_boot: args.no_boot,
        reset_session: args.reset,
    };

    if let Err(e) = qpos_tui::run(options) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
