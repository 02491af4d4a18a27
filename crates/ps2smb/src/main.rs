//! ps2smb entry point.
//!
//! Configures a Samba share for a PlayStation 2 running Open PS2 Loader and
//! reports how to connect to it.
//!
//! # Usage
//!
//! ```text
//! ps2smb [OPTIONS] <COMMAND>
//!
//! Commands:
//!   init        Initialize and configure Samba for PS2 (needs root)
//!   info        Show connection information for PS2
//!   status      Check PS2 SMB server status
//!   interfaces  List available network interfaces
//!
//! Options:
//!   --smb-conf   <PATH>  Samba configuration file [default: /etc/samba/smb.conf]
//!   --config-dir <PATH>  Settings directory [default: $HOME/.config/ps2smb]
//!   -v, --verbose        Debug logging on stderr
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable            | Default                | Description              |
//! |---------------------|------------------------|--------------------------|
//! | `PS2SMB_SMB_CONF`   | `/etc/samba/smb.conf`  | Samba configuration file |
//! | `PS2SMB_CONFIG_DIR` | `$HOME/.config/ps2smb` | Settings directory       |
//! | `RUST_LOG`          | `warn`                 | Log filter               |
//!
//! Reports go to stdout; log lines go to stderr.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ps2smb::infrastructure::cli::commands::{
    run_info, run_init, run_interfaces, run_status, InfoOptions,
};
use ps2smb::infrastructure::cli::prompt::StdinPrompter;
use ps2smb::infrastructure::storage::settings::SettingsStore;
use ps2smb_core::ToolConfig;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Configure Samba for PlayStation 2 network gaming via OPL.
#[derive(Debug, Parser)]
#[command(
    name = "ps2smb",
    about = "Configure Samba for PlayStation 2 network gaming via OPL",
    version
)]
struct Cli {
    /// Samba configuration file the [PS2] share is written to.
    #[arg(
        long,
        global = true,
        default_value = "/etc/samba/smb.conf",
        env = "PS2SMB_SMB_CONF"
    )]
    smb_conf: PathBuf,

    /// Directory holding config.json.  Defaults to $HOME/.config/ps2smb.
    #[arg(long, global = true, env = "PS2SMB_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum Command {
    /// Initialize and configure Samba for PS2.
    Init,

    /// Show connection information for PS2.
    Info {
        /// Use the NetBIOS name instead of the IP address.
        #[arg(short, long)]
        netbios: bool,

        /// Network interface to take the address from (e.g. eth0, enp3s0).
        #[arg(short, long)]
        interface: Option<String>,
    },

    /// Check PS2 SMB server status.
    Status,

    /// List available network interfaces.
    Interfaces,
}

impl Cli {
    /// Defaults with the command-line overrides applied.
    fn tool_config(&self) -> ToolConfig {
        ToolConfig {
            smb_conf_path: self.smb_conf.clone(),
            ..ToolConfig::default()
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // RUST_LOG wins when set; otherwise `warn`, or `debug` with --verbose.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.tool_config();
    debug!(?config, command = ?cli.command, "starting");

    let settings = Arc::new(SettingsStore::from_env(cli.config_dir.clone()));
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Init => run_init(&config, settings, &mut StdinPrompter, &mut stdout)?,
        Command::Info { netbios, interface } => {
            let options = InfoOptions { netbios, interface };
            run_info(&config, settings.as_ref(), &options, &mut stdout)?;
        }
        Command::Status => run_status(&config, settings, &mut stdout)?,
        Command::Interfaces => run_interfaces(&mut stdout)?,
    }

    stdout.flush()?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
