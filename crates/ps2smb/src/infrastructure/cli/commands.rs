//! Handlers behind the four subcommands.
//!
//! Each handler wires the real adapters into a use case and writes the
//! human-readable report to `out`.  The pieces that do not touch the system
//! (prompt parsing, progress lines, the interface listing) are separate
//! functions so they can be tested with a [`ScriptedPrompter`] and a byte
//! buffer.
//!
//! [`ScriptedPrompter`]: super::prompt::ScriptedPrompter

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use ps2smb_core::{AccessMode, Distro, InterfaceAddress, PersistedSettings, ToolConfig};
use tracing::debug;

use super::prompt::{ask_with_default, ask_yes_no, Prompter};
use super::CliError;
use crate::application::connection_info::ConnectionInfo;
use crate::application::health_check::HealthCheckUseCase;
use crate::application::initialize::{InitRequest, InitShareUseCase, InitStep};
use crate::application::ports::{HostInspector, ServiceManager, SettingsRepository};
use crate::infrastructure::network::interfaces::{
    ipv4_for_interface, list_ipv4_interfaces, primary_ipv4, sorted_by_name, NetworkError,
};
use crate::infrastructure::samba::config_editor::ConfigEditor;
use crate::infrastructure::samba::users::SambaUserManager;
use crate::infrastructure::system::host::{detect_distro, is_root, read_hostname, SystemHost};
use crate::infrastructure::system::service::SystemdServiceManager;

/// Options of the `info` subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoOptions {
    /// Show the NetBIOS name as the OPL address.
    pub netbios: bool,
    /// Take the address of this interface instead of the primary one.
    pub interface: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// `ps2smb init`: interactive setup of the share.
///
/// # Errors
///
/// [`CliError::NotRoot`], [`CliError::DistroDetection`],
/// [`CliError::SambaMissing`], or the first fatal init step as
/// [`CliError::Init`].
pub fn run_init(
    config: &ToolConfig,
    settings: Arc<dyn SettingsRepository>,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "PS2SMB Initialization")?;
    writeln!(out, "=====================")?;
    writeln!(out)?;

    if !confirm_reconfigure(settings.as_ref(), prompter, out)? {
        return Ok(());
    }

    if !is_root() {
        return Err(CliError::NotRoot);
    }

    writeln!(out, "Detecting Linux distribution...")?;
    let distro = detect_distro().map_err(CliError::DistroDetection)?;
    writeln!(out, "Detected: {}", distro.family_name())?;
    writeln!(out)?;

    if !SystemHost.samba_installed() {
        return samba_missing(&distro, prompter, out);
    }
    writeln!(out, "Samba is installed.")?;
    writeln!(out)?;

    let request = prompt_request(config, prompter, out)?;

    let use_case = InitShareUseCase::new(
        Arc::new(ConfigEditor::new(&config.smb_conf_path)),
        Arc::new(SambaUserManager::new()),
        Arc::new(SystemdServiceManager::for_distro(&distro)),
        settings,
        config.share_name.as_str(),
        config.config_version.as_str(),
    );

    let mut printed: io::Result<()> = Ok(());
    let outcome = use_case.execute(request, &mut |step| {
        if printed.is_ok() {
            printed = print_step(out, &config.share_name, &step);
        }
    })?;
    printed?;

    print_summary(out, &outcome.settings)
}

/// Asks before overwriting an existing setup.  `Ok(false)` means cancelled.
pub fn confirm_reconfigure(
    settings: &dyn SettingsRepository,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<bool, CliError> {
    if !settings.exists() {
        return Ok(true);
    }
    writeln!(out, "Warning: ps2smb is already configured.")?;
    if ask_yes_no(prompter, "Do you want to reconfigure?")? {
        return Ok(true);
    }
    writeln!(out, "Initialization cancelled.")?;
    Ok(false)
}

fn samba_missing(
    distro: &Distro,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "Samba is not installed on your system.")?;
    if let Some(command) = distro.package_manager.install_command() {
        writeln!(out, "You can install it with:")?;
        writeln!(out, "  {command}")?;
        writeln!(out)?;
        if ask_yes_no(prompter, "Would you like to install Samba now?")? {
            writeln!(
                out,
                "Please run the install command above and then run 'ps2smb init' again."
            )?;
            return Ok(());
        }
    }
    Err(CliError::SambaMissing)
}

/// Asks for the games directory and the access mode.
///
/// A relative path is resolved against the current directory.  Option `1`
/// (or Enter) selects guest access; any other answer selects the configured
/// Samba account.
pub fn prompt_request(
    config: &ToolConfig,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<InitRequest, CliError> {
    let default_path = config.default_games_path.display().to_string();
    let games = ask_with_default(
        prompter,
        "Enter the path where PS2 games will be stored",
        &default_path,
    )?;
    let mut games_path = PathBuf::from(games);
    if games_path.is_relative() {
        games_path = std::env::current_dir()?.join(games_path);
    }

    writeln!(out)?;
    writeln!(out, "Authentication options:")?;
    writeln!(out, "1. Guest access (no password required)")?;
    writeln!(out, "2. User authentication (more secure)")?;
    out.flush()?;
    let choice = ask_with_default(prompter, "Choose option", "1")?;

    let access = if choice == "1" {
        AccessMode::Guest
    } else {
        AccessMode::authenticated(config.samba_user.as_str())?
    };
    debug!(games = %games_path.display(), guest = access.is_guest(), "init request");

    Ok(InitRequest { games_path, access })
}

/// Progress line for one init step.
pub fn print_step(out: &mut dyn Write, share_name: &str, step: &InitStep) -> io::Result<()> {
    match step {
        InitStep::BackingUp => {
            writeln!(out)?;
            writeln!(out, "Backing up existing Samba configuration...")
        }
        InitStep::BackupCreated(path) => writeln!(out, "  Backup saved to {}", path.display()),
        InitStep::AddingShare => {
            writeln!(out, "Adding {share_name} share to Samba configuration...")
        }
        InitStep::CreatingUser(user) => {
            writeln!(out)?;
            writeln!(out, "Creating Samba user '{user}'...")?;
            writeln!(out, "You will be prompted to set a password.")?;
            out.flush()
        }
        InitStep::EnablingService(unit) => {
            writeln!(out)?;
            writeln!(out, "Enabling Samba service ({unit})...")
        }
        InitStep::RestartingService(_) => writeln!(out, "Restarting Samba service..."),
        InitStep::SavingSettings => writeln!(out, "Saving configuration..."),
        InitStep::Warning(message) => writeln!(out, "Warning: {message}"),
    }
}

/// Closing banner of a successful init.
pub fn print_summary(out: &mut dyn Write, settings: &PersistedSettings) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "========================================")?;
    writeln!(out, "Configuration completed successfully!")?;
    writeln!(out, "========================================")?;
    writeln!(out)?;
    writeln!(out, "Games directory: {}", settings.games_path.display())?;
    writeln!(out, "Share name: {}", settings.share_name)?;
    match settings.samba_user.as_deref().filter(|_| !settings.use_guest) {
        None => writeln!(out, "Authentication: Guest (no password)")?,
        Some(user) => writeln!(out, "Authentication: User ({user})")?,
    }
    writeln!(out)?;
    writeln!(out, "Run 'ps2smb info' to see connection details for your PS2.")?;
    Ok(())
}

// ── info ──────────────────────────────────────────────────────────────────────

/// `ps2smb info`: connection details and OPL instructions.
///
/// # Errors
///
/// [`CliError::Settings`] when not configured, [`CliError::Network`] when no
/// usable address is found.
pub fn run_info(
    config: &ToolConfig,
    settings: &dyn SettingsRepository,
    options: &InfoOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = settings.load()?;
    let interfaces = list_ipv4_interfaces()?;
    let service = SystemdServiceManager::for_distro(&detect_distro_or_default());

    let info = build_connection_info(
        config,
        settings,
        interfaces,
        options,
        read_hostname(),
        &service,
    )?;
    write!(out, "{}", info.render())?;
    Ok(())
}

/// Assembles the `info` report from gathered facts.
///
/// # Errors
///
/// [`NetworkError::InterfaceNotFound`] for an unknown `--interface`, or
/// [`NetworkError::NoAddress`] when there is no address at all.
pub fn build_connection_info(
    config: &ToolConfig,
    settings: PersistedSettings,
    interfaces: Vec<InterfaceAddress>,
    options: &InfoOptions,
    netbios_name: Option<String>,
    service: &dyn ServiceManager,
) -> Result<ConnectionInfo, NetworkError> {
    let ip = match options.interface.as_deref() {
        Some(name) => ipv4_for_interface(&interfaces, name)?,
        None => primary_ipv4(&interfaces)?,
    };
    Ok(ConnectionInfo {
        settings,
        ip,
        netbios_name,
        prefer_netbios: options.netbios,
        samba_running: service.is_active(),
        service_unit: service.unit(),
        smb_port: config.smb_port,
        interfaces,
    })
}

// ── status ────────────────────────────────────────────────────────────────────

/// `ps2smb status`: the health checklist.  Failed checks are reported, not
/// returned as errors.
///
/// # Errors
///
/// [`CliError::Settings`] when the settings file exists but is unreadable.
pub fn run_status(
    config: &ToolConfig,
    settings: Arc<dyn SettingsRepository>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let service = SystemdServiceManager::for_distro(&detect_distro_or_default());
    let use_case =
        HealthCheckUseCase::new(settings, Arc::new(service), Arc::new(SystemHost), config);
    let report = use_case.execute()?;
    write!(out, "{}", report.render())?;
    Ok(())
}

// ── interfaces ────────────────────────────────────────────────────────────────

/// `ps2smb interfaces`: every active IPv4 interface.
///
/// # Errors
///
/// [`CliError::Network`] when `ip` cannot be run or parsed.
pub fn run_interfaces(out: &mut dyn Write) -> Result<(), CliError> {
    let interfaces = sorted_by_name(list_ipv4_interfaces()?);
    write!(out, "{}", render_interfaces(&interfaces))?;
    Ok(())
}

/// The `interfaces` listing; the usage example names the first interface.
pub fn render_interfaces(interfaces: &[InterfaceAddress]) -> String {
    let Some(first) = interfaces.first() else {
        return "No active network interfaces found\n".to_string();
    };

    let mut text = String::from("Available Network Interfaces:\n=============================\n\n");
    for iface in interfaces {
        text.push_str(&format!("  {}\n    IP Address: {}\n\n", iface.name, iface.addr));
    }
    text.push_str("Usage:\n  ps2smb info --interface <name>\n\n");
    text.push_str(&format!("Example:\n  ps2smb info --interface {}\n", first.name));
    text
}

/// The host distribution, or an unknown one (unit `smbd`) when
/// `/etc/os-release` cannot be read.
fn detect_distro_or_default() -> Distro {
    detect_distro().unwrap_or_else(|e| {
        debug!(error = %e, "os-release unreadable, assuming unknown distro");
        Distro::from_os_release("")
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
