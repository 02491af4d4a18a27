//! Linux distribution classification from `/etc/os-release` text.
//!
//! Only the package manager matters to ps2smb: it decides the install hint
//! printed when Samba is missing and the systemd unit name of the Samba
//! daemon (`smb` on Arch-based systems, `smbd` everywhere else).

/// Package manager family of the host distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Apt,
    Pacman,
    Dnf,
    Unknown,
}

impl PackageManager {
    /// Short label, as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Pacman => "pacman",
            Self::Dnf => "dnf",
            Self::Unknown => "unknown",
        }
    }

    /// Shell command that installs Samba, if known for this family.
    pub fn install_command(self) -> Option<&'static str> {
        match self {
            Self::Apt => Some("sudo apt update && sudo apt install -y samba"),
            Self::Pacman => Some("sudo pacman -S --noconfirm samba"),
            Self::Dnf => Some("sudo dnf install -y samba"),
            Self::Unknown => None,
        }
    }

    /// systemd unit name of the Samba daemon.
    pub fn samba_service(self) -> &'static str {
        match self {
            Self::Pacman => "smb",
            _ => "smbd",
        }
    }

    fn from_id(id: &str) -> Self {
        match id {
            "ubuntu" | "debian" | "linuxmint" | "pop" => Self::Apt,
            "arch" | "manjaro" | "endeavouros" => Self::Pacman,
            "fedora" | "rhel" | "centos" => Self::Dnf,
            _ => Self::Unknown,
        }
    }
}

/// A detected Linux distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distro {
    /// Raw `ID=` value (empty when absent).
    pub id: String,
    pub package_manager: PackageManager,
}

impl Distro {
    /// Classifies an `os-release` document.
    ///
    /// `ID` is matched first; if it is not a known distribution each token of
    /// `ID_LIKE` is tried in order.  Unrecognised systems map to
    /// [`PackageManager::Unknown`].
    pub fn from_os_release(content: &str) -> Self {
        let id = os_release_value(content, "ID").unwrap_or_default();
        let mut package_manager = PackageManager::from_id(&id);

        if package_manager == PackageManager::Unknown {
            if let Some(like) = os_release_value(content, "ID_LIKE") {
                package_manager = like
                    .split_whitespace()
                    .map(PackageManager::from_id)
                    .find(|pm| *pm != PackageManager::Unknown)
                    .unwrap_or(PackageManager::Unknown);
            }
        }

        Self {
            id,
            package_manager,
        }
    }

    /// Human-readable family name ("Debian-based", ...).
    pub fn family_name(&self) -> &'static str {
        match self.package_manager {
            PackageManager::Apt => "Debian-based",
            PackageManager::Pacman => "Arch-based",
            PackageManager::Dnf => "Fedora-based",
            PackageManager::Unknown => "Unknown",
        }
    }

    pub fn samba_service(&self) -> &'static str {
        self.package_manager.samba_service()
    }
}

/// Returns the unquoted value of `key=` from an `os-release` document.
fn os_release_value(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.strip_prefix(key)?.strip_prefix('=')?;
        Some(rest.trim().trim_matches(['"', '\'']).to_string())
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
