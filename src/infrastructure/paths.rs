//! Path helpers for the Zellij sandbox, where `/host` stands for the
//! directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Sandbox root that the user's home maps to.
const HOST_ROOT: &str = "/host";

/// Returns the plugin data directory, holding the trace file.
///
/// ```
/// use pokemon_manager::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/pokemon-manager")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("pokemon-manager")
}

/// Maps `~` and `~/...` onto the sandbox `/host` mount; other paths pass through.
///
/// ```
/// use pokemon_manager::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}
