//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`.

use std::path::PathBuf;

/// File name of the span log inside the data directory.
pub const SPAN_LOG_FILE: &str = "inkpane-spans.jsonl";

/// Returns the data directory for inkpane's trace output.
///
/// `/host` points to the cwd of the last focused terminal, or the folder
/// Zellij was started from, so this usually resolves to
/// `~/.local/share/zellij/inkpane` on the host.
///
/// ```
/// use inkpane::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/inkpane"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("inkpane")
}

/// Path of the span log.
#[must_use]
pub fn span_log_path() -> PathBuf {
    get_data_dir().join(SPAN_LOG_FILE)
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// Used for user-supplied paths such as `theme_file`.
///
/// ```
/// use inkpane::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
