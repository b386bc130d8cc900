//! Home-relative paths for the database and export targets.

use std::path::PathBuf;

/// `~` or `~/...` resolved against the home directory; anything else as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}

/// Absolute once `~` is expanded.
pub fn is_absolute(path: &str) -> bool {
    expand_tilde(path).is_absolute()
}
