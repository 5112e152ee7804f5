//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/  ← cwd
/// /home/user/site/site.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("site.toml");
        fs::write(&config, "title = \"T\"").unwrap();

        let found = find_config_from(dir.path(), Path::new("site.toml"));
        assert_eq!(found, Some(config));
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("site.toml");
        fs::write(&config, "title = \"T\"").unwrap();

        let nested = dir.path().join("docs").join("guide");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_from(&nested, Path::new("site.toml"));
        assert_eq!(found, Some(config));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_config_from(dir.path(), Path::new("definitely-not-here.toml"));
        // May still find one above the tempdir only if a parent carries the
        // name, which this name never does.
        assert_eq!(found, None);
    }
}
