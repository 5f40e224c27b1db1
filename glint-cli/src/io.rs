//! File I/O for the terminal demo

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use glint_core::{Highlighter, SharedTarget};

use crate::quotes::Quote;

/// Load `author|quote` lines from a text file
pub fn load_quotes(path: &str) -> Result<Vec<Quote>> {
    let path = Path::new(path);
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    let content = fs::read_to_string(&canonical)
        .with_context(|| format!("Failed to read file: {}", canonical.display()))?;

    Ok(content.lines().filter_map(Quote::parse_line).collect())
}

/// Get the ~/.glint directory path, creating it if needed
pub fn glint_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let glint_dir = home.join(".glint");

    if !glint_dir.exists() {
        fs::create_dir_all(&glint_dir)
            .with_context(|| format!("Failed to create {}", glint_dir.display()))?;
    }

    Ok(glint_dir)
}

/// Open `dir/glint.log` for appending, creating `dir` if needed
pub fn open_log_file(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let log_path = dir.join("glint.log");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open {}", log_path.display()))
}

/// Export highlighted targets to ~/.glint/highlights.json
pub fn export_highlights(highlighter: &Highlighter<SharedTarget>) -> Result<PathBuf> {
    let glint_dir = glint_dir()?;
    let export_path = glint_dir.join("highlights.json");

    let json = glint_core::to_json(highlighter).context("Failed to serialize highlights")?;

    fs::write(&export_path, json)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    Ok(export_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_quotes_skips_blank_and_comment_lines() {
        let path = std::env::temp_dir().join(format!("glint-quotes-{}.txt", std::process::id()));
        fs::write(&path, "# quotes\nAda Lovelace|The engine weaves.\n\nplain line\n").unwrap();

        let quotes = load_quotes(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            quotes,
            vec![
                Quote::new("Ada Lovelace", "The engine weaves."),
                Quote::new("Unknown", "plain line"),
            ]
        );
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = std::env::temp_dir().join(format!("glint-log-{}", std::process::id()));

        let file = open_log_file(&dir);
        assert!(file.is_ok());
        assert!(dir.join("glint.log").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_log_file_reports_unusable_directory() {
        // A regular file cannot be used as the log directory
        let blocker = std::env::temp_dir().join(format!("glint-log-blocker-{}", std::process::id()));
        fs::write(&blocker, "").unwrap();

        let err = open_log_file(&blocker.join("nested")).unwrap_err();
        fs::remove_file(&blocker).unwrap();

        assert!(format!("{:#}", err).contains("Failed to create"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_quotes("/definitely/not/here.txt").is_err());
    }
}
