//! Path utilities: expand ~ and build export file names.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Person name usable as a single path component: separators, control
/// characters and `..` become `_`.
pub fn file_stem_for(person: &str) -> String {
    let cleaned: String = person
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.replace("..", "_");
    if cleaned.is_empty() || cleaned == "." {
        "_".to_string()
    } else {
        cleaned
    }
}

/// `{person_name}_meals.{ext}` directly inside `dir`.
pub fn export_file_name(dir: &Path, person: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}_meals.{}", file_stem_for(person), ext))
}
