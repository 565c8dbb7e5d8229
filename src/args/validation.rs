use reqwest::Url;
use std::{fs, path::PathBuf};

use super::types::Args;

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the live source is selected but the key file is missing,
    /// or the static directory doesn't exist
    pub fn validate(&self) -> Result<(), String> {
        if self.scoreboard_csv.is_none() {
            check_readable_file(&self.api_key_file.to_string_lossy())?;
        }
        if !self.static_dir.is_dir() {
            return Err(format!(
                "The static directory '{}' does not exist.",
                self.static_dir.display()
            ));
        }
        Ok(())
    }
}

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a valid url: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(format!("Unsupported url scheme '{other}' in '{value}'.")),
    }
}
