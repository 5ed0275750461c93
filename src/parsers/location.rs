//! Reading raw input from files, stdin, and remote locations.

use super::traits::ParseError;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Maximum input size (256 MB).
pub const MAX_INPUT_SIZE: u64 = 256 * 1024 * 1024;

const STDIN_LOCATION: &str = "-";

#[cfg(feature = "remote")]
const REMOTE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Whether `location` should be fetched over HTTP.
#[must_use]
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Read the full text behind a location.
///
/// `-` reads stdin, `http://` and `https://` locations are fetched, anything
/// else is a file path.
pub fn read_location(location: &str) -> Result<String, ParseError> {
    if location == STDIN_LOCATION {
        return read_capped("<stdin>", std::io::stdin().lock(), MAX_INPUT_SIZE);
    }

    if is_remote(location) {
        return fetch_remote(location);
    }

    read_file(Path::new(location))
}

fn read_file(path: &Path) -> Result<String, ParseError> {
    let metadata =
        std::fs::metadata(path).map_err(|e| ParseError::IoError(format!("{}: {e}", path.display())))?;
    check_size(&path.display().to_string(), metadata.len())?;

    std::fs::read_to_string(path).map_err(|e| ParseError::IoError(format!("{}: {e}", path.display())))
}

/// Read a stream of unknown length, stopping one byte past `limit`.
fn read_capped(location: &str, reader: impl Read, limit: u64) -> Result<String, ParseError> {
    let mut content = String::new();
    reader.take(limit + 1).read_to_string(&mut content)?;
    check_size_with_limit(location, content.len() as u64, limit)?;
    Ok(content)
}

fn check_size(location: &str, size: u64) -> Result<(), ParseError> {
    check_size_with_limit(location, size, MAX_INPUT_SIZE)
}

fn check_size_with_limit(location: &str, size: u64, limit: u64) -> Result<(), ParseError> {
    if size > limit {
        return Err(ParseError::FileTooLarge {
            location: location.to_string(),
            size_mb: size / (1024 * 1024),
            limit_mb: limit / (1024 * 1024),
        });
    }
    Ok(())
}

#[cfg(feature = "remote")]
fn fetch_remote(url: &str) -> Result<String, ParseError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REMOTE_TIMEOUT)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    info!("fetching {url}");
    let response = client.get(url).send()?.error_for_status()?;
    if let Some(length) = response.content_length() {
        check_size(url, length)?;
    }

    let body = response.text()?;
    check_size(url, body.len() as u64)?;
    Ok(body)
}

#[cfg(not(feature = "remote"))]
fn fetch_remote(url: &str) -> Result<String, ParseError> {
    info!("refusing remote location {url}");
    Err(ParseError::RemoteUnavailable(url.to_string()))
}
