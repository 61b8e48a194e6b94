//! Configuration management for the Groupie Trackers catalog client.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the catalog API endpoint, the
//! public site URL used for share links, and the map provider credentials.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `groupli/.env`. A missing file is not an error;
/// values may then come from the process environment directly.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/groupli/.env`
/// - macOS: `~/Library/Application Support/groupli/.env`
/// - Windows: `%LOCALAPPDATA%/groupli/.env`
///
/// # Errors
///
/// This function will return an error if the parent directory cannot be
/// created or an existing `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// use groupli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("groupli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the base URL of the catalog API.
///
/// Retrieves the `GROUPLI_API_URL` environment variable which contains the
/// base URL for the search, suggestion and artist-detail endpoints.
///
/// # Panics
///
/// Panics if the `GROUPLI_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = api_url(); // e.g., "http://localhost:8080"
/// ```
pub fn api_url() -> String {
    env::var("GROUPLI_API_URL").expect("GROUPLI_API_URL must be set")
}

/// Returns the public site URL used to build shareable artist page links.
///
/// Retrieves the `GROUPLI_SITE_URL` environment variable; when unset, the
/// catalog API URL doubles as the site URL.
///
/// # Example
///
/// ```
/// let site = site_url(); // e.g., "https://groupie.example.org"
/// ```
pub fn site_url() -> String {
    env::var("GROUPLI_SITE_URL").unwrap_or_else(|_| api_url())
}

/// Returns the map provider access credential.
///
/// Retrieves the `MAPBOX_ACCESS_TOKEN` environment variable. The token is
/// required by the detail view's map surface to build static map links.
///
/// # Panics
///
/// Panics if the `MAPBOX_ACCESS_TOKEN` environment variable is not set.
///
/// # Security Note
///
/// The token should be kept out of version control; store it in the `.env`
/// file in the local data directory.
pub fn mapbox_token() -> String {
    env::var("MAPBOX_ACCESS_TOKEN").expect("MAPBOX_ACCESS_TOKEN must be set")
}

/// Returns the named visual style for the map provider.
///
/// Retrieves the `MAPBOX_STYLE` environment variable, defaulting to the dark
/// style the original site shipped with.
///
/// # Example
///
/// ```
/// let style = mapbox_style(); // e.g., "mapbox/dark-v10"
/// ```
pub fn mapbox_style() -> String {
    env::var("MAPBOX_STYLE").unwrap_or_else(|_| "mapbox/dark-v10".to_string())
}
