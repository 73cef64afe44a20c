use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use board::BoardSettings;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "board.toml";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub status_timeout_ms: u64,
    pub max_visible_participants: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let board = BoardSettings::default();
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            status_timeout_ms: u64::try_from(board.status_timeout.as_millis()).unwrap_or(5_000),
            max_visible_participants: board.max_visible_participants,
        }
    }
}

impl Settings {
    pub fn board_settings(&self) -> BoardSettings {
        BoardSettings {
            max_visible_participants: self.max_visible_participants,
            status_timeout: Duration::from_millis(self.status_timeout_ms),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    server_url: Option<String>,
    status_timeout_ms: Option<u64>,
    max_visible_participants: Option<usize>,
}

/// Defaults, then the config file, then environment overrides.
///
/// A missing `board.toml` in the working directory is fine; a missing file
/// passed explicitly is an error.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    let (path, explicit) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.server_url {
        settings.server_url = normalize_server_url(&v)?;
    }
    if let Some(v) = file_cfg.status_timeout_ms {
        settings.status_timeout_ms = v;
    }
    if let Some(v) = file_cfg.max_visible_participants {
        settings.max_visible_participants = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(v) = lookup("BOARD_SERVER_URL") {
        settings.server_url = normalize_server_url(&v)?;
    }
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = normalize_server_url(&v)?;
    }

    if let Some(v) = lookup("APP__STATUS_TIMEOUT_MS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.status_timeout_ms = parsed;
        }
    }
    if let Some(v) = lookup("APP__MAX_VISIBLE_PARTICIPANTS") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.max_visible_participants = parsed;
        }
    }
    Ok(())
}

/// Trims, defaults the scheme to `http://` and drops a trailing slash.
pub fn normalize_server_url(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_SERVER_URL.to_string());
    }

    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    let url = Url::parse(&candidate).with_context(|| format!("invalid server url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("unsupported scheme in server url '{raw}'");
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
