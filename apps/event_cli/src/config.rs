use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use shared::catalog::{festival_catalog, Catalog};
use tracing::{info, warn};

pub const DEFAULT_SETTINGS_FILE: &str = "event.toml";
pub const DEFAULT_EVENT_TARGET: &str = "2025-10-19T11:00:00";
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub event_target: DateTime<Utc>,
    pub tick_interval_ms: u64,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            event_target: parse_event_target(DEFAULT_EVENT_TARGET).unwrap_or_default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            catalog_path: None,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    event_target: Option<String>,
    tick_interval_ms: Option<u64>,
    catalog_path: Option<PathBuf>,
}

pub fn load_settings(path: &Path) -> Settings {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file at `path` if present, then environment overrides.
pub fn load_settings_with(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.event_target {
                    apply_event_target(&mut settings, &v, "file");
                }
                if let Some(v) = file_cfg.tick_interval_ms {
                    apply_tick_interval(&mut settings, v, "file");
                }
                if let Some(v) = file_cfg.catalog_path {
                    settings.catalog_path = Some(v);
                }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring unreadable settings file");
            }
        }
    }

    if let Some(v) = env("EVENT_TARGET") {
        apply_event_target(&mut settings, &v, "EVENT_TARGET");
    }
    if let Some(v) = env("APP__EVENT_TARGET") {
        apply_event_target(&mut settings, &v, "APP__EVENT_TARGET");
    }

    if let Some(v) = env("APP__TICK_INTERVAL_MS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => apply_tick_interval(&mut settings, parsed, "APP__TICK_INTERVAL_MS"),
            Err(_) => warn!(value = %v, "APP__TICK_INTERVAL_MS is not a number; keeping previous"),
        }
    }

    if let Some(v) = env("APP__CATALOG_PATH") {
        if !v.trim().is_empty() {
            settings.catalog_path = Some(PathBuf::from(v));
        }
    }

    settings
}

fn apply_event_target(settings: &mut Settings, raw: &str, source: &str) {
    match parse_event_target(raw) {
        Some(target) => settings.event_target = target,
        None => warn!(value = raw, source, "unparseable event target; keeping previous"),
    }
}

fn apply_tick_interval(settings: &mut Settings, interval_ms: u64, source: &str) {
    if interval_ms == 0 {
        warn!(source, "tick interval must be positive; keeping previous");
        return;
    }
    settings.tick_interval_ms = interval_ms;
}

/// RFC 3339 instants are taken as-is; zone-less timestamps are local wall-clock time.
pub fn parse_event_target(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

pub fn load_catalog(settings: &Settings) -> anyhow::Result<Catalog> {
    let Some(path) = &settings.catalog_path else {
        return Ok(festival_catalog());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog '{}'", path.display()))?;
    let catalog = Catalog::from_json(&raw)
        .with_context(|| format!("failed to parse catalog '{}'", path.display()))?;
    info!(
        path = %path.display(),
        entries = catalog.entries.len(),
        tiers = catalog.tiers.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
