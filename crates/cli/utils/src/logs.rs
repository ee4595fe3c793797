use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use sn_types::{CategorizedObjects, Contract, Network};

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2025-01-31T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Timestamp usable in a file name: colons and dots become dashes.
pub fn file_timestamp(at: DateTime<Utc>) -> String {
    iso_timestamp(at).replace([':', '.'], "-")
}

/// Outcome of one package publish, as written to the deploy log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRecord {
    pub timestamp: String,
    pub network: Network,
    pub contract: Contract,
    pub package_path: String,
    pub package_id: String,
    pub publish_response: Value,
}

/// Point-in-time inventory of admin-owned objects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub timestamp: String,
    pub network: Network,
    pub admin_address: String,
    pub objects: CategorizedObjects,
}

pub fn deploy_log_path(
    logs_dir: &Path,
    at: DateTime<Utc>,
    network: Network,
    contract: Contract,
) -> PathBuf {
    logs_dir.join(format!("{}-{network}-{contract}.json", file_timestamp(at)))
}

pub fn inventory_log_path(logs_dir: &Path, network: Network, at: DateTime<Utc>) -> PathBuf {
    logs_dir.join(format!("admin-objects-{network}-{}.json", file_timestamp(at)))
}

/// Absolute form of `path` for records and operator messages. Falls back to
/// `path` unchanged when the working directory cannot be read.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Writes `value` as pretty-printed JSON, creating parent directories as needed.
pub fn write_json_log<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }
    }

    let pretty_json = serde_json::to_string_pretty(value)?;
    fs::write(path, pretty_json)
        .with_context(|| format!("Failed to write log file: {}", path.display()))?;

    log::debug!("wrote {}", path.display());
    Ok(())
}
