use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let content = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?
    };
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {path}"))
}

/// Like [`read_json`], but a missing file reads as the default value.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &str) -> Result<T> {
    if path != "-" && !Path::new(path).exists() {
        return Ok(T::default());
    }
    read_json(path)
}

pub fn write_json<T: Serialize + ?Sized>(path: &str, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
}
