//! Environment metadata read from an optional `system_info.env` file.

use std::fs;
use std::path::Path;

use ahash::AHashMap;

pub const SYSTEM_INFO_FILE: &str = "system_info.env";

/// KEY=VALUE metadata consumed verbatim into the report header. Values are
/// never validated here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemInfo {
    values: AHashMap<String, String>,
}

impl SystemInfo {
    /// Read `system_info.env` from a raw-output directory. A missing file
    /// yields the empty mapping.
    pub fn from_dir(raw_dir: &Path) -> Self {
        match fs::read_to_string(raw_dir.join(SYSTEM_INFO_FILE)) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::default(),
        }
    }

    /// Parse KEY=VALUE lines. `#`-prefixed comments and lines without `=`
    /// are ignored; values keep everything after the first `=`.
    pub fn parse(text: &str) -> Self {
        let mut values = AHashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                values.insert(key.to_string(), value.to_string());
            }
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Header helper: the value for `key`, or `N/A`.
    pub fn get_or_na(&self, key: &str) -> &str {
        self.get(key).unwrap_or("N/A")
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
