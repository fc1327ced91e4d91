//! Loading raw values.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use oxide_validate::{raw_data_from_json, RawData, RawValue};

/// Reads a JSON object of raw values from `path`, or stdin for `-`.
pub fn load(path: &Path) -> anyhow::Result<RawData> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read standard input")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    raw_data_from_json(&json).with_context(|| format!("invalid data in {}", path.display()))
}

/// Adds command-line pairs as text values, replacing existing keys.
pub fn overlay(data: &mut RawData, pairs: Vec<(String, String)>) {
    data.extend(pairs.into_iter().map(|(k, v)| (k, RawValue::Text(v))));
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"amount": "12.5", "agree": 1}}"#).unwrap();

        let data = load(file.path()).unwrap();
        assert_eq!(data["amount"], RawValue::from("12.5"));
        assert_eq!(data["agree"], RawValue::Int(1));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_overlay_replaces() {
        let mut data = RawData::new();
        data.insert("a".to_string(), RawValue::Int(1));
        overlay(&mut data, vec![("a".to_string(), "2".to_string())]);
        assert_eq!(data["a"], RawValue::from("2"));
    }
}
