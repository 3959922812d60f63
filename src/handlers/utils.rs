use crate::analyzer::formatter::OutputFormat;
use crate::error::{KubemonError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a JSON payload from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_payload(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            log::debug!("Reading payload from {}", p.display());
            Ok(fs::read_to_string(p)?)
        }
        _ => {
            log::debug!("Reading payload from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Pick the output format: command-line value first, then the configured default.
pub fn resolve_format(requested: Option<&str>, configured: OutputFormat) -> Result<OutputFormat> {
    match requested {
        None => Ok(configured),
        Some(raw) => OutputFormat::parse(raw).ok_or_else(|| {
            KubemonError::InvalidArgument(format!(
                "unknown output format '{raw}' (expected table, json or summary)"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_format() {
        assert_eq!(
            resolve_format(None, OutputFormat::Summary).unwrap(),
            OutputFormat::Summary
        );
        assert_eq!(
            resolve_format(Some("json"), OutputFormat::Table).unwrap(),
            OutputFormat::Json
        );
        assert!(matches!(
            resolve_format(Some("yaml"), OutputFormat::Table),
            Err(KubemonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_read_payload_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pods.json");
        fs::write(&path, "[]").unwrap();
        assert_eq!(read_payload(Some(&path)).unwrap(), "[]");
    }

    #[test]
    fn test_read_payload_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_payload(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, KubemonError::Io(_)));
    }
}
