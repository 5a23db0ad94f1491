//! @ai:module:intent Read and write saved submission dumps
//! @ai:module:layer infrastructure
//! @ai:module:public_api SubmissionLoader, DumpEntry
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::submission::record::{StatusResponse, SubmissionRecord};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent A dump file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpEntry {
    pub handle: String,
    pub path: PathBuf,
}

/// @ai:intent Loads and stores `<handle>.json` submission dumps
pub struct SubmissionLoader;

impl SubmissionLoader {
    /// @ai:intent Create a new loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Path of the dump for a handle inside a directory
    /// @ai:effects pure
    pub fn dump_path(dir: &Path, handle: &str) -> PathBuf {
        dir.join(format!("{}.json", handle))
    }

    /// @ai:intent Parse a dump file into submissions
    /// @ai:pre path points to a JSON file
    /// @ai:post an object is read as an API reply, anything else as a bare array
    /// @ai:effects fs:read
    pub fn load_dump(&self, path: &Path) -> Result<Vec<SubmissionRecord>> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content)?;

        if !value.is_object() {
            return Ok(serde_json::from_value(value)?);
        }

        let envelope: StatusResponse = serde_json::from_value(value)?;
        let handle = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        envelope.into_submissions(handle).map_err(|e| Error::Dump {
            path: path.to_path_buf(),
            message: e.cause,
        })
    }

    /// @ai:intent Write submissions as a bare JSON array
    /// @ai:effects fs:write
    pub fn save_dump(&self, path: &Path, submissions: &[SubmissionRecord]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(submissions)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// @ai:intent List dumps directly inside a directory, sorted by handle
    /// @ai:effects fs:read
    pub fn list_dumps(&self, dir: &Path) -> Vec<DumpEntry> {
        let mut entries: Vec<DumpEntry> = WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
            })
            .filter_map(|e| {
                let handle = e.path().file_stem()?.to_str()?.to_string();
                Some(DumpEntry {
                    handle,
                    path: e.path().to_path_buf(),
                })
            })
            .collect();

        entries.sort_by(|a, b| a.handle.cmp(&b.handle));
        entries
    }
}

impl Default for SubmissionLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_bare_array() {
        let temp = TempDir::new().unwrap();
        let path = SubmissionLoader::dump_path(temp.path(), "tourist");
        let loader = SubmissionLoader::new();

        let submissions = vec![
            SubmissionRecord::new("A", Some(800), "OK", "GNU C++17", &["math"]),
            SubmissionRecord::new("B", None, "WRONG_ANSWER", "PyPy 3", &[]),
        ];
        loader.save_dump(&path, &submissions).unwrap();

        let loaded = loader.load_dump(&path).unwrap();
        assert_eq!(loaded, submissions);
    }

    #[test]
    fn test_load_api_envelope() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("petr.json");
        std::fs::write(
            &path,
            r#"{"status":"OK","result":[{"problem":{"name":"A","rating":1200,"tags":["dp"]},"verdict":"OK","programmingLanguage":"Java 21"}]}"#,
        )
        .unwrap();

        let loaded = SubmissionLoader::new().load_dump(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].problem.rating, Some(1200));
    }

    #[test]
    fn test_load_failed_envelope() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ghost.json");
        std::fs::write(&path, r#"{"status":"FAILED","comment":"handle: not found"}"#).unwrap();

        let err = SubmissionLoader::new().load_dump(&path).unwrap_err();
        assert!(matches!(err, Error::Dump { .. }));
        assert!(err.to_string().contains("handle: not found"));
    }

    #[test]
    fn test_malformed_envelope_names_missing_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("petr.json");
        std::fs::write(
            &path,
            r#"{"status":"OK","result":[{"problem":{"name":"A"},"verdict":"OK"}]}"#,
        )
        .unwrap();

        let err = SubmissionLoader::new().load_dump(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("programmingLanguage"));
    }

    #[test]
    fn test_malformed_array_names_missing_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("petr.json");
        std::fs::write(&path, r#"[{"problem":{"name":"A"},"verdict":"OK"}]"#).unwrap();

        let err = SubmissionLoader::new().load_dump(&path).unwrap_err();
        assert!(err.to_string().contains("programmingLanguage"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SubmissionLoader::new()
            .load_dump(&temp.path().join("nobody.json"))
            .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_list_dumps_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("zed.json"), "[]").unwrap();
        std::fs::write(temp.path().join("alice.json"), "[]").unwrap();
        std::fs::write(temp.path().join("notes.txt"), "ignore").unwrap();

        let dumps = SubmissionLoader::new().list_dumps(temp.path());
        let handles: Vec<_> = dumps.iter().map(|d| d.handle.as_str()).collect();
        assert_eq!(handles, vec!["alice", "zed"]);
    }
}
