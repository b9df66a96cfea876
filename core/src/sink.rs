//! JSON file sink.
//!
//! RULE: Only sink.rs touches the output directory.
//! Each file is serialized fully in memory, written to a hidden
//! temporary file next to its target, then renamed into place.
//! Readers see either the previous file or the complete new one.

use serde::Serialize;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    error::{GenError, GenResult},
    table::{Record, Table},
};

pub struct JsonSink {
    dir: PathBuf,
}

impl JsonSink {
    /// Open (or create) the output directory at `dir`.
    pub fn create(dir: impl Into<PathBuf>) -> GenResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| GenError::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one table to `<table name>.json`.
    pub fn write_table<R: Record>(&self, table: &Table<R>) -> GenResult<PathBuf> {
        let path = self.write_json(&table.kind().file_name(), table)?;
        log::info!("sink: wrote {} rows to {}", table.len(), path.display());
        Ok(path)
    }

    /// Serialize `value` as pretty JSON and atomically publish it.
    pub fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> GenResult<PathBuf> {
        let mut bytes = serde_json::to_vec_pretty(value)?;
        bytes.push(b'\n');

        let final_path = self.dir.join(file_name);
        let tmp_path = self.dir.join(format!(".{file_name}.tmp"));

        if let Err(e) = write_synced(&tmp_path, &bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(GenError::io(&tmp_path, e));
        }
        if let Err(e) = fs::rename(&tmp_path, &final_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(GenError::io(&final_path, e));
        }
        log::debug!("sink: published {} ({} bytes)", final_path.display(), bytes.len());
        Ok(final_path)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_json_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonSink::create(dir.path()).unwrap();
        let path = sink.write_json("numbers.json", &[1, 2, 3]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<i32> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);
        assert!(!dir.path().join(".numbers.json.tmp").exists());
    }

    #[test]
    fn create_makes_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let sink = JsonSink::create(&nested).unwrap();
        assert!(sink.dir().is_dir());
    }

    #[test]
    fn rewriting_overwrites_the_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonSink::create(dir.path()).unwrap();
        sink.write_json("x.json", &["old"]).unwrap();
        let path = sink.write_json("x.json", &["new"]).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("new"));
    }
}
