//! Live filesystem adapter using `std::fs`.

use std::io::ErrorKind;
use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
///
/// Writes go to a sibling `.tmp` file that is renamed over the target, so a
/// reader never observes a half-written entry.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match std::fs::remove_file(path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_list_remove() {
        let dir = std::env::temp_dir().join("appkit_live_fs_test");
        let _ = std::fs::remove_dir_all(&dir);
        let fs = LiveFileSystem;

        let path = dir.join("inner").join("spec.goal.json");
        fs.write(&path, "\"summarize\"").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "\"summarize\"");

        fs.write(&path, "\"rewrite\"").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "\"rewrite\"");
        assert_eq!(fs.list_dir(&dir.join("inner")).unwrap(), ["spec.goal.json"]);

        fs.remove(&path).unwrap();
        assert!(!fs.exists(&path));
        fs.remove(&path).unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn list_dir_skips_subdirectories() {
        let dir = std::env::temp_dir().join("appkit_live_fs_list_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("cassettes")).unwrap();
        std::fs::write(dir.join("appkit.tab.json"), "\"rag\"").unwrap();

        assert_eq!(LiveFileSystem.list_dir(&dir).unwrap(), ["appkit.tab.json"]);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
