//! Careful directory and file creation.
//!
//! Existing paths are kept (with a warning) unless `force` is set, in which
//! case they are replaced.

use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOutcome {
    Created,
    Kept,
    Replaced,
}

/// Create a directory (and its parents) at `path`.
pub fn safe_mkdir(path: &Path, force: bool) -> io::Result<FsOutcome> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        return Ok(FsOutcome::Created);
    }

    if path.is_dir() {
        tracing::warn!("directory \"{}\" already exists", path.display());
        return Ok(FsOutcome::Kept);
    }

    if force {
        tracing::warn!("deleting file \"{}\" and creating directory", path.display());
        fs::remove_file(path)?;
        fs::create_dir(path)?;
        Ok(FsOutcome::Replaced)
    } else {
        tracing::warn!("\"{}\" is not a directory", path.display());
        Ok(FsOutcome::Kept)
    }
}

/// Write `contents` to a new file at `path`.
pub fn safe_fwrite(path: &Path, contents: &str, force: bool) -> io::Result<FsOutcome> {
    let outcome = if path.is_dir() {
        if !force {
            tracing::warn!("directory named \"{}\" already exists", path.display());
            return Ok(FsOutcome::Kept);
        }
        tracing::warn!("deleting directory \"{}\" and creating file", path.display());
        fs::remove_dir_all(path)?;
        FsOutcome::Replaced
    } else if path.exists() {
        if !force {
            tracing::warn!("file named \"{}\" already exists", path.display());
            return Ok(FsOutcome::Kept);
        }
        tracing::warn!("deleting file \"{}\" and creating file", path.display());
        fs::remove_file(path)?;
        FsOutcome::Replaced
    } else {
        FsOutcome::Created
    };

    fs::write(path, contents)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mkdir_creates_nested() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b");

        assert_eq!(safe_mkdir(&path, false).unwrap(), FsOutcome::Created);
        assert!(path.is_dir());
    }

    #[test]
    fn test_mkdir_keeps_existing_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("inside.txt"), "x").unwrap();

        assert_eq!(safe_mkdir(dir.path(), true).unwrap(), FsOutcome::Kept);
        assert!(dir.path().join("inside.txt").exists());
    }

    #[test]
    fn test_mkdir_over_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("problem");
        fs::write(&path, "x").unwrap();

        assert_eq!(safe_mkdir(&path, false).unwrap(), FsOutcome::Kept);
        assert!(path.is_file());

        assert_eq!(safe_mkdir(&path, true).unwrap(), FsOutcome::Replaced);
        assert!(path.is_dir());
    }

    #[test]
    fn test_fwrite_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solution.cpp");

        assert_eq!(safe_fwrite(&path, "int main;", false).unwrap(), FsOutcome::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "int main;");
    }

    #[test]
    fn test_fwrite_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solution.py");
        fs::write(&path, "old").unwrap();

        assert_eq!(safe_fwrite(&path, "new", false).unwrap(), FsOutcome::Kept);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        assert_eq!(safe_fwrite(&path, "new", true).unwrap(), FsOutcome::Replaced);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_fwrite_over_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.sh");
        fs::create_dir(&path).unwrap();

        assert_eq!(safe_fwrite(&path, "#!/bin/sh\n", false).unwrap(), FsOutcome::Kept);
        assert!(path.is_dir());

        assert_eq!(safe_fwrite(&path, "#!/bin/sh\n", true).unwrap(), FsOutcome::Replaced);
        assert_eq!(fs::read_to_string(&path).unwrap(), "#!/bin/sh\n");
    }
}
