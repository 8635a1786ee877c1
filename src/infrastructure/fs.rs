//! Local file helpers

use std::io::Write;
use std::path::Path;

use crate::error::DeployResult;

/// Write `content` to `path` atomically (temp file in the same directory, then rename).
pub fn atomic_write(path: &Path, content: &[u8]) -> DeployResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Copy `source` over `target` if `source` exists. Returns whether a copy happened.
pub fn copy_if_exists(source: &Path, target: &Path) -> DeployResult<bool> {
    if !source.is_file() {
        return Ok(false);
    }
    std::fs::copy(source, target)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("render.yaml");

        atomic_write(&path, b"services: []\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "services: []\n");
    }

    #[test]
    fn atomic_write_overwrite_and_create_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("infra/render.yaml");

        atomic_write(&path, b"Original").unwrap();
        atomic_write(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn copy_if_exists_copies() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("requirements-vercel.txt");
        let target = dir.path().join("requirements.txt");
        fs::write(&source, "dash\n").unwrap();
        fs::write(&target, "dash\npsycopg2\n").unwrap();

        assert!(copy_if_exists(&source, &target).unwrap());
        assert_eq!(fs::read_to_string(&target).unwrap(), "dash\n");
    }

    #[test]
    fn copy_if_exists_missing_source() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("requirements.txt");
        assert!(!copy_if_exists(&dir.path().join("nope.txt"), &target).unwrap());
        assert!(!target.exists());
    }
}
