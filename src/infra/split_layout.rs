// ============================================================
// Layer 6 — Split Directory Layout
// ============================================================
// Creates the train/validation directories next to an input
// directory and copies files into them.
//
// For an input directory `.../clean`:
//
//   .../clean          ← untouched input
//   .../train_clean    ← created if missing
//   .../val_clean      ← created if missing
//
// Copies keep the source's access and modification times.
// An existing destination file is overwritten; anything else
// already in the output directories is left alone.
//
// Reference: Rust Book §12 (I/O and File Handling)
//            std::fs documentation (File::set_times)

use std::{
    fs::{self, File, FileTimes},
    path::{Path, PathBuf},
};

use crate::data::splitter::SplitLabel;
use crate::domain::error::DatasetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDirs {
    pub train: PathBuf,
    pub val:   PathBuf,
}

impl SplitDirs {
    /// Create `train_<name>` and `val_<name>` beside `dir`.
    pub fn create(dir: &Path) -> Result<Self, DatasetError> {
        let dir    = fs::canonicalize(dir)?;
        let name   = dir
            .file_name()
            .ok_or_else(|| DatasetError::NoFileName(dir.clone()))?
            .to_str()
            .ok_or_else(|| DatasetError::NonUtf8Path(dir.clone()))?;
        let parent = dir.parent().unwrap_or(Path::new("/"));

        let dirs = Self {
            train: parent.join(format!("train_{name}")),
            val:   parent.join(format!("val_{name}")),
        };
        fs::create_dir_all(&dirs.train)?;
        fs::create_dir_all(&dirs.val)?;
        Ok(dirs)
    }

    pub fn for_label(&self, label: SplitLabel) -> &Path {
        match label {
            SplitLabel::Train      => &self.train,
            SplitLabel::Validation => &self.val,
        }
    }
}

/// Copy `src` into `dest_dir` under the same file name, keeping its times.
pub fn copy_into(src: &Path, dest_dir: &Path) -> Result<PathBuf, DatasetError> {
    let name = src
        .file_name()
        .ok_or_else(|| DatasetError::NoFileName(src.to_path_buf()))?;
    let dest = dest_dir.join(name);

    if dest.exists() {
        tracing::debug!("Overwriting '{}'", dest.display());
    }
    fs::copy(src, &dest)?;

    let meta  = fs::metadata(src)?;
    let times = FileTimes::new()
        .set_accessed(meta.accessed()?)
        .set_modified(meta.modified()?);
    // fs::copy carries the permission bits over, so the copy may be read-only
    File::open(&dest)?.set_times(times)?;

    Ok(dest)
}

/// List the names of regular files directly inside `dir`, following symlinks.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>, DatasetError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !fs::metadata(entry.path())?.is_file() {
            continue;
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| DatasetError::NonUtf8Path(entry.path()))?;
        names.push(name);
    }
    Ok(names)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    #[test]
    fn test_creates_sibling_dirs_idempotently() {
        let root  = tempfile::tempdir().unwrap();
        let clean = root.path().join("clean");
        fs::create_dir(&clean).unwrap();

        let first = SplitDirs::create(&clean).unwrap();
        assert!(first.train.ends_with("train_clean"));
        assert!(first.val.ends_with("val_clean"));
        assert!(first.train.is_dir() && first.val.is_dir());

        fs::write(first.train.join("keep.txt"), "x").unwrap();
        let second = SplitDirs::create(&clean).unwrap();
        assert_eq!(first, second);
        assert!(second.train.join("keep.txt").exists());
    }

    #[test]
    fn test_trailing_slash_uses_directory_name() {
        let root  = tempfile::tempdir().unwrap();
        let noisy = root.path().join("noisy");
        fs::create_dir(&noisy).unwrap();

        let with_slash = PathBuf::from(format!("{}/", noisy.display()));
        let dirs       = SplitDirs::create(&with_slash).unwrap();
        assert!(dirs.val.ends_with("val_noisy"));
    }

    #[test]
    fn test_copy_preserves_modified_time_and_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let src  = root.path().join("a.wav");
        let out  = root.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(&src, b"new").unwrap();
        fs::write(out.join("a.wav"), b"old contents").unwrap();

        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_times(FileTimes::new().set_modified(stamp))
            .unwrap();

        let dest = copy_into(&src, &out).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"new");
        assert_eq!(fs::metadata(&dest).unwrap().modified().unwrap(), stamp);
    }

    #[test]
    fn test_lists_only_regular_files() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("a.wav"), b"").unwrap();
        fs::create_dir(root.path().join("nested")).unwrap();

        let names = list_file_names(root.path()).unwrap();
        assert_eq!(names, vec!["a.wav".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_lists_symlinked_files() {
        let root   = tempfile::tempdir().unwrap();
        let store  = root.path().join("store");
        let inputs = root.path().join("clean");
        fs::create_dir(&store).unwrap();
        fs::create_dir(&inputs).unwrap();
        fs::write(store.join("a.wav"), b"a").unwrap();
        fs::create_dir(store.join("nested")).unwrap();
        std::os::unix::fs::symlink(store.join("a.wav"), inputs.join("a.wav")).unwrap();
        std::os::unix::fs::symlink(store.join("nested"), inputs.join("nested")).unwrap();

        let names = list_file_names(&inputs).unwrap();
        assert_eq!(names, vec!["a.wav".to_string()]);

        let out  = root.path().join("out");
        fs::create_dir(&out).unwrap();
        let dest = copy_into(&inputs.join("a.wav"), &out).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"a");
        assert!(!fs::symlink_metadata(&dest).unwrap().file_type().is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_copies_read_only_source() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let src  = root.path().join("a.wav");
        let out  = root.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(&src, b"frozen").unwrap();

        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_times(FileTimes::new().set_modified(stamp))
            .unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o444)).unwrap();

        let dest = copy_into(&src, &out).unwrap();
        let meta = fs::metadata(&dest).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o444);
        assert_eq!(meta.modified().unwrap(), stamp);
        assert_eq!(fs::read(&dest).unwrap(), b"frozen");
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let err  = copy_into(Path::new("/"), root.path()).unwrap_err();
        assert!(matches!(err, DatasetError::NoFileName(_)));
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let root = tempfile::tempdir().unwrap();
        let err  = SplitDirs::create(&root.path().join("absent")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
