// ============================================================
// Layer 4 — Manifest Loader
// ============================================================
// Reads and writes manifests, and builds them from a directory
// of recordings.
//
// A manifest is a JSON array of [path, frames] rows:
//
//   [
//     ["data/clean/fileid_1.wav", 160000],
//     ["data/clean/fileid_2.wav", 80000]
//   ]
//
// Each paired dataset directory holds two of them, noisy.json
// and clean.json, one per side.
//
// build_manifest walks a directory tree, keeps every .wav file
// (extension compared case-insensitively), and reads the frame
// count from the WAV header without decoding samples.
//
// Reference: serde_json, walkdir and hound crate documentation
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use walkdir::WalkDir;

use crate::domain::{error::DatasetError, file_entry::FileEntry};

pub const NOISY_MANIFEST: &str = "noisy.json";
pub const CLEAN_MANIFEST: &str = "clean.json";

/// Load one manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<FileEntry>, DatasetError> {
    let file    = File::open(path)?;
    let entries = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        DatasetError::Manifest {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(entries)
}

/// Write one manifest file, pretty-printed.
pub fn save_manifest(path: &Path, entries: &[FileEntry]) -> Result<(), DatasetError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, entries).map_err(|source| {
        DatasetError::Manifest {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Load both manifests of a dataset directory as (noisy, clean).
pub fn load_pair(json_dir: &Path) -> Result<(Vec<FileEntry>, Vec<FileEntry>), DatasetError> {
    let noisy = load_manifest(&json_dir.join(NOISY_MANIFEST))?;
    let clean = load_manifest(&json_dir.join(CLEAN_MANIFEST))?;
    tracing::debug!(
        "Loaded manifests from '{}': {} noisy, {} clean",
        json_dir.display(),
        noisy.len(),
        clean.len()
    );
    Ok((noisy, clean))
}

/// Collect every .wav under `dir` with its frame count, sorted by path.
pub fn build_manifest(dir: &Path) -> Result<Vec<FileEntry>, DatasetError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() || !is_wav(entry.path()) {
            continue;
        }

        let path = entry
            .path()
            .to_str()
            .ok_or_else(|| DatasetError::NonUtf8Path(entry.path().to_path_buf()))?
            .to_string();

        let reader = hound::WavReader::open(entry.path()).map_err(|source| DatasetError::Wav {
            path: path.clone(),
            source,
        })?;
        entries.push(FileEntry::new(path, u64::from(reader.duration())));
    }

    entries.sort();
    tracing::info!("Found {} wav files under '{}'", entries.len(), dir.display());
    Ok(entries)
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::audioset::tests::write_ramp;
    use std::fs;

    #[test]
    fn test_manifest_round_trip_keeps_order() {
        let dir     = tempfile::tempdir().unwrap();
        let path    = dir.path().join(NOISY_MANIFEST);
        let entries = vec![FileEntry::new("z.wav", 1), FileEntry::new("a.wav", 2)];

        save_manifest(&path, &entries).unwrap();
        assert_eq!(load_manifest(&path).unwrap(), entries);
    }

    #[test]
    fn test_reads_manifest_written_elsewhere() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join(CLEAN_MANIFEST);
        fs::write(&path, r#"[["c/a.wav", 16000], ["c/b.wav", 8000]]"#).unwrap();

        let entries = load_manifest(&path).unwrap();
        assert_eq!(entries[1], FileEntry::new("c/b.wav", 8000));
    }

    #[test]
    fn test_malformed_manifest_names_the_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join(CLEAN_MANIFEST);
        fs::write(&path, r#"{"not": "a list"}"#).unwrap();

        match load_manifest(&path) {
            Err(DatasetError::Manifest { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_manifest_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_pair(dir.path()), Err(DatasetError::Io(_))));
    }

    #[test]
    fn test_build_manifest_walks_tree_for_wavs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        write_ramp(&dir.path().join("b.wav"), 7, 16000);
        write_ramp(&dir.path().join("sub").join("a.WAV"), 3, 16000);
        fs::write(dir.path().join("notes.txt"), "not audio").unwrap();

        let entries = build_manifest(dir.path()).unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].path.ends_with("b.wav"));
        assert_eq!(entries[0].size, 7);
        assert!(entries[1].path.ends_with("a.WAV"));
        assert_eq!(entries[1].size, 3);
    }
}
